use thiserror::Error;

use crate::bencode::{BencodeError, ValueKind};

/// Errors that can occur when extracting a torrent descriptor.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A value has the wrong bencode type.
    #[error("type mismatch for {field}: expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A required key is missing from a dictionary.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A text field is not valid UTF-8.
    #[error("field {0} is not valid utf-8")]
    InvalidUtf8(&'static str),

    /// An integer field is outside its allowed range.
    #[error("field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// A file entry has an empty `path` list.
    #[error("empty path segment list")]
    EmptyPath,

    /// A path segment is empty, is `.` or `..`, is absolute, or contains a separator.
    #[error("invalid segment {segment:?} in {field}")]
    InvalidPathSegment {
        field: &'static str,
        segment: String,
    },

    /// The `files` list has no entries.
    #[error("files list must not be empty")]
    EmptyFiles,

    /// An entry of the `files` list is invalid.
    #[error("invalid entry {index} in files: {source}")]
    InvalidFile {
        index: usize,
        #[source]
        source: Box<MetainfoError>,
    },

    /// The `pieces` byte string is not a whole number of SHA-1 digests.
    #[error("piece hash length {0} is not a multiple of 20")]
    InvalidPiecesLength(usize),

    /// The info dictionary has neither `length` nor `files`.
    #[error("neither length nor files present in info")]
    NoLengthOrFiles,

    /// The info dictionary could not be re-encoded for hashing.
    #[error("failed to encode info dictionary for hashing: {0}")]
    InfoHash(#[source] BencodeError),

    /// An info hash has an invalid length (must be 20 bytes).
    #[error("invalid info hash length")]
    InvalidInfoHashLength,

    /// An info hash string contains characters that are not hex digits.
    #[error("invalid hex in info hash")]
    InvalidHex,

    /// An I/O error occurred while reading the torrent file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetainfoError {
    /// Returns the innermost error, looking through [`MetainfoError::InvalidFile`].
    pub fn root(&self) -> &MetainfoError {
        match self {
            MetainfoError::InvalidFile { source, .. } => source.root(),
            other => other,
        }
    }
}
