use super::error::MetainfoError;
use super::fields::{expect_list, expect_text, Fields};
use super::info_hash::InfoHash;
use crate::bencode::{decode, decode_with, DecodeLimits, Value};
use crate::constants::SHA1_LEN;
use std::path::{Component, Path, PathBuf};

/// A parsed torrent file.
///
/// # Examples
///
/// ```
/// use bmeta::metainfo::Metainfo;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = b"d8:announce11:here i come4:infod6:lengthi5e4:name4:temp\
///              12:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaaee";
/// let metainfo = Metainfo::from_bytes(data)?;
///
/// assert_eq!(metainfo.announce, "here i come");
/// assert_eq!(metainfo.info.name, "temp");
/// assert_eq!(metainfo.info.total_length(), 5);
/// println!("Info hash: {}", metainfo.info.info_hash);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    /// Tracker announce URL.
    pub announce: String,
    /// The info dictionary containing file and piece information.
    pub info: Info,
}

/// The info dictionary from a torrent file.
///
/// The SHA1 hash of this dictionary (in canonical bencode form) is the info hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// Suggested name for the file or directory.
    pub name: String,
    /// Number of bytes per piece. Every piece but the last has this size.
    pub piece_length: u64,
    /// SHA1 hash of each piece, in piece order.
    pub pieces: Vec<[u8; SHA1_LEN]>,
    /// Single-file length or multi-file list.
    pub layout: FileLayout,
    /// Hash of the canonical encoding of the info dictionary.
    pub info_hash: InfoHash,
}

/// How the content of a torrent is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLayout {
    /// One file named after [`Info::name`].
    Single { length: u64 },
    /// Several files under a directory named after [`Info::name`].
    Multi { files: Vec<File> },
}

/// A file within a multi-file torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Size of the file in bytes.
    pub length: u64,
    /// Path to the file, relative to the torrent's root directory.
    pub path: PathBuf,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode, or has data after the root dictionary
    /// - Required fields are missing or have the wrong type
    /// - The pieces field length is not a multiple of 20
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        Self::from_value(&decode(data)?)
    }

    /// Parses a torrent file from raw bytes with explicit decoder limits.
    pub fn from_bytes_with(data: &[u8], limits: &DecodeLimits) -> Result<Self, MetainfoError> {
        Self::from_value(&decode_with(data, limits)?)
    }

    /// Reads and parses a `.torrent` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetainfoError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), len = data.len(), "read torrent file");
        Self::from_bytes(&data)
    }

    /// Extracts a descriptor from a decoded root dictionary.
    pub fn from_value(value: &Value) -> Result<Self, MetainfoError> {
        let root = Fields::of(value, "root")?;

        let announce = root.text("announce")?;
        let info = Info::from_value(root.require("info")?)?;

        Ok(Self { announce, info })
    }
}

impl Info {
    /// Extracts the info dictionary and computes its info hash.
    pub fn from_value(value: &Value) -> Result<Self, MetainfoError> {
        let dict = Fields::of(value, "info")?;

        let name = dict.text("name")?;
        let piece_length = dict.integer_at_least("piece length", 1)?;

        let pieces_bytes = dict.bytes("pieces")?;
        if pieces_bytes.len() % SHA1_LEN != 0 {
            return Err(MetainfoError::InvalidPiecesLength(pieces_bytes.len()));
        }

        let pieces: Vec<[u8; SHA1_LEN]> = pieces_bytes
            .chunks_exact(SHA1_LEN)
            .map(|chunk| {
                let mut arr = [0u8; SHA1_LEN];
                arr.copy_from_slice(chunk);
                arr
            })
            .collect();

        let layout = match (dict.get("length").is_some(), dict.get("files")) {
            (true, files) => {
                if files.is_some() {
                    tracing::warn!(name = %name, "info has both length and files, using length");
                }
                FileLayout::Single {
                    length: dict.integer_at_least("length", 0)?,
                }
            }
            (false, Some(files)) => {
                tracing::debug!(name = %name, "no length in info, multi-file torrent");
                FileLayout::Multi {
                    files: parse_files(files)?,
                }
            }
            (false, None) => return Err(MetainfoError::NoLengthOrFiles),
        };

        let info_hash = InfoHash::compute(value)?;
        tracing::debug!(name = %name, %info_hash, pieces = pieces.len(), "parsed info");

        Ok(Self {
            name,
            piece_length,
            pieces,
            layout,
            info_hash,
        })
    }

    /// Returns the number of pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if this torrent has a `files` list.
    pub fn is_multi_file(&self) -> bool {
        matches!(self.layout, FileLayout::Multi { .. })
    }

    /// Returns the files of a multi-file torrent, or an empty slice.
    pub fn files(&self) -> &[File] {
        match &self.layout {
            FileLayout::Single { .. } => &[],
            FileLayout::Multi { files } => files,
        }
    }

    /// Returns the total size of the content in bytes.
    pub fn total_length(&self) -> u64 {
        match &self.layout {
            FileLayout::Single { length } => *length,
            FileLayout::Multi { files } => files
                .iter()
                .fold(0u64, |total, file| total.saturating_add(file.length)),
        }
    }

    /// Returns the size of the piece at `index`.
    ///
    /// All pieces have [`Info::piece_length`] bytes except the last, which holds
    /// whatever remains. Returns `None` if `index` is out of range.
    pub fn piece_size(&self, index: usize) -> Option<u64> {
        if index >= self.pieces.len() {
            return None;
        }
        let start = (index as u64).saturating_mul(self.piece_length);
        let remaining = self.total_length().saturating_sub(start);
        Some(remaining.min(self.piece_length))
    }
}

impl File {
    /// Extracts one entry of the `files` list.
    pub fn from_value(value: &Value) -> Result<Self, MetainfoError> {
        let dict = Fields::of(value, "file")?;

        let length = dict.integer_at_least("length", 0)?;

        let segments = dict.list("path")?;
        if segments.is_empty() {
            return Err(MetainfoError::EmptyPath);
        }

        let mut path = PathBuf::new();
        for segment in segments {
            let segment = expect_text(segment, "path")?;
            if !is_plain_segment(&segment) {
                return Err(MetainfoError::InvalidPathSegment {
                    field: "path",
                    segment,
                });
            }
            path.push(segment);
        }

        Ok(Self { length, path })
    }
}

/// A segment must name exactly one normal path component, so that joining
/// segments can never leave the torrent's root directory.
fn is_plain_segment(segment: &str) -> bool {
    if segment.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == segment
    )
}

/// Extracts the `files` list of a multi-file torrent.
///
/// Errors in an entry are wrapped in [`MetainfoError::InvalidFile`] with the
/// entry's index.
pub fn parse_files(value: &Value) -> Result<Vec<File>, MetainfoError> {
    let list = expect_list(value, "files")?;
    if list.is_empty() {
        return Err(MetainfoError::EmptyFiles);
    }

    list.iter()
        .enumerate()
        .map(|(index, entry)| {
            File::from_value(entry).map_err(|source| MetainfoError::InvalidFile {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
