use thiserror::Error;

/// Errors produced while decoding or encoding bencode.
///
/// Decoding errors carry the byte offset (`position`) at which the problem was
/// detected, relative to the start of the buffer handed to the decoder.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The input buffer was empty.
    #[error("empty input")]
    EmptyInput,

    /// A value started with a byte that is not `i`, `l`, `d` or an ASCII digit.
    #[error("unrecognized value tag {byte:#04x} at offset {position}")]
    UnrecognizedTag { byte: u8, position: usize },

    /// An integer was not terminated by `e` before the end of input.
    #[error("truncated integer at offset {position}")]
    TruncatedInteger { position: usize },

    /// The digits of an integer do not form a valid signed 64-bit number.
    #[error("malformed integer {digits:?} at offset {position}")]
    MalformedInteger { digits: String, position: usize },

    /// A byte string length prefix was not terminated by `:`.
    #[error("truncated length prefix at offset {position}")]
    TruncatedLength { position: usize },

    /// A byte string length prefix is not a valid non-negative number.
    #[error("malformed length prefix at offset {position}")]
    MalformedLength { position: usize },

    /// Fewer bytes remain than a byte string length prefix announced.
    #[error("buffer underrun at offset {position}: need {needed} bytes, {available} available")]
    BufferUnderrun {
        position: usize,
        needed: usize,
        available: usize,
    },

    /// A list was not terminated by `e` before the end of input.
    #[error("truncated list starting at offset {position}")]
    TruncatedList { position: usize },

    /// A dictionary was not terminated by `e` before the end of input.
    #[error("truncated dictionary starting at offset {position}")]
    TruncatedDictionary { position: usize },

    /// A dictionary key decoded to something other than a byte string.
    #[error("non-string dictionary key at offset {position}")]
    NonStringKey { position: usize },

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at offset {position}")]
    NestingTooDeep { limit: usize, position: usize },

    /// The input is larger than the configured size cap.
    #[error("input of {len} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    /// Bytes remain after a complete top-level value.
    #[error("trailing data at offset {position}")]
    TrailingData { position: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
