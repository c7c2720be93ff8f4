use super::error::MetainfoError;
use crate::bencode::{encode_to, Value};
use crate::constants::SHA1_LEN;
use sha1::{Digest, Sha1};
use std::fmt;

/// SHA-1 digest of the canonical encoding of a torrent's info dictionary.
///
/// # Examples
///
/// ```
/// use bmeta::metainfo::InfoHash;
///
/// let hash = InfoHash::from_hex("c12fe1c06bba254a9dc9f519b335aa7c1367a88a").unwrap();
/// assert_eq!(hash.as_bytes().len(), 20);
/// assert_eq!(hash.to_string(), "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash([u8; SHA1_LEN]);

impl InfoHash {
    /// Hashes the canonical encoding of `info`.
    ///
    /// The value is re-encoded rather than hashing the input slice it came
    /// from, so the hash depends only on the logical content of the dictionary.
    pub fn compute(info: &Value) -> Result<Self, MetainfoError> {
        let mut hasher = Sha1::new();
        encode_to(info, &mut hasher).map_err(MetainfoError::InfoHash)?;
        Ok(Self(hasher.finalize().into()))
    }

    /// Hashes already-encoded info dictionary bytes.
    pub fn digest(raw_info: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(raw_info);
        Self(hasher.finalize().into())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        let arr: [u8; SHA1_LEN] = bytes
            .try_into()
            .map_err(|_| MetainfoError::InvalidInfoHashLength)?;
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, MetainfoError> {
        let bytes = hex_decode(s).ok_or(MetainfoError::InvalidHex)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SHA1_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl From<[u8; SHA1_LEN]> for InfoHash {
    fn from(bytes: [u8; SHA1_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
        s
    })
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
