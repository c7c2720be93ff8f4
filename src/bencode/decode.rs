use super::error::BencodeError;
use super::value::Value;
use crate::constants::DEFAULT_MAX_DEPTH;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Bounds applied while decoding untrusted input.
///
/// # Examples
///
/// ```
/// use bmeta::bencode::{decode_with, BencodeError, DecodeLimits};
///
/// let limits = DecodeLimits { max_depth: 1, ..DecodeLimits::default() };
/// assert!(decode_with(b"li1ee", &limits).is_ok());
/// assert!(matches!(
///     decode_with(b"llee", &limits),
///     Err(BencodeError::NestingTooDeep { limit: 1, .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum number of nested lists and dictionaries.
    pub max_depth: usize,
    /// Maximum input length in bytes, if any.
    pub max_len: Option<usize>,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_len: None,
        }
    }
}

/// Decodes a complete bencode document.
///
/// The whole buffer must be exactly one value; anything after it is reported
/// as [`BencodeError::TrailingData`]. Use [`decode_prefix`] to decode a value
/// that is followed by other data.
///
/// # Examples
///
/// ```
/// use bmeta::bencode::{decode, Value};
///
/// assert_eq!(decode(b"i-7e").unwrap(), Value::Integer(-7));
/// assert!(decode(b"i-7eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_with(data, &DecodeLimits::default())
}

/// Decodes a complete bencode document using explicit limits.
pub fn decode_with(data: &[u8], limits: &DecodeLimits) -> Result<Value, BencodeError> {
    let (value, consumed) = decode_prefix_with(data, limits)?;

    if consumed != data.len() {
        return Err(BencodeError::TrailingData { position: consumed });
    }

    Ok(value)
}

/// Decodes the value at the start of `data`.
///
/// Returns the value together with the number of bytes it occupied, so that
/// the caller can continue scanning right after it.
///
/// # Examples
///
/// ```
/// use bmeta::bencode::{decode_prefix, Value};
///
/// let (value, consumed) = decode_prefix(b"4:spamrest").unwrap();
/// assert_eq!(value, Value::string("spam"));
/// assert_eq!(consumed, 6);
/// ```
pub fn decode_prefix(data: &[u8]) -> Result<(Value, usize), BencodeError> {
    decode_prefix_with(data, &DecodeLimits::default())
}

/// Decodes the value at the start of `data` using explicit limits.
pub fn decode_prefix_with(
    data: &[u8],
    limits: &DecodeLimits,
) -> Result<(Value, usize), BencodeError> {
    if data.is_empty() {
        return Err(BencodeError::EmptyInput);
    }

    if let Some(limit) = limits.max_len {
        if data.len() > limit {
            return Err(BencodeError::InputTooLarge {
                len: data.len(),
                limit,
            });
        }
    }

    let mut decoder = Decoder {
        data,
        pos: 0,
        max_depth: limits.max_depth,
    };
    let value = decoder.decode_value(0)?;

    tracing::trace!(consumed = decoder.pos, "decoded bencode value");
    Ok((value, decoder.pos))
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl Decoder<'_> {
    /// `depth` is the number of lists and dictionaries enclosing the value.
    fn decode_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let Some(&tag) = self.data.get(self.pos) else {
            return Err(BencodeError::EmptyInput);
        };

        match tag {
            b'i' => self.decode_integer(),
            b'0'..=b'9' => self.decode_bytes().map(Value::Bytes),
            b'l' => self.decode_list(depth),
            b'd' => self.decode_dict(depth),
            byte => Err(BencodeError::UnrecognizedTag {
                byte,
                position: self.pos,
            }),
        }
    }

    fn decode_integer(&mut self) -> Result<Value, BencodeError> {
        let start = self.pos;
        let digits_start = start + 1;

        let end = self
            .find(b'e', digits_start)
            .ok_or(BencodeError::TruncatedInteger { position: start })?;

        let digits = &self.data[digits_start..end];
        let value = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| BencodeError::MalformedInteger {
                digits: String::from_utf8_lossy(digits).into_owned(),
                position: start,
            })?;

        self.pos = end + 1;
        Ok(Value::Integer(value))
    }

    fn decode_bytes(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;

        let colon = self
            .find(b':', start)
            .ok_or(BencodeError::TruncatedLength { position: start })?;

        let len: usize = std::str::from_utf8(&self.data[start..colon])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::MalformedLength { position: start })?;

        let body = colon + 1;
        let available = self.data.len() - body;
        if len > available {
            return Err(BencodeError::BufferUnderrun {
                position: body,
                needed: len,
                available,
            });
        }

        self.pos = body + len;
        Ok(Bytes::copy_from_slice(&self.data[body..self.pos]))
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let start = self.pos;
        self.enter(depth)?;

        let mut list = Vec::new();
        loop {
            match self.data.get(self.pos) {
                None => return Err(BencodeError::TruncatedList { position: start }),
                Some(b'e') => break,
                Some(_) => list.push(self.decode_value(depth + 1)?),
            }
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let start = self.pos;
        self.enter(depth)?;

        let mut dict = BTreeMap::new();
        loop {
            match self.data.get(self.pos) {
                None => return Err(BencodeError::TruncatedDictionary { position: start }),
                Some(b'e') => break,
                Some(_) => {}
            }

            let key_pos = self.pos;
            let key = match self.decode_value(depth + 1)? {
                Value::Bytes(key) => key,
                _ => return Err(BencodeError::NonStringKey { position: key_pos }),
            };

            if self.pos >= self.data.len() {
                return Err(BencodeError::TruncatedDictionary { position: start });
            }

            // Last occurrence of a duplicated key wins.
            let value = self.decode_value(depth + 1)?;
            dict.insert(key, value);
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }

    /// Steps past the opening tag of a list or dictionary.
    fn enter(&mut self, depth: usize) -> Result<(), BencodeError> {
        if depth >= self.max_depth {
            return Err(BencodeError::NestingTooDeep {
                limit: self.max_depth,
                position: self.pos,
            });
        }
        self.pos += 1;
        Ok(())
    }

    fn find(&self, byte: u8, from: usize) -> Option<usize> {
        self.data
            .get(from..)?
            .iter()
            .position(|&b| b == byte)
            .map(|offset| from + offset)
    }
}
