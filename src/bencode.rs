//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used for `.torrent` files. It has four
//! data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding is a single forward pass over an in-memory buffer and never reads
//! past its end. Encoding always produces the canonical form, with dictionary
//! keys sorted, so re-encoding a decoded value is a stable basis for hashing.
//!
//! # Examples
//!
//! ```
//! use bmeta::bencode::{decode, encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let value = decode(b"d3:cow3:moo4:spaml1:a1:bee").unwrap();
//! assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
//!
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"key"), Value::string("value"));
//! assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d3:key5:valuee");
//! ```
//!
//! # Error Handling
//!
//! Every syntax problem has its own [`BencodeError`] variant carrying the byte
//! offset where it was found, for example:
//!
//! - [`BencodeError::TruncatedList`] - Input ended before a list's closing `e`
//! - [`BencodeError::MalformedInteger`] - Integer digits are not a valid `i64`
//! - [`BencodeError::BufferUnderrun`] - A byte string is longer than the remaining input
//! - [`BencodeError::NonStringKey`] - A dictionary key is not a byte string
//! - [`BencodeError::NestingTooDeep`] - Nesting exceeded [`DecodeLimits::max_depth`]
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix, decode_prefix_with, decode_with, DecodeLimits};
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use value::{Value, ValueKind};

#[cfg(test)]
mod tests;
