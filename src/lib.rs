//! bmeta - Bencode and torrent metainfo
//!
//! This library decodes and encodes bencode ([BEP-3]) and extracts a typed
//! torrent descriptor from a decoded `.torrent` document, including the info
//! hash computed over the canonical encoding of the `info` dictionary.
//!
//! # Modules
//!
//! - [`bencode`] - Bencode decoding and canonical encoding
//! - [`metainfo`] - Torrent descriptor extraction and info hash
//! - [`constants`] - Decoder limits and digest sizes
//!
//! # Examples
//!
//! ```
//! use bmeta::{decode, Metainfo};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = decode(b"d8:announce3:url4:infod6:lengthi3e4:name1:a12:piece lengthi4e6:pieces0:ee")?;
//! let metainfo = Metainfo::from_value(&value)?;
//! assert_eq!(metainfo.info.total_length(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod constants;
pub mod metainfo;

pub use bencode::{decode, decode_prefix, encode, BencodeError, DecodeLimits, Value, ValueKind};
pub use metainfo::{File, FileLayout, Info, InfoHash, Metainfo, MetainfoError};
