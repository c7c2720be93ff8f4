//! Torrent metainfo handling ([BEP-3]).
//!
//! This module turns a decoded bencode tree into a strongly-typed torrent
//! descriptor.
//!
//! # Overview
//!
//! A torrent file (`.torrent`) is a bencoded dictionary with:
//!
//! - **announce** - Tracker URL
//! - **info** - Core torrent metadata (hashed to create the info hash)
//!   - `name` - Suggested file/directory name
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated SHA1 hashes of each piece
//!   - `length` - Total size (single-file) OR `files` list (multi-file)
//!
//! The info hash is never read from the input. It is recomputed by re-encoding
//! the decoded `info` dictionary in canonical form and hashing those bytes, so
//! two files that differ only in dictionary key order share an info hash.
//!
//! # Examples
//!
//! ```no_run
//! use bmeta::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let torrent = Metainfo::from_file("example.torrent")?;
//!
//! println!("Name: {}", torrent.info.name);
//! println!("Info hash: {}", torrent.info.info_hash);
//! println!("Total size: {} bytes", torrent.info.total_length());
//! println!("Number of pieces: {}", torrent.info.piece_count());
//!
//! for file in torrent.info.files() {
//!     println!("  {} ({} bytes)", file.path.display(), file.length);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Decoding and extraction can also be done as separate steps:
//!
//! ```
//! use bmeta::bencode::decode;
//! use bmeta::metainfo::{Metainfo, MetainfoError};
//!
//! let value = decode(b"d8:announce3:url4:infod4:name1:x12:piece lengthi1e6:pieces0:ee").unwrap();
//! let err = Metainfo::from_value(&value).unwrap_err();
//! assert!(matches!(err, MetainfoError::NoLengthOrFiles));
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod fields;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{parse_files, File, FileLayout, Info, Metainfo};
