//! Codec and metainfo constants.
//!
//! Limits here are hardening defaults for decoding untrusted input. They can be
//! overridden per call through [`DecodeLimits`](crate::bencode::DecodeLimits).

// ============================================================================
// Decoder limits
// ============================================================================

/// Default maximum nesting depth of lists and dictionaries.
///
/// A torrent file needs four or five levels; anything close to this is hostile.
pub const DEFAULT_MAX_DEPTH: usize = 200;

// ============================================================================
// Metainfo
// ============================================================================

/// Length of a SHA-1 digest, used for both piece hashes and the info hash.
pub const SHA1_LEN: usize = 20;
