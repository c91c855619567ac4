//! Shared compile-time constants for the imprint codec.
//!
//! All arithmetic in the crate is phrased in terms of these values; none of
//! them is configurable at runtime.

/// Divisor splitting an input character's scalar value into its "tens" and
/// "mod" run lengths during expansion.
pub const TEN: u32 = 10;

/// Offset subtracted from a pattern byte to derive its shifted counterpart.
pub const ASCII_DIFF: i32 = 32;

/// Exact length of every digest, in characters.
pub const MAX_HASH_LENGTH: usize = 255;

/// Lowest printable ASCII code admitted in patterns and digests (`'!'`).
pub const PRINTABLE_MIN: i32 = 33;

/// Highest printable ASCII code admitted in patterns and digests (`'~'`).
pub const PRINTABLE_MAX: i32 = 126;

/// Number of distinct printable codes, the modulus of the fold.
pub const PRINTABLE_SPAN: i32 = PRINTABLE_MAX - PRINTABLE_MIN + 1;
