//! The secret pattern driving expansion.
//!
//! A `Pattern` is a non-empty, immutable byte sequence whose every byte has
//! been folded into printable ASCII at construction. It is pure value data:
//! each `Imprinter` owns its own copy and never mutates it.

use crate::constants::ASCII_DIFF;
use crate::sanitize;
use serde::{Deserialize, Serialize};

/// A sanitized, non-empty pattern.
///
/// # Invariants
/// - `bytes` is never empty (enforced by [`Pattern::new`]); indexing by
///   `i % len` is therefore always well-defined.
/// - Every byte lies in [33,126].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Builds a pattern from a raw string, folding every scalar value into
    /// the printable range.
    ///
    /// Fails with [`ImprintError::EmptyPattern`] on an empty string; the
    /// pattern length is a divisor throughout the codec.
    pub fn new(pattern: &str) -> Result<Self, ImprintError> {
        if pattern.is_empty() {
            return Err(ImprintError::EmptyPattern);
        }
        let bytes = pattern.chars().map(|c| sanitize::fold(c as i32)).collect();
        Ok(Self { bytes })
    }

    /// Number of bytes in the pattern. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The sanitized pattern bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The pattern byte at cyclic position `i`.
    #[inline]
    pub fn cycle(&self, i: usize) -> u8 {
        self.bytes[i % self.bytes.len()]
    }

    /// The pattern byte at cyclic position `i`, shifted down by
    /// [`ASCII_DIFF`] and refolded into the printable range.
    #[inline]
    pub fn shifted(&self, i: usize) -> u8 {
        sanitize::fold(self.cycle(i) as i32 - ASCII_DIFF)
    }
}

/// Error type for imprint construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprintError {
    /// The pattern string was empty.
    EmptyPattern,
}

impl std::fmt::Display for ImprintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImprintError::EmptyPattern => write!(f, "pattern must not be empty"),
        }
    }
}

impl std::error::Error for ImprintError {}
