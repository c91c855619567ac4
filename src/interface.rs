//! One-shot convenience facade.
//!
//! Composes [`Imprinter`] construction and invocation for callers that hash
//! or verify a single value and do not want to hold an imprinter. Pure
//! pass-through; no independent state or algorithm.

use crate::core::{Digest, Imprinter};
use crate::pattern::ImprintError;

/// Hashes `input` under `pattern` in one call.
///
/// Fails with [`ImprintError::EmptyPattern`] on an empty pattern.
pub fn hash(input: &str, pattern: &str) -> Result<Digest, ImprintError> {
    Ok(Imprinter::new(pattern)?.hash(input))
}

/// True iff `expected` equals the digest of `input` under `pattern`.
///
/// Fails with [`ImprintError::EmptyPattern`] on an empty pattern.
pub fn matches(expected: &str, input: &str, pattern: &str) -> Result<bool, ImprintError> {
    Ok(Imprinter::new(pattern)?.matches(expected, input))
}
