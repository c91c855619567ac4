//! The imprinter: pattern-keyed hashing to a fixed-width digest.

use crate::constants::MAX_HASH_LENGTH;
use crate::expansion::expand;
use crate::normalize::normalize;
use crate::pattern::{ImprintError, Pattern};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 255-character digest.
///
/// Transparent wrapper over the output string. Every byte lies in [33,126]
/// and the length is always exactly [`MAX_HASH_LENGTH`]; both invariants are
/// maintained by [`Imprinter::hash`], the only producer. Digests have no
/// identity beyond their value and compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// The digest as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the digest, returning the underlying string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Digest length in characters. Always [`MAX_HASH_LENGTH`].
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Digest {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Digest {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pattern-keyed imprinter.
///
/// Owns a sanitized [`Pattern`] and turns input strings into fixed-width
/// [`Digest`]s. `hash` is a pure function of `(pattern, input)`: no hidden
/// state, no randomness, no I/O. Instances are freely shareable across
/// threads; each call owns its working buffer exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imprinter {
    pattern: Pattern,
}

impl Imprinter {
    /// Creates an imprinter from a raw pattern string.
    ///
    /// Fails with [`ImprintError::EmptyPattern`] on an empty pattern; this
    /// is the codec's only failure mode.
    pub fn new(pattern: &str) -> Result<Self, ImprintError> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }

    /// The sanitized pattern this imprinter hashes with.
    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Hashes `input` into a 255-character digest.
    ///
    /// Expansion followed by normalization. Total over all inputs,
    /// including the empty string.
    pub fn hash(&self, input: &str) -> Digest {
        let buf = expand(input, &self.pattern);
        let out = normalize(buf, self.pattern.as_bytes());
        debug_assert_eq!(out.len(), MAX_HASH_LENGTH);
        // Normalization output is printable ASCII by construction.
        Digest(out.into_iter().map(char::from).collect())
    }

    /// True iff `expected` equals the digest of `input` under this pattern.
    ///
    /// Full structural string equality, never a prefix or length-truncated
    /// comparison.
    pub fn matches(&self, expected: &str, input: &str) -> bool {
        self.hash(input) == *expected
    }
}
