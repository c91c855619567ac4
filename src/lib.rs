//! Imprint: a pattern-keyed, fixed-width string obfuscation codec.
//!
//! This crate deterministically transforms an input string plus a secret
//! "pattern" string into an exactly 255-character printable-ASCII digest,
//! and verifies whether a given digest was produced from a given input and
//! pattern. It provides:
//! - Printable-ASCII folding of arbitrary scalar values into [33,126].
//! - Per-character expansion into pattern-derived runs sized by the decimal
//!   digits of each character's scalar value.
//! - Length normalization to exactly 255 characters via repeat-truncate
//!   (short buffers) or deterministic stride deletion (long buffers).
//!
//! # Not a cryptographic hash
//!
//! The codec offers no collision resistance and no preimage resistance. It
//! is a lossy obfuscation scheme with a fixed-width canonical form — use it
//! where a reproducible, opaque, fixed-length token is wanted and a real
//! KDF or cryptographic hash is not required.
//!
//! # Example
//!
//! ```
//! use imprint::prelude::*;
//!
//! let imp = Imprinter::new("securePattern").unwrap();
//! let digest = imp.hash("HelloWorld");
//! assert_eq!(digest.len(), MAX_HASH_LENGTH);
//! assert!(imp.matches(digest.as_str(), "HelloWorld"));
//!
//! // One-shot facade, no imprinter held:
//! assert_eq!(imprint::hash("HelloWorld", "securePattern").unwrap(), digest);
//! ```

pub mod constants;
pub mod core;
pub mod expansion;
pub mod interface;
pub mod normalize;
pub mod pattern;
pub mod sanitize;

pub use crate::constants::MAX_HASH_LENGTH;
pub use crate::core::{Digest, Imprinter};
pub use crate::interface::{hash, matches};
pub use crate::pattern::{ImprintError, Pattern};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::constants::MAX_HASH_LENGTH;
    pub use crate::core::{Digest, Imprinter};
    pub use crate::interface::{hash, matches};
    pub use crate::pattern::{ImprintError, Pattern};
}
