//! Printable-ASCII folding.
//!
//! Every character that enters the codec — pattern characters at
//! construction, shifted pattern bytes during expansion — is folded into the
//! printable range [33,126] before use, so digests contain printable ASCII
//! only.
//!
//! # Design note
//! The fold is true modular wraparound over the 94-value printable span,
//! not a single-step remap. A single-step rule (`126 - (33 - c)` below the
//! range, `33 + (c - 126)` above it) leaves far-out scalar values such as
//! non-ASCII code points outside the range after one application; the
//! modular rule is total and agrees byte-for-byte with the single-step rule
//! everywhere the latter lands in range (scalar values in [-61, 219]).

use crate::constants::{PRINTABLE_MIN, PRINTABLE_SPAN};

/// Folds an arbitrary scalar value into the printable range [33,126].
///
/// Total over `i32`; the result always fits in a single ASCII byte.
#[inline]
pub const fn fold(code: i32) -> u8 {
    ((code - PRINTABLE_MIN).rem_euclid(PRINTABLE_SPAN) + PRINTABLE_MIN) as u8
}

/// Folds a `char` into the printable range, returning the folded `char`.
#[inline]
pub fn fold_char(c: char) -> char {
    fold(c as i32) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PRINTABLE_MAX, PRINTABLE_MIN};

    /// In-range codes pass through unchanged.
    #[test]
    fn identity_on_printable_range() {
        for code in PRINTABLE_MIN..=PRINTABLE_MAX {
            assert_eq!(fold(code) as i32, code);
        }
    }

    /// Agrees with the one-step remap on its entire well-defined window.
    #[test]
    fn matches_single_step_remap_in_window() {
        let single_step = |c: i32| {
            if c < PRINTABLE_MIN {
                PRINTABLE_MAX - (PRINTABLE_MIN - c)
            } else if c > PRINTABLE_MAX {
                PRINTABLE_MIN + (c - PRINTABLE_MAX)
            } else {
                c
            }
        };
        for code in (PRINTABLE_MIN - 94)..=(PRINTABLE_MAX + 94) {
            assert_eq!(fold(code) as i32, single_step(code), "code {}", code);
        }
    }

    /// Total and in range for scalar values far outside the window.
    #[test]
    fn in_range_for_far_out_codes() {
        for code in [0, -300, 300, 0x65E5, char::MAX as i32] {
            let folded = fold(code) as i32;
            assert!((PRINTABLE_MIN..=PRINTABLE_MAX).contains(&folded));
        }
    }

    #[test]
    fn boundary_wraparound() {
        // One below the range wraps to the top, one above wraps to the bottom.
        assert_eq!(fold(PRINTABLE_MIN - 1) as i32, PRINTABLE_MAX);
        assert_eq!(fold(PRINTABLE_MAX + 1) as i32, PRINTABLE_MIN);
        assert_eq!(fold_char(' '), '~');
    }
}
