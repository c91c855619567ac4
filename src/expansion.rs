//! Per-character expansion into pattern-derived runs.
//!
//! Each input character contributes two runs, sized by the decimal digits of
//! its scalar value: a "tens" run of shifted pattern bytes followed by a
//! "mod" run of the pattern bytes themselves. The concatenated runs form the
//! raw buffer handed to normalization.

use crate::constants::TEN;
use crate::pattern::Pattern;

/// Expands `input` into the raw (pre-normalization) byte buffer.
///
/// For a character with scalar value `code`, appends `code / 10` shifted
/// pattern bytes, then `code % 10` unshifted ones, both taken cyclically
/// from position 0. Deterministic in `(input, pattern)`; an empty input
/// yields an empty buffer.
pub fn expand(input: &str, pattern: &Pattern) -> Vec<u8> {
    let mut buf = Vec::new();
    for c in input.chars() {
        let code = c as u32;
        let tens = (code / TEN) as usize;
        let rem = (code % TEN) as usize;

        for i in 0..tens {
            buf.push(pattern.shifted(i));
        }
        for i in 0..rem {
            buf.push(pattern.cycle(i));
        }
    }
    buf
}
