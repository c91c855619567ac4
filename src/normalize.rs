//! Length normalization ("cut") to exactly [`MAX_HASH_LENGTH`] bytes.
//!
//! Short buffers are self-concatenated and truncated; long buffers are
//! thinned by repeated stride-deletion passes. The thinning pass mutates the
//! buffer in place while scanning it with an explicit cursor, so the set of
//! deleted positions depends on the scan-while-mutating order. That order is
//! part of the codec's observable behavior and must not be replaced by a
//! declarative filter or iterator pipeline.
//!
//! # Determinism
//! For identical buffer content the deletion index sequence is identical on
//! every run: the stride is a pure function of the current length and the
//! cursor advances by a fixed step.
//!
//! # Termination
//! Each pass has `step >= 2` and deletes at least one element whenever the
//! buffer is over-length, so the length strictly decreases until it reaches
//! exactly [`MAX_HASH_LENGTH`].

use crate::constants::MAX_HASH_LENGTH;

/// Normalizes `buf` to exactly [`MAX_HASH_LENGTH`] bytes.
///
/// An empty buffer (the empty-input case) is replaced by a copy of `seed`
/// before normalization, keeping empty input accepted, deterministic, and
/// pattern-sensitive. `seed` must be non-empty; `Pattern` construction
/// guarantees this for the only caller.
pub fn normalize(mut buf: Vec<u8>, seed: &[u8]) -> Vec<u8> {
    debug_assert!(!seed.is_empty());
    if buf.is_empty() {
        buf = seed.to_vec();
    }

    if buf.len() < MAX_HASH_LENGTH {
        return grow(buf);
    }
    while buf.len() > MAX_HASH_LENGTH {
        thin_pass(&mut buf);
    }
    buf
}

/// Repeat-and-truncate for under-length buffers.
fn grow(buf: Vec<u8>) -> Vec<u8> {
    let reps = MAX_HASH_LENGTH / buf.len() + 1;
    let mut out = Vec::with_capacity(buf.len() * reps);
    for _ in 0..reps {
        out.extend_from_slice(&buf);
    }
    out.truncate(MAX_HASH_LENGTH);
    out
}

/// One stride-deletion pass over an over-length buffer.
///
/// The cursor starts at `step - 1` and advances by `step` after every
/// deletion. Deletion shifts the tail left, so the cursor lands `step + 1`
/// original positions past the previous victim; the scan never backs up or
/// restarts. Stops early the moment the buffer reaches the target length.
fn thin_pass(buf: &mut Vec<u8>) {
    let step = (buf.len() / MAX_HASH_LENGTH).max(2);
    let mut i = step - 1;
    while i < buf.len() && buf.len() > MAX_HASH_LENGTH {
        buf.remove(i);
        i += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A buffer of distinct values 0..n, wrapped into bytes.
    fn ramp(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i % 256) as u8).collect()
    }

    #[test]
    fn exact_length_unchanged() {
        let buf = ramp(MAX_HASH_LENGTH);
        assert_eq!(normalize(buf.clone(), b"x"), buf);
    }

    #[test]
    fn short_buffer_repeats_and_truncates() {
        let out = normalize(b"abc".to_vec(), b"x");
        assert_eq!(out.len(), MAX_HASH_LENGTH);
        for (i, &b) in out.iter().enumerate() {
            assert_eq!(b, b"abc"[i % 3]);
        }
    }

    #[test]
    fn empty_buffer_seeded_from_pattern() {
        let out = normalize(Vec::new(), b"securePattern");
        assert_eq!(out.len(), MAX_HASH_LENGTH);
        assert!(out.starts_with(b"securePatternsecurePattern"));
    }

    /// Pins the cursor-shift semantics: deleting at the cursor shifts the
    /// tail left, so a 260-element buffer loses original indices
    /// 1, 4, 7, 10, 13 (victims drift apart by step + 1), then the pass
    /// stops at length 255.
    #[test]
    fn thinning_victim_positions() {
        let out = normalize(ramp(260), b"x");
        assert_eq!(out.len(), MAX_HASH_LENGTH);
        assert_eq!(&out[..10], &[0, 2, 3, 5, 6, 8, 9, 11, 12, 14]);
        // Everything from original index 14 on survives untouched.
        assert_eq!(&out[9..], &ramp(260)[14..]);
    }

    /// A 1000-element buffer needs several passes (step 3, then repeated
    /// step-2 passes) and still converges to exactly 255.
    #[test]
    fn multi_pass_thinning_converges() {
        let out = normalize(ramp(1000), b"x");
        assert_eq!(out.len(), MAX_HASH_LENGTH);
        assert_eq!(&out[..12], &[0, 7, 11, 16, 19, 24, 28, 35, 36, 43, 47, 52]);
    }

    #[test]
    fn thinning_is_deterministic() {
        let a = normalize(ramp(4096), b"x");
        let b = normalize(ramp(4096), b"x");
        assert_eq!(a, b);
        assert_eq!(a.len(), MAX_HASH_LENGTH);
    }

    #[test]
    fn one_over_length() {
        let out = normalize(ramp(256), b"x");
        assert_eq!(out.len(), MAX_HASH_LENGTH);
        // step = 2, single deletion at index 1, then the pass stops.
        assert_eq!(out[0], 0);
        assert_eq!(out[1], 2);
        assert_eq!(&out[1..], &ramp(256)[2..]);
    }
}
