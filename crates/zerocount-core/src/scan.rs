//! Tail scanning: count and split off the zero-valued suffix of a buffer.
//!
//! The scan walks from the last element toward the first and stops at the
//! first non-zero element, so its cost is proportional to the length of
//! the zero tail rather than to the length of the buffer.

/// Number of elements compared per block by [`tail_zero_count`].
///
/// 16 × `u16` = 32 bytes, one AVX2 register or two SSE/NEON registers.
pub const BLOCK_LANES: usize = 16;

/// Count the consecutive zero elements at the end of `buffer`.
///
/// Scans from the last element backward and stops at the first non-zero
/// element. Returns `buffer.len()` if every element is zero, and `0` for an
/// empty buffer.
///
/// The scan compares whole blocks of [`BLOCK_LANES`] elements while the
/// tail stays zero, then resolves the exact boundary inside the first block
/// that contains a non-zero element. The result is always identical to
/// [`tail_zero_count_scalar`].
///
/// ```
/// use zerocount_core::tail_zero_count;
///
/// assert_eq!(tail_zero_count(&[3, 0, 0, 0]), 3);
/// assert_eq!(tail_zero_count(&[0, 7, 0, 0]), 2);
/// assert_eq!(tail_zero_count(&[]), 0);
/// ```
pub fn tail_zero_count(buffer: &[u16]) -> usize {
    let mut count = 0;
    let mut blocks = buffer.rchunks_exact(BLOCK_LANES);
    for block in &mut blocks {
        if block.iter().any(|&v| v != 0) {
            return count + tail_zero_count_scalar(block);
        }
        count += BLOCK_LANES;
    }
    // `rchunks_exact` leaves the short remainder at the front of the buffer.
    count + tail_zero_count_scalar(blocks.remainder())
}

/// Element-by-element reference scan.
///
/// Same contract as [`tail_zero_count`]; kept as the plain definition the
/// block scan is checked against, and used for short buffers.
pub fn tail_zero_count_scalar(buffer: &[u16]) -> usize {
    buffer.iter().rev().take_while(|&&v| v == 0).count()
}

/// Split `buffer` into `(head, tail)` where `tail` is the maximal all-zero
/// suffix.
///
/// `head.len() + tail.len() == buffer.len()` and
/// `tail.len() == tail_zero_count(buffer)`. If `head` is non-empty, its last
/// element is non-zero.
pub fn split_zero_tail(buffer: &[u16]) -> (&[u16], &[u16]) {
    let zeros = tail_zero_count(buffer);
    buffer.split_at(buffer.len() - zeros)
}

/// `buffer` with its zero tail removed.
pub fn trim_zero_tail(buffer: &[u16]) -> &[u16] {
    split_zero_tail(buffer).0
}

/// Whether every element of `buffer` is zero. True for an empty buffer.
pub fn is_all_zero(buffer: &[u16]) -> bool {
    tail_zero_count(buffer) == buffer.len()
}
