//! Bit-level counterpart of the tail scan.

/// Sum of [`u16::trailing_zeros`] over every element of `buffer`.
///
/// A zero element contributes 16. The result is at most `16 * buffer.len()`
/// and is accumulated in `u64`, which cannot overflow for any buffer that
/// fits in memory.
///
/// ```
/// use zerocount_core::trailing_zero_bits;
///
/// assert_eq!(trailing_zero_bits(&[0x8000, 2, 0]), 15 + 1 + 16);
/// ```
pub fn trailing_zero_bits(buffer: &[u16]) -> u64 {
    buffer.iter().map(|v| u64::from(v.trailing_zeros())).sum()
}
