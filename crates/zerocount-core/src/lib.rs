//! Trailing-zero kernels over borrowed `u16` buffers.
//!
//! This is the leaf crate with zero internal dependencies. Every kernel
//! takes a borrowed `&[u16]`, never allocates, never retains the buffer,
//! and holds no global state, so all of them are reentrant and safe to call
//! concurrently on shared read-only data.
//!
//! - [`tail_zero_count`]: number of zero elements at the end of a buffer.
//! - [`split_zero_tail`]: the buffer split into its head and zero tail.
//! - [`trailing_zero_bits`]: total trailing zero bits across all elements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod scan;

pub use bits::trailing_zero_bits;
pub use scan::{
    is_all_zero, split_zero_tail, tail_zero_count, tail_zero_count_scalar, trim_zero_tail,
    BLOCK_LANES,
};
