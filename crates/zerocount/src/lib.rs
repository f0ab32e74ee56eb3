//! zerocount: count the zero elements at the tail of a `u16` buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the zerocount sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use zerocount::prelude::*;
//!
//! let samples: [u16; 6] = [12, 0, 40, 0, 0, 0];
//! assert_eq!(tail_zero_count(&samples), 3);
//!
//! let (head, tail) = split_zero_tail(&samples);
//! assert_eq!(head, &[12, 0, 40]);
//! assert_eq!(tail.len(), 3);
//!
//! // 2 + 16 + 3 + 16 + 16 + 16
//! assert_eq!(trailing_zero_bits(&samples), 69);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`kernels`] | `zerocount-core` | Safe kernels over `&[u16]` |
//! | [`ffi`] | `zerocount-ffi` | C ABI entry points and status codes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Safe, allocation-free kernels (`zerocount-core`).
///
/// [`kernels::tail_zero_count`] is the main entry point; [`kernels::scan`] and
/// [`kernels::bits`] hold the rest.
pub use zerocount_core as kernels;

/// C ABI entry points (`zerocount-ffi`).
///
/// The same functions the `cdylib` exports, callable from Rust with raw
/// pointers, plus [`ffi::ZcStatus`] and [`ffi::BufferError`].
pub use zerocount_ffi as ffi;

pub use zerocount_core::{tail_zero_count, trailing_zero_bits};

/// Common imports for typical zerocount usage.
///
/// ```rust
/// use zerocount::prelude::*;
/// ```
pub mod prelude {
    pub use zerocount_core::{
        is_all_zero, split_zero_tail, tail_zero_count, trailing_zero_bits, trim_zero_tail,
    };
}
