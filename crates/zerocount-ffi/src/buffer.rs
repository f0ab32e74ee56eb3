//! Turning caller-supplied raw parts into a borrowed `&[u16]`.
//!
//! Only what is observable from the pointer value itself is checked: null,
//! alignment, and whether the byte length fits in `isize`. Whether the
//! pointer actually covers `len` initialized elements cannot be known here
//! and remains the caller's responsibility.

use std::error::Error;
use std::fmt;
use std::mem::{align_of, size_of};

/// Raw buffer parts that cannot be turned into a slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The pointer is null but the length is non-zero.
    NullBuffer {
        /// Length the caller passed.
        len: usize,
    },
    /// The pointer is not aligned for `u16`.
    Misaligned {
        /// Address of the pointer.
        addr: usize,
    },
    /// `len * size_of::<u16>()` exceeds `isize::MAX`.
    TooLong {
        /// Length the caller passed.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullBuffer { len } => write!(f, "null buffer with length {len}"),
            Self::Misaligned { addr } => {
                write!(f, "buffer address {addr:#x} is not aligned for u16")
            }
            Self::TooLong { len } => write!(f, "length {len} exceeds the addressable range"),
        }
    }
}

impl Error for BufferError {}

/// Largest element count whose byte size fits in `isize`.
pub const MAX_LEN: usize = isize::MAX as usize / size_of::<u16>();

/// Check raw parts without reading through the pointer.
///
/// A zero length is always accepted, whatever the pointer.
pub fn validate_raw_parts(ptr: *const u16, len: usize) -> Result<(), BufferError> {
    if len == 0 {
        return Ok(());
    }
    if ptr.is_null() {
        return Err(BufferError::NullBuffer { len });
    }
    let addr = ptr as usize;
    if !addr.is_multiple_of(align_of::<u16>()) {
        return Err(BufferError::Misaligned { addr });
    }
    if len > MAX_LEN {
        return Err(BufferError::TooLong { len });
    }
    Ok(())
}

/// Borrow `len` elements starting at `ptr`.
///
/// Returns an empty slice for `len == 0` without touching `ptr`.
///
/// # Safety
///
/// If validation passes, `ptr` must point to `len` initialized `u16` values
/// that stay unmodified for the lifetime `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn borrow_u16s<'a>(ptr: *const u16, len: usize) -> Result<&'a [u16], BufferError> {
    validate_raw_parts(ptr, len)?;
    if len == 0 {
        return Ok(&[]);
    }
    // SAFETY: non-null, aligned, and byte length within isize::MAX per the
    // checks above; validity of the pointed-to memory is the caller's contract.
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}
