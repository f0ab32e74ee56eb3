//! C-compatible status codes for the checked entry points.
//!
//! [`ZcStatus`] is a `repr(i32)` enum; conversions from [`BufferError`]
//! are provided so validation failures map to a stable code.

use crate::buffer::BufferError;

/// C-compatible status code returned by the `*_checked` FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZcStatus {
    /// Success.
    Ok = 0,
    /// An out-pointer is null.
    InvalidArgument = -1,
    /// Buffer pointer is null while the length is non-zero.
    NullBuffer = -2,
    /// Buffer pointer is not aligned for `uint16_t`.
    MisalignedBuffer = -3,
    /// Length in bytes exceeds `isize::MAX`.
    LengthOverflow = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&BufferError> for ZcStatus {
    fn from(e: &BufferError) -> Self {
        match e {
            BufferError::NullBuffer { .. } => ZcStatus::NullBuffer,
            BufferError::Misaligned { .. } => ZcStatus::MisalignedBuffer,
            BufferError::TooLong { .. } => ZcStatus::LengthOverflow,
        }
    }
}
