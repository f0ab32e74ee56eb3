//! Counting entry points: tail zero elements and trailing zero bits.
//!
//! Each kernel is exported twice. The plain form returns the count directly
//! and yields 0 for raw parts that fail validation. The `_checked` form
//! writes the count through an out-pointer and returns a [`ZcStatus`], so
//! callers can tell "no zeros" apart from "bad arguments".

use zerocount_core::{bits, scan};

use crate::buffer::borrow_u16s;
use crate::status::ZcStatus;

/// Run `kernel` over the raw parts, or return 0 if they fail validation.
#[allow(unsafe_code)]
fn run_unchecked(buffer: *const u16, length: usize, kernel: fn(&[u16]) -> u64) -> u64 {
    // SAFETY: buffer points to length valid u16 values per caller contract.
    match unsafe { borrow_u16s(buffer, length) } {
        Ok(slice) => kernel(slice),
        Err(_) => 0,
    }
}

#[allow(unsafe_code)]
fn run_checked(
    buffer: *const u16,
    length: usize,
    out: *mut u64,
    kernel: fn(&[u16]) -> u64,
) -> i32 {
    if out.is_null() || !out.is_aligned() {
        return ZcStatus::InvalidArgument as i32;
    }
    // SAFETY: buffer points to length valid u16 values per caller contract.
    let slice = match unsafe { borrow_u16s(buffer, length) } {
        Ok(s) => s,
        Err(e) => return ZcStatus::from(&e) as i32,
    };
    let value = kernel(slice);
    // SAFETY: out is valid per caller contract.
    unsafe { *out = value };
    ZcStatus::Ok as i32
}

fn tail_kernel(buffer: &[u16]) -> u64 {
    scan::tail_zero_count(buffer) as u64
}

/// Count the zero elements at the end of `buffer[0..length]`.
///
/// Scans backward from the last element and stops at the first non-zero
/// one; returns `length` if every element is zero and 0 when `length == 0`
/// (in which case `buffer` is never read and may be null).
///
/// **Ambiguity warning:** a null or misaligned `buffer` with a non-zero
/// `length` also returns 0. Prefer [`tail_zero_count_checked`] when the
/// caller needs to distinguish that case.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tail_zero_count(buffer: *const u16, length: usize) -> u64 {
    ffi_guard_or!(0, { run_unchecked(buffer, length, tail_kernel) })
}

/// Count the zero elements at the end of `buffer[0..length]` with explicit
/// error reporting.
///
/// Writes the count to `*count_out` and returns `Ok`. Returns
/// `InvalidArgument` (null or misaligned `count_out`), `NullBuffer`,
/// `MisalignedBuffer` or `LengthOverflow` without writing to `count_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tail_zero_count_checked(
    buffer: *const u16,
    length: usize,
    count_out: *mut u64,
) -> i32 {
    ffi_guard!({ run_checked(buffer, length, count_out, tail_kernel) })
}

/// Total trailing zero bits across `buffer[0..length]`.
///
/// Each element contributes `u16::trailing_zeros`, 16 for a zero element.
/// Returns 0 for `length == 0` and for raw parts that fail validation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn trailing_zero_bits(buffer: *const u16, length: usize) -> u64 {
    ffi_guard_or!(0, { run_unchecked(buffer, length, bits::trailing_zero_bits) })
}

/// Total trailing zero bits with explicit error reporting.
///
/// Same status contract as [`tail_zero_count_checked`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn trailing_zero_bits_checked(
    buffer: *const u16,
    length: usize,
    total_out: *mut u64,
) -> i32 {
    ffi_guard!({ run_checked(buffer, length, total_out, bits::trailing_zero_bits) })
}
