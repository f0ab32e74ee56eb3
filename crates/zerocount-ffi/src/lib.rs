//! C ABI for the zerocount trailing-zero kernels.
//!
//! Exposes flat, unmangled functions that take a `const uint16_t *` and an
//! element count. No initialization or teardown is required: every entry
//! point is callable as soon as the shared library is loaded. This is the
//! only crate in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

/// Run `$body` under `catch_unwind`, returning `$fallback` if it panics.
///
/// The panic message is stored for `zerocount_last_panic_message`.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $fallback
            }
        }
    };
}

/// `ffi_guard_or!` for status-returning functions: a panic becomes
/// `ZcStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::ZcStatus::Panicked as i32, $body)
    };
}

pub mod buffer;
pub mod count;
pub mod status;

pub use buffer::BufferError;
pub use count::{
    tail_zero_count, tail_zero_count_checked, trailing_zero_bits, trailing_zero_bits_checked,
};
pub use status::ZcStatus;

/// ABI version exported by this library: `major << 16 | minor`.
pub const ZEROCOUNT_ABI_VERSION: u32 = 1 << 16;

thread_local! {
    /// Message of the most recent panic caught on this thread.
    pub(crate) static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    };
    #[cfg(debug_assertions)]
    eprintln!("zerocount: panic contained at FFI boundary: {msg}");
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

/// ABI version of the loaded library (`major << 16 | minor`).
///
/// Callers should refuse to proceed if the major version differs from the
/// one their bindings were written against.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn zerocount_abi_version() -> u32 {
    ZEROCOUNT_ABI_VERSION
}

/// Copy the last panic message caught on this thread into `buf`.
///
/// Writes at most `cap - 1` bytes followed by a null terminator and returns
/// the full length of the message in bytes (excluding the terminator), so a
/// return value `>= cap` means the message was truncated. Pass a null `buf`
/// (or `cap == 0`) to query the length only. Returns 0 if no panic has been
/// caught on this thread.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn zerocount_last_panic_message(buf: *mut c_char, cap: usize) -> usize {
    ffi_guard_or!(0, {
        LAST_PANIC.with(|cell| {
            let msg = cell.borrow();
            let bytes = msg.as_bytes();
            if !buf.is_null() && cap > 0 {
                let copy_len = bytes.len().min(cap - 1);
                // SAFETY: buf points to cap writable bytes per caller contract.
                unsafe {
                    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
                    *buf.add(copy_len) = 0;
                }
            }
            bytes.len()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ZcStatus;

    fn clear_last_panic() {
        LAST_PANIC.with(|cell| cell.borrow_mut().clear());
    }

    #[test]
    fn abi_version_is_one_zero() {
        assert_eq!(zerocount_abi_version() >> 16, 1);
        assert_eq!(zerocount_abi_version() & 0xFFFF, 0);
    }

    #[test]
    fn no_panic_means_empty_message() {
        clear_last_panic();
        assert_eq!(zerocount_last_panic_message(std::ptr::null_mut(), 0), 0);
    }

    #[test]
    fn ffi_guard_passes_through_normal_result() {
        let status = ffi_guard!({ ZcStatus::Ok as i32 });
        assert_eq!(status, ZcStatus::Ok as i32);
    }

    #[test]
    fn ffi_guard_catches_panic_and_stores_message() {
        clear_last_panic();

        let status = ffi_guard!({
            panic!("deliberate test panic inside guard");
        });
        assert_eq!(status, ZcStatus::Panicked as i32);

        let len = zerocount_last_panic_message(std::ptr::null_mut(), 0);
        assert!(len > 0, "message length must be reported after a panic");

        let mut buf = vec![0u8; len + 1];
        let len2 = zerocount_last_panic_message(buf.as_mut_ptr() as *mut c_char, buf.len());
        assert_eq!(len, len2);
        let msg = std::str::from_utf8(&buf[..len2]).unwrap();
        assert!(
            msg.contains("deliberate test panic inside guard"),
            "got: {msg:?}"
        );
        assert_eq!(buf[len2], 0, "message must be null-terminated");
    }

    #[test]
    fn ffi_guard_or_returns_fallback_on_panic() {
        clear_last_panic();
        let n: u64 = ffi_guard_or!(7, {
            let v: Vec<u64> = Vec::new();
            v[3]
        });
        assert_eq!(n, 7);
        assert!(zerocount_last_panic_message(std::ptr::null_mut(), 0) > 0);
    }

    #[test]
    fn formatted_panic_message_is_captured() {
        clear_last_panic();
        let code = 42;
        let _ = ffi_guard!({
            panic!("failed with code {code}");
        });
        let mut buf = [0u8; 64];
        let len = zerocount_last_panic_message(buf.as_mut_ptr() as *mut c_char, buf.len());
        assert_eq!(&buf[..len], b"failed with code 42");
    }

    #[test]
    fn truncated_copy_is_null_terminated() {
        clear_last_panic();
        let _ = ffi_guard!({
            panic!("0123456789");
        });
        let mut buf = [0xAAu8; 4];
        let len = zerocount_last_panic_message(buf.as_mut_ptr() as *mut c_char, buf.len());
        assert_eq!(len, 10);
        assert_eq!(&buf, b"012\0");
    }

    #[test]
    fn message_query_is_repeatable_and_leaves_message_intact() {
        clear_last_panic();
        let _ = ffi_guard!({
            panic!("kept across reads");
        });
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        let a = zerocount_last_panic_message(first.as_mut_ptr() as *mut c_char, first.len());
        let b = zerocount_last_panic_message(second.as_mut_ptr() as *mut c_char, second.len());
        assert_eq!(a, b);
        assert_eq!(&first[..a], b"kept across reads");
        assert_eq!(first, second);
    }

    #[test]
    fn zero_cap_with_buffer_writes_nothing() {
        clear_last_panic();
        let _ = ffi_guard!({
            panic!("abc");
        });
        let mut buf = [0xAAu8; 2];
        let len = zerocount_last_panic_message(buf.as_mut_ptr() as *mut c_char, 0);
        assert_eq!(len, 3);
        assert_eq!(buf, [0xAA, 0xAA]);
    }
}
