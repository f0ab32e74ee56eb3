//! Buffer profiles and utilities for zerocount benchmarks and examples.
//!
//! Provides pre-built [`BufferProfile`]s:
//!
//! - [`reference_profile`]: 1M random elements with a short zero tail
//! - [`stress_profile`]: 16M elements whose back half is zero
//! - [`all_zero_profile`]: worst case, every element zero

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;

use zerocount_test_utils::buffer_with_tail;

/// Shape of a generated benchmark buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferProfile {
    /// Total number of elements.
    pub len: usize,
    /// Exact length of the zero tail.
    pub zero_tail: usize,
    /// Seed for the random head.
    pub seed: u64,
}

/// Invalid [`BufferProfile`] configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// `zero_tail` is longer than the buffer.
    TailTooLong {
        /// Requested tail length.
        zero_tail: usize,
        /// Buffer length.
        len: usize,
    },
    /// The buffer would not fit in addressable memory.
    TooLarge {
        /// Requested buffer length.
        len: usize,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TailTooLong { zero_tail, len } => {
                write!(f, "zero tail of {zero_tail} exceeds buffer length {len}")
            }
            Self::TooLarge { len } => write!(f, "buffer of {len} elements is too large"),
        }
    }
}

impl Error for ProfileError {}

impl BufferProfile {
    /// Check that the profile describes a buffer that can be built.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.len > isize::MAX as usize / std::mem::size_of::<u16>() {
            return Err(ProfileError::TooLarge { len: self.len });
        }
        if self.zero_tail > self.len {
            return Err(ProfileError::TailTooLong {
                zero_tail: self.zero_tail,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Generate the buffer described by this profile.
    pub fn build(&self) -> Result<Vec<u16>, ProfileError> {
        self.validate()?;
        Ok(buffer_with_tail(self.len, self.zero_tail, self.seed))
    }
}

/// 1M random elements with a 7-element zero tail.
pub fn reference_profile(seed: u64) -> BufferProfile {
    BufferProfile {
        len: 1_000_000,
        zero_tail: 7,
        seed,
    }
}

/// 16M elements whose back half is zero.
pub fn stress_profile(seed: u64) -> BufferProfile {
    let len = 16 * 1024 * 1024;
    BufferProfile {
        len,
        zero_tail: len / 2,
        seed,
    }
}

/// `len` elements, all zero: the scan visits every element.
pub fn all_zero_profile(len: usize) -> BufferProfile {
    BufferProfile {
        len,
        zero_tail: len,
        seed: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocount_core::tail_zero_count;

    #[test]
    fn presets_validate() {
        assert_eq!(reference_profile(1).validate(), Ok(()));
        assert_eq!(stress_profile(1).validate(), Ok(()));
        assert_eq!(all_zero_profile(4096).validate(), Ok(()));
    }

    #[test]
    fn built_buffer_has_requested_tail() {
        let profile = BufferProfile {
            len: 10_000,
            zero_tail: 321,
            seed: 5,
        };
        let buf = profile.build().unwrap();
        assert_eq!(buf.len(), 10_000);
        assert_eq!(tail_zero_count(&buf), 321);
    }

    #[test]
    fn all_zero_profile_is_all_zero() {
        let buf = all_zero_profile(1000).build().unwrap();
        assert_eq!(tail_zero_count(&buf), 1000);
    }

    #[test]
    fn tail_longer_than_len_is_rejected() {
        let profile = BufferProfile {
            len: 4,
            zero_tail: 5,
            seed: 0,
        };
        assert_eq!(
            profile.build(),
            Err(ProfileError::TailTooLong {
                zero_tail: 5,
                len: 4
            })
        );
    }

    #[test]
    fn oversized_len_is_rejected() {
        let profile = BufferProfile {
            len: usize::MAX,
            zero_tail: 0,
            seed: 0,
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::TooLarge { len: usize::MAX })
        );
        assert_eq!(
            profile.validate().unwrap_err().to_string(),
            format!("buffer of {} elements is too large", usize::MAX)
        );
    }
}
