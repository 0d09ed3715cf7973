//! Error types for wire decoding
//!
//! Every failure mode of the binary decoder maps to exactly one variant
//! here. Decoding aborts on the first error; callers never receive a
//! partially populated record.

use core::fmt;

/// Result type alias for wire decoding operations
pub type WireResult<T> = Result<T, WireError>;

/// Error type for binary wire decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// The buffer ended before a fixed-width or blob read could complete.
    ///
    /// The cursor offset is left where it was before the failed read.
    UnexpectedEndOfData {
        /// Bytes the read required
        requested: usize,
        /// Bytes actually left in the buffer
        remaining: usize,
    },

    /// A varint continuation sequence ran past 9 bytes (it would overflow
    /// 64 bits) or the buffer ended mid-sequence.
    MalformedVarint,

    /// A declared array element count exceeds what this platform can
    /// address.
    ArrayTooLarge {
        /// The element count as declared on the wire
        declared: u64,
    },

    /// The transaction version is newer than this decoder supports.
    UnsupportedVersion {
        /// The version decoded from the blob
        version: u64,
        /// The highest version this decoder accepts
        max_supported: u64,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::UnexpectedEndOfData {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Unexpected end of data: needed {requested} bytes, {remaining} remaining"
                )
            }
            WireError::MalformedVarint => {
                write!(f, "Malformed varint: continuation sequence overflows 64 bits")
            }
            WireError::ArrayTooLarge { declared } => {
                write!(f, "Declared array length {declared} is too large")
            }
            WireError::UnsupportedVersion {
                version,
                max_supported,
            } => {
                write!(
                    f,
                    "Unsupported transaction version {version}, max supported is {max_supported}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WireError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WireError::UnexpectedEndOfData {
            requested: 32,
            remaining: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("32"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = WireError::UnsupportedVersion {
            version: 5,
            max_supported: 1,
        };
        assert!(err.to_string().contains("version 5"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(WireError::MalformedVarint, WireError::MalformedVarint);
        assert_ne!(
            WireError::MalformedVarint,
            WireError::ArrayTooLarge { declared: 1 }
        );
    }
}
