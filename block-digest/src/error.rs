/// Errors returned for caller mistakes.
///
/// Every error is raised before any hasher state is touched, so the hasher
/// stays usable after a rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested range does not fit into the input, or its end overflows.
    #[error("range of {len} bytes at offset {offset} is out of bounds for input of {input_len} bytes")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Length of the input slice.
        input_len: usize,
    },
    /// No input was supplied where bytes were required.
    #[error("input buffer is missing")]
    NullInput,
    /// The output slice does not match the digest length.
    #[error("output buffer holds {actual} bytes, expected {expected}")]
    InvalidOutputLen {
        /// Digest length of the algorithm.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
}

/// Validate `offset..offset + len` against an input of `input_len` bytes and
/// return the end of the range.
pub(crate) fn check_range(input_len: usize, offset: usize, len: usize) -> Result<usize, Error> {
    match offset.checked_add(len) {
        Some(end) if end <= input_len => Ok(end),
        _ => Err(Error::OutOfBounds {
            offset,
            len,
            input_len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_within_bounds() {
        assert_eq!(check_range(10, 2, 8), Ok(10));
        assert_eq!(check_range(0, 0, 0), Ok(0));
        assert_eq!(check_range(3, 3, 0), Ok(3));
    }

    #[test]
    fn range_past_end() {
        assert_eq!(
            check_range(10, 4, 7),
            Err(Error::OutOfBounds {
                offset: 4,
                len: 7,
                input_len: 10
            })
        );
        assert!(check_range(3, 4, 0).is_err());
    }

    #[test]
    fn range_overflow() {
        // `-1` passed through a signed to unsigned conversion
        assert!(check_range(10, usize::MAX, 1).is_err());
        assert!(check_range(10, 1, usize::MAX).is_err());
    }
}
