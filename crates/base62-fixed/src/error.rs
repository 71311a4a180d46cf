//! Error types for the fixed-width base-62 library.
//!
//! Encoding itself is total: any signed integer encodes successfully. The
//! errors here cover the two boundaries around it: reverse digit lookup on
//! a character outside the alphabet, and evaluating the column function
//! against a row whose argument is absent.

use thiserror::Error;

/// Convenience type alias for Results using [`Base62Error`].
pub type Result<T, E = Base62Error> = std::result::Result<T, E>;

/// Errors surfaced by the digit tables and the column function.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Base62Error {
    /// A character outside the 62-character alphabet was looked up.
    ///
    /// Only the reverse (decode-direction) lookup can fail this way;
    /// encoding never produces it.
    #[error("not a valid base-62 character: {ch:?}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },

    /// The function argument held no value for the current row.
    ///
    /// Absence is never encoded; the host decides what a null row becomes.
    #[error("cannot encode an absent value")]
    NullInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Base62Error::InvalidDigit { ch: '-' };
        assert_eq!(format!("{}", err), "not a valid base-62 character: '-'");

        let err = Base62Error::NullInput;
        assert_eq!(format!("{}", err), "cannot encode an absent value");
    }

    #[test]
    fn test_error_is_copy_and_eq() {
        let err = Base62Error::InvalidDigit { ch: '!' };
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, Base62Error::NullInput);
    }
}
