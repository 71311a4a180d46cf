//! The `to_base62(<column>)` column-function seam.
//!
//! The host query engine owns parsing, signature resolution and result-set
//! memory. This module is the narrow boundary it binds against: a [`Record`]
//! yields the argument value for the current row, and a [`ToBase62`]
//! instance turns it into the fixed-width textual column value.

use crate::encode::{encode, encode_into, Encoded, ENCODED_LEN};
use crate::error::{Base62Error, Result};

/// Registry signature under which a host binds the function: one 32-bit
/// integer argument, string result.
pub const SIGNATURE: &str = "to_base62(I)";

/// Per-row access to the function's argument column.
///
/// `None` is the absence signal. It is distinct from every valid integer, so
/// a null row can never be mistaken for a value.
pub trait Record {
    /// The signed 32-bit argument value for the current row, if present.
    fn int(&self) -> Option<i32>;
}

impl Record for Option<i32> {
    fn int(&self) -> Option<i32> {
        *self
    }
}

/// A `to_base62` function instance.
///
/// Each instance owns the scratch buffer its results are written into.
/// [`eval`](Self::eval) borrows the result out of that buffer, so the borrow
/// checker enforces the one-buffer-one-invocation rule: concurrent rows take
/// one instance per thread, never a shared one.
///
/// # Examples
///
/// ```
/// use base62_fixed::ToBase62;
///
/// let mut func = ToBase62::new();
/// assert_eq!(func.eval(&Some(100)).unwrap(), "0000000001c");
/// assert!(func.eval(&None).is_err());
/// ```
#[derive(Debug)]
pub struct ToBase62 {
    buf: [u8; ENCODED_LEN],
}

impl ToBase62 {
    /// Create a function instance with its own scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(signature = SIGNATURE, "instantiating column function");

        Self {
            buf: [0; ENCODED_LEN],
        }
    }

    /// Evaluate against the current row of `rec`.
    ///
    /// The argument is widened to 64 bits before the digit arithmetic, and
    /// the eleven-character result is borrowed from this instance's buffer;
    /// it stays valid until the next evaluation. An absent argument yields
    /// [`Base62Error::NullInput`].
    pub fn eval<R: Record + ?Sized>(&mut self, rec: &R) -> Result<&str> {
        let value = rec.int().ok_or(Base62Error::NullInput)?;
        encode_into(&mut self.buf, i64::from(value));

        // The buffer now holds ASCII digit characters only.
        Ok(std::str::from_utf8(&self.buf).expect("base-62 digits are ASCII"))
    }

    /// Like [`eval`](Self::eval), but returns an owned [`Encoded`] value
    /// instead of borrowing the instance buffer.
    pub fn eval_owned<R: Record + ?Sized>(&self, rec: &R) -> Result<Encoded> {
        let value = rec.int().ok_or(Base62Error::NullInput)?;
        Ok(encode(i64::from(value)))
    }
}

impl Default for ToBase62 {
    fn default() -> Self {
        Self::new()
    }
}
