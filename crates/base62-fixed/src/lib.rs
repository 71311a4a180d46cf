//! # base62-fixed
//!
//! Deterministic, fixed-width base-62 encoding of signed integer values,
//! built to back a `to_base62(<column>)` scalar function inside a query
//! engine.
//!
//! ## Features
//!
//! - Exactly 11 output characters for every input, with no sign character and no
//!   variable trimming
//! - Negative values share the positive slots through a leading-digit bias
//!   instead of a sign, keeping the two sign classes lexically disjoint
//! - Allocation-free encoding into caller-owned buffers
//! - A column-function seam ([`Record`], [`ToBase62`]) for host engines
//! - Optional `serde` and `tracing` integration

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Encoding values
//!
//! ```rust
//! use base62_fixed::{encode, ENCODED_LEN};
//!
//! let id = encode(1234567);
//! assert_eq!(id.as_str(), "00000005BAN");
//! assert_eq!(id.as_str().len(), ENCODED_LEN);
//!
//! // Negative inputs occupy the same width, marked by the leading digit.
//! assert_eq!(encode(-1).as_str(), "V0000000001");
//! ```
//!
//! ### Per-row evaluation
//!
//! ```rust
//! use base62_fixed::ToBase62;
//!
//! let mut func = ToBase62::new();
//! assert_eq!(func.eval(&Some(100)).unwrap(), "0000000001c");
//! assert!(func.eval(&None).is_err()); // absent rows are never encoded
//! ```

pub mod digits;
pub mod encode;
pub mod error;
pub mod function;

pub use self::digits::{digit, digit_index, DIGITS, RADIX};
pub use self::encode::{encode, encode_into, Encoded, ENCODED_LEN};
pub use self::error::{Base62Error, Result};
pub use self::function::{Record, ToBase62, SIGNATURE};
