//! # Guard Core - Fail-Fast Precondition Checks
//!
//! A flat set of stateless guard functions for validating arguments at the
//! top of a function:
//! - Null/empty checks (`against_none`, `against_empty_string`, `against_empty_collection`)
//! - Numeric checks (`against_negative`, `against_zero`, `against_out_of_range`)
//! - Filesystem preconditions (`against_missing_file`, `against_missing_dir`)
//!
//! Every check either returns the validated value unchanged, so it can be
//! inlined in an assignment, or fails immediately with a descriptive
//! [`Error`] naming the offending argument:
//!
//! ```
//! use guard_core::guard;
//!
//! fn resize(width: u32) -> guard_core::Result<u32> {
//!     let width = guard::against_zero(width, "width")?;
//!     Ok(width * 2)
//! }
//!
//! assert_eq!(resize(4).unwrap(), 8);
//! assert!(resize(0).is_err());
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod guard;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Error, Result};
