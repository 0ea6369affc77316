//! Core types for the guard crate.
//!
//! This module provides the foundational types used by every check:
//! - **Errors**: one variant per violated precondition, with thiserror derives

mod errors;

pub use errors::{Error, Result};
