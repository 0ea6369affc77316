//! Precondition guards.
//!
//! Each function asserts exactly one precondition on its argument and
//! returns the argument unchanged when it holds, so a guarded parameter can
//! be validated and bound in one line:
//!
//! ```
//! # use guard_core::guard;
//! # fn demo(retries: u32) -> guard_core::Result<()> {
//! let retries = guard::against_zero(retries, "retries")?;
//! # Ok(())
//! # }
//! ```
//!
//! Guards never recover or retry; a violated precondition is returned to the
//! caller immediately. The `name` label only enriches the error message and
//! has no effect on pass/fail logic.

use std::fmt;
use std::path::Path;

use crate::types::{Error, Result};

/// Numeric primitives a guard can compare against zero.
pub trait Numeric: Copy + PartialOrd + fmt::Display {
    /// Additive identity for the type.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl Numeric for $t {
            const ZERO: Self = 0 as $t;
        })*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Reject an absent value, unwrapping it when present.
pub fn against_none<T>(value: Option<T>, name: &str) -> Result<T> {
    match value {
        Some(inner) => Ok(inner),
        None => {
            tracing::debug!("guard_rejected: argument={}, rule=none", name);
            Err(Error::null_value(name))
        }
    }
}

/// Reject an empty or whitespace-only string.
pub fn against_empty_string<S: AsRef<str>>(value: S, name: &str) -> Result<S> {
    if value.as_ref().trim().is_empty() {
        tracing::debug!("guard_rejected: argument={}, rule=empty_string", name);
        return Err(Error::empty_value(name));
    }
    Ok(value)
}

/// Reject a collection with zero elements.
pub fn against_empty_collection<C, T>(value: C, name: &str) -> Result<C>
where
    C: AsRef<[T]>,
{
    if value.as_ref().is_empty() {
        tracing::debug!("guard_rejected: argument={}, rule=empty_collection", name);
        return Err(Error::empty_value(name));
    }
    Ok(value)
}

/// Reject a negative number.
///
/// Unsigned types always pass; the guard still accepts them so call sites
/// can stay uniform across signed and unsigned parameters.
pub fn against_negative<T: Numeric>(value: T, name: &str) -> Result<T> {
    if value < T::ZERO {
        tracing::debug!(
            "guard_rejected: argument={}, rule=negative, value={}",
            name,
            value
        );
        return Err(Error::negative_value(name, value));
    }
    Ok(value)
}

/// Reject zero.
pub fn against_zero<T: Numeric>(value: T, name: &str) -> Result<T> {
    if value == T::ZERO {
        tracing::debug!("guard_rejected: argument={}, rule=zero", name);
        return Err(Error::zero_value(name));
    }
    Ok(value)
}

/// Reject a number outside the inclusive range `[min, max]`.
///
/// The failure message carries the value and both bounds.
pub fn against_out_of_range<T>(value: T, min: T, max: T, name: &str) -> Result<T>
where
    T: Copy + PartialOrd + fmt::Display,
{
    if value < min || value > max {
        tracing::debug!(
            "guard_rejected: argument={}, rule=out_of_range, value={}, min={}, max={}",
            name,
            value,
            min,
            max
        );
        return Err(Error::out_of_range(name, value, min, max));
    }
    Ok(value)
}

/// Reject a path that does not point at an existing file.
pub fn against_missing_file<P: AsRef<Path>>(path: P, name: &str) -> Result<P> {
    if !path.as_ref().is_file() {
        tracing::debug!(
            "guard_rejected: argument={}, rule=missing_file, path={}",
            name,
            path.as_ref().display()
        );
        return Err(Error::file_not_found(path.as_ref()));
    }
    Ok(path)
}

/// Reject a path that does not point at an existing directory.
pub fn against_missing_dir<P: AsRef<Path>>(path: P, name: &str) -> Result<P> {
    if !path.as_ref().is_dir() {
        tracing::debug!(
            "guard_rejected: argument={}, rule=missing_dir, path={}",
            name,
            path.as_ref().display()
        );
        return Err(Error::directory_not_found(path.as_ref()));
    }
    Ok(path)
}
