//! Combinators for optional values.
//!
//! [`Option`] is the presence/absence container. The free functions and the
//! [`OptionalExt`] trait name the operations the rest of the crate composes
//! with. Functions passed to `map`, `bind` and `filter` are never called on an
//! absent value.

use std::path::{Path, PathBuf};

/// Wraps a value as present.
#[must_use]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// The absent value.
#[must_use]
pub const fn none<T>() -> Option<T> {
    None
}

/// Collapses a nested optional.
///
/// `Some(Some(v))` becomes `Some(v)`; `Some(None)` and `None` become `None`.
#[must_use]
pub fn flatten<T>(nested: Option<Option<T>>) -> Option<T> {
    nested.and_then(|inner| inner)
}

/// Values that have a logically-absent form.
///
/// [`present`] uses this to avoid wrapping a sentinel (an empty string, an
/// empty path, a nested `None`) in `Some`.
pub trait Absent {
    /// Returns true if the value carries no meaningful content.
    fn is_absent(&self) -> bool;
}

impl Absent for str {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Absent for String {
    fn is_absent(&self) -> bool {
        self.as_str().is_absent()
    }
}

impl Absent for Path {
    fn is_absent(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl Absent for PathBuf {
    fn is_absent(&self) -> bool {
        self.as_path().is_absent()
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Absent + ?Sized> Absent for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// Wraps `value` unless it is a logically-absent sentinel.
///
/// # Examples
///
/// ```
/// use bettersync::algebra::present;
///
/// assert_eq!(present("config.json"), Some("config.json"));
/// assert_eq!(present("   "), None);
/// ```
#[must_use]
pub fn present<T: Absent>(value: T) -> Option<T> {
    if value.is_absent() { None } else { Some(value) }
}

/// Named operations on [`Option`] that complement the standard combinators.
pub trait OptionalExt<T>: Sized {
    /// Returns the contained value or `default`.
    fn value_or(self, default: T) -> T;

    /// Chains an optional-returning function. Same as [`Option::and_then`].
    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Folds both branches into one value.
    fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U;

    /// Runs `action` on the value if present and returns the option unchanged.
    #[must_use]
    fn if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T);

    /// Runs `action` if absent and returns the option unchanged.
    #[must_use]
    fn if_none<F>(self, action: F) -> Self
    where
        F: FnOnce();
}

impl<T> OptionalExt<T> for Option<T> {
    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    fn if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(ref value) = self {
            action(value);
        }
        self
    }

    fn if_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }
}
