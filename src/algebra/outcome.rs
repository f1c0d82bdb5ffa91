//! Accessors for fallible outcomes.
//!
//! [`Result`] already guarantees exactly one of value or error is populated.
//! [`OutcomeExt`] exposes both sides by reference so callers can inspect an
//! outcome without consuming it.

/// Builds a successful outcome.
///
/// # Errors
///
/// Never; the `Err` side only fixes the error type.
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Builds a failed outcome.
///
/// # Errors
///
/// Always returns `error`.
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Inspection helpers for [`Result`].
pub trait OutcomeExt<T, E> {
    /// Returns true for the success side.
    fn is_success(&self) -> bool;

    /// Returns the success value, if any.
    fn value(&self) -> Option<&T>;

    /// Returns the error value, if any.
    fn error(&self) -> Option<&E>;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }
}
