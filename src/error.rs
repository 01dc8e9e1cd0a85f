//! Failure reporting for validation pipes
//!
//! Steps in a [`ValidationPipe`](crate::ValidationPipe) return their own error
//! type, and [`ValidationPipe::run`](crate::ValidationPipe::run) hands that
//! error back untouched. When the caller also needs to know *which* step
//! rejected the input, [`ValidationPipe::run_traced`](crate::ValidationPipe::run_traced)
//! wraps it in a [`StepFailure`].
//!
//! # Examples
//!
//! ```
//! use pipe_fns::StepFailure;
//!
//! let failure = StepFailure::new(1, Some("gt10"), "not greater than 10");
//!
//! assert_eq!(failure.index(), 1);
//! assert_eq!(failure.name(), Some("gt10"));
//! assert_eq!(failure.to_string(), "step 1 ('gt10') failed: not greater than 10");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The first failing step of a validation pipe, with its position and name.
///
/// # Examples
///
/// ```
/// use pipe_fns::{check, ValidationPipe};
///
/// let pipe = ValidationPipe::new()
///     .then_named("is_odd", check(|n: &i32| n % 2 != 0, "number is not odd"))
///     .then_named("gt10", check(|n: &i32| *n > 10, "not greater than 10"));
///
/// let failure = pipe.run_traced(&9).unwrap_err();
/// assert_eq!(failure.index(), 1);
/// assert_eq!(failure.name(), Some("gt10"));
/// assert_eq!(failure.into_error(), "not greater than 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure<E> {
    index: usize,
    name: Option<&'static str>,
    error: E,
}

impl<E> StepFailure<E> {
    /// Create a failure for the step at `index` (zero-based).
    pub fn new(index: usize, name: Option<&'static str>, error: E) -> Self {
        StepFailure { index, name, error }
    }

    /// Zero-based position of the failing step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name given to the step with `then_named`, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Get the error the step returned.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consume and return the error the step returned, dropping the position.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for StepFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.index)?;
        if let Some(name) = self.name {
            write!(f, " ('{}')", name)?;
        }
        write!(f, " failed: {}", self.error)
    }
}

impl<E: StdError + 'static> StdError for StepFailure<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let failure = StepFailure::new(3, Some("non_empty"), "empty input");
        assert_eq!(failure.index(), 3);
        assert_eq!(failure.name(), Some("non_empty"));
        assert_eq!(failure.error(), &"empty input");
        assert_eq!(failure.into_error(), "empty input");
    }

    #[test]
    fn test_display_without_name() {
        let failure = StepFailure::new(0, None, "number is not odd");
        assert_eq!(failure.to_string(), "step 0 failed: number is not odd");
    }

    #[test]
    fn test_display_with_name() {
        let failure = StepFailure::new(2, Some("gt10"), "not greater than 10");
        assert_eq!(
            failure.to_string(),
            "step 2 ('gt10') failed: not greater than 10"
        );
    }

    #[test]
    fn test_error_source_points_at_step_error() {
        let inner = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad input");
        let failure = StepFailure::new(0, None, inner);

        let _: &dyn StdError = &failure;
        let source = failure.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("bad input"));
    }

    #[test]
    fn test_eq() {
        let a = StepFailure::new(1, None, "error");
        let b = StepFailure::new(1, None, "error");
        let c = StepFailure::new(2, None, "error");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
