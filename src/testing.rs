//! Testing utilities for pipes
//!
//! Helpers for checking *how* composed functions call the functions they were
//! built from: which arguments each one saw and how often.
//!
//! # Examples
//!
//! ## Spying on stages
//!
//! ```rust
//! use pipe_fns::pipe;
//! use pipe_fns::testing::Spy;
//!
//! let sum_spy = Spy::new();
//! let mul_spy = Spy::new();
//!
//! let h = pipe!(sum_spy.wrap(|n: i32| n + 2), mul_spy.wrap(|n: i32| n * 2));
//!
//! assert_eq!(h(1), 6);
//! assert_eq!(sum_spy.calls(), vec![1]);
//! assert_eq!(mul_spy.calls(), vec![3]);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use pipe_fns::{assert_passes, assert_rejects, check, void_pipe};
//!
//! let validate = void_pipe!(check(|n: &i32| *n > 10, "not greater than 10"));
//!
//! assert_passes!(validate(&11));
//! assert_rejects!(validate(&9));
//! assert_rejects!(validate(&9), "not greater than 10");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Records the arguments a wrapped function is called with.
///
/// Clones of a `Spy` share the same call log, so one handle can be moved into
/// a pipe while another stays behind for assertions.
///
/// # Example
///
/// ```rust
/// use pipe_fns::testing::Spy;
///
/// let spy = Spy::new();
/// let double = spy.wrap(|n: u32| n * 2);
///
/// assert_eq!(double(4), 8);
/// assert_eq!(double(5), 10);
/// assert_eq!(spy.call_count(), 2);
/// assert!(spy.was_called_with(&5));
/// ```
pub struct Spy<A> {
    calls: Rc<RefCell<Vec<A>>>,
}

impl<A> Spy<A> {
    /// Create a spy with an empty call log.
    pub fn new() -> Self {
        Spy {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether the wrapped function was called at all.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Forget every recorded call.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl<A: Clone + 'static> Spy<A> {
    /// Wrap a function taking its argument by value.
    pub fn wrap<R, F>(&self, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        let calls = Rc::clone(&self.calls);
        move |arg: A| {
            calls.borrow_mut().push(arg.clone());
            f(arg)
        }
    }

    /// Wrap a function taking its argument by reference, recording an owned
    /// copy. This is the shape of a validation step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipe_fns::testing::Spy;
    ///
    /// let spy: Spy<String> = Spy::new();
    /// let non_empty = spy.wrap_ref(|s: &str| if s.is_empty() { Err("empty") } else { Ok(()) });
    ///
    /// assert_eq!(non_empty("abc"), Ok(()));
    /// assert_eq!(spy.calls(), vec!["abc".to_string()]);
    /// ```
    pub fn wrap_ref<T, R, F>(&self, f: F) -> impl Fn(&T) -> R
    where
        T: ?Sized + ToOwned<Owned = A>,
        F: Fn(&T) -> R,
    {
        let calls = Rc::clone(&self.calls);
        move |arg: &T| {
            calls.borrow_mut().push(arg.to_owned());
            f(arg)
        }
    }

    /// Every recorded argument, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.calls.borrow().clone()
    }
}

impl<A: PartialEq> Spy<A> {
    /// Whether any recorded call received `arg`.
    pub fn was_called_with(&self, arg: &A) -> bool {
        self.calls.borrow().iter().any(|call| call == arg)
    }
}

impl<A> Clone for Spy<A> {
    fn clone(&self) -> Self {
        Spy {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<A> Default for Spy<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for Spy<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spy")
            .field("calls", &*self.calls.borrow())
            .finish()
    }
}

/// Assert that a step or pipe result is `Ok`.
///
/// This macro will panic if the result is an `Err`.
///
/// # Example
///
/// ```rust
/// use pipe_fns::assert_passes;
///
/// let result: Result<(), &str> = Ok(());
/// assert_passes!(result);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected input to pass, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a step or pipe result is `Err`, optionally comparing the error.
///
/// This macro will panic if the result is `Ok`, or if an expected error is
/// given and does not match.
///
/// # Example
///
/// ```rust
/// use pipe_fns::assert_rejects;
///
/// let result: Result<(), &str> = Err("number is not odd");
/// assert_rejects!(result);
/// assert_rejects!(result, "number is not odd");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(v) => {
                panic!("Expected a failure, got Ok({:?})", v);
            }
            ::core::result::Result::Err(_) => {}
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            ::core::result::Result::Ok(v) => {
                panic!("Expected failure {:?}, got Ok({:?})", $expected, v);
            }
            ::core::result::Result::Err(e) => {
                assert_eq!(e, $expected, "Failure did not match");
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spy_records_by_value_calls() {
        let spy = Spy::new();
        let f = spy.wrap(|n: i32| n + 1);

        assert_eq!(f(1), 2);
        assert_eq!(f(10), 11);
        assert_eq!(spy.calls(), vec![1, 10]);
        assert_eq!(spy.call_count(), 2);
    }

    #[test]
    fn test_spy_records_by_reference_calls() {
        let spy: Spy<i32> = Spy::new();
        let f = spy.wrap_ref(|n: &i32| *n > 0);

        assert!(f(&3));
        assert!(!f(&-3));
        assert_eq!(spy.calls(), vec![3, -3]);
    }

    #[test]
    fn test_unused_spy() {
        let spy: Spy<u8> = Spy::default();
        let _f = spy.wrap(|n: u8| n);
        assert!(!spy.was_called());
        assert!(spy.calls().is_empty());
    }

    #[test]
    fn test_clones_share_call_log() {
        let spy = Spy::new();
        let other = spy.clone();
        let f = other.wrap(|s: String| s.len());

        assert_eq!(f("abc".to_string()), 3);
        assert!(spy.was_called_with(&"abc".to_string()));
    }

    #[test]
    fn test_reset() {
        let spy = Spy::new();
        let f = spy.wrap(|n: i32| n);
        f(1);
        spy.reset();
        assert_eq!(spy.call_count(), 0);
    }

    #[test]
    fn test_debug_shows_calls() {
        let spy = Spy::new();
        spy.wrap(|n: i32| n)(7);
        assert_eq!(format!("{:?}", spy), "Spy { calls: [7] }");
    }

    #[test]
    fn test_assert_passes() {
        let ok: Result<u8, String> = Ok(1);
        assert_passes!(ok);
    }

    #[test]
    #[should_panic(expected = "Expected input to pass")]
    fn test_assert_passes_panics_on_err() {
        let err: Result<(), &str> = Err("bad");
        assert_passes!(err);
    }

    #[test]
    fn test_assert_rejects_with_expected() {
        let err: Result<(), &str> = Err("bad");
        assert_rejects!(err, "bad");
    }

    #[test]
    #[should_panic(expected = "Expected a failure")]
    fn test_assert_rejects_panics_on_ok() {
        let ok: Result<(), &str> = Ok(());
        assert_rejects!(ok);
    }

    #[test]
    #[should_panic(expected = "Failure did not match")]
    fn test_assert_rejects_panics_on_other_error() {
        let err: Result<(), &str> = Err("bad");
        assert_rejects!(err, "worse");
    }
}
