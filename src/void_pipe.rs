//! Sequential validation against a shared input
//!
//! A void pipe (also called a validation pipe) calls every step with the
//! *same* input instead of feeding one step's output into the next. Step
//! return values are thrown away; what matters is whether a step fails. The
//! first `Err` stops the run and is handed back unchanged, so later steps
//! never see the input.
//!
//! Two forms are provided:
//!
//! - the [`void_pipe!`](crate::void_pipe!) macro (alias
//!   [`validation_pipe!`](crate::validation_pipe!)) builds a closure from a
//!   fixed list of steps
//! - [`ValidationPipe`] (alias [`VoidPipe`]) stores steps as data, can name
//!   them, and can report which one failed
//!
//! This is the opposite of error accumulation: only the first failure is
//! observed.
//!
//! # Examples
//!
//! ```
//! use pipe_fns::{check, void_pipe};
//!
//! let validate = void_pipe!(
//!     check(|n: &i32| n % 2 != 0, "number is not odd"),
//!     check(|n: &i32| *n > 10, "not greater than 10"),
//! );
//!
//! assert_eq!(validate(&11), Ok(()));
//! assert_eq!(validate(&9), Err("not greater than 10"));
//! assert_eq!(validate(&12), Err("number is not odd"));
//! ```

use std::fmt;

use crate::error::StepFailure;

/// Build a validation step from a predicate and the error to return when it
/// does not hold.
///
/// # Example
///
/// ```
/// use pipe_fns::check;
///
/// let non_empty = check(|s: &str| !s.is_empty(), "empty input");
/// assert_eq!(non_empty("abc"), Ok(()));
/// assert_eq!(non_empty(""), Err("empty input"));
/// ```
pub fn check<T, E, P>(predicate: P, error: E) -> impl Fn(&T) -> Result<(), E>
where
    T: ?Sized,
    E: Clone,
    P: Fn(&T) -> bool,
{
    move |input: &T| {
        if predicate(input) {
            Ok(())
        } else {
            Err(error.clone())
        }
    }
}

/// Run `first` then `second` on the same input, stopping at the first error.
///
/// Both return values are discarded. This is the building block of
/// [`void_pipe!`](crate::void_pipe!).
pub fn sequence<T, E, R1, R2, F, G>(first: F, second: G) -> impl Fn(&T) -> Result<(), E>
where
    T: ?Sized,
    F: Fn(&T) -> Result<R1, E>,
    G: Fn(&T) -> Result<R2, E>,
{
    move |input: &T| {
        first(input)?;
        second(input)?;
        Ok(())
    }
}

/// Wrap a single step so its success value is discarded.
pub fn discard<T, E, R, F>(step: F) -> impl Fn(&T) -> Result<(), E>
where
    T: ?Sized,
    F: Fn(&T) -> Result<R, E>,
{
    move |input: &T| step(input).map(|_| ())
}

/// Run several steps against the same input, stopping at the first failure.
///
/// Each step is a `Fn(&T) -> Result<R, E>`; every step may return a different
/// `R`, but all share the error type `E`. The resulting closure returns
/// `Result<(), E>`.
///
/// # Example
///
/// ```
/// use pipe_fns::void_pipe;
///
/// let validate = void_pipe!(
///     |s: &String| if s.len() >= 3 { Ok(s.len()) } else { Err("too short") },
///     |s: &String| s.parse::<u32>().map_err(|_| "not a number"),
/// );
///
/// assert_eq!(validate(&"1234".to_string()), Ok(()));
/// assert_eq!(validate(&"12".to_string()), Err("too short"));
/// assert_eq!(validate(&"abcd".to_string()), Err("not a number"));
/// ```
#[macro_export]
macro_rules! void_pipe {
    ($step:expr $(,)?) => {
        $crate::void_pipe::discard($step)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::void_pipe::sequence($first, $crate::void_pipe!($($rest),+))
    };
}

/// Alias of [`void_pipe!`](crate::void_pipe!).
///
/// # Example
///
/// ```
/// use pipe_fns::{check, validation_pipe};
///
/// let positive = validation_pipe!(check(|n: &i64| *n > 0, "not positive"));
/// assert_eq!(positive(&-3), Err("not positive"));
/// ```
#[macro_export]
macro_rules! validation_pipe {
    ($($steps:tt)*) => {
        $crate::void_pipe!($($steps)*)
    };
}

type Step<T, E> = Box<dyn Fn(&T) -> Result<(), E>>;

struct Entry<T: ?Sized, E> {
    name: Option<&'static str>,
    step: Step<T, E>,
}

/// An ordered list of validation steps that all receive the same input.
///
/// Steps run in insertion order. [`run`](ValidationPipe::run) returns the
/// first step error unchanged; [`run_traced`](ValidationPipe::run_traced)
/// also reports its position and name. A pipe with no steps accepts every
/// input.
///
/// # Example
///
/// ```
/// use pipe_fns::{check, ValidationPipe};
///
/// let username = ValidationPipe::new()
///     .then_named("length", check(|s: &str| (3..=20).contains(&s.len()), "bad length"))
///     .then_named("charset", check(|s: &str| s.chars().all(char::is_alphanumeric), "bad chars"));
///
/// assert_eq!(username.run("alice"), Ok(()));
/// assert_eq!(username.run("al"), Err("bad length"));
/// assert_eq!(username.run("al!ce"), Err("bad chars"));
/// ```
pub struct ValidationPipe<T: ?Sized, E> {
    steps: Vec<Entry<T, E>>,
}

/// Alias of [`ValidationPipe`].
pub type VoidPipe<T, E> = ValidationPipe<T, E>;

impl<T: ?Sized + 'static, E: 'static> ValidationPipe<T, E> {
    /// Create a pipe with no steps.
    pub fn new() -> Self {
        ValidationPipe { steps: Vec::new() }
    }

    /// Append a step. Its success value is discarded.
    pub fn then<F, R>(self, step: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'static,
        R: 'static,
    {
        self.push(None, step)
    }

    /// Append a step with a name used by [`run_traced`](ValidationPipe::run_traced)
    /// and in log events.
    pub fn then_named<F, R>(self, name: &'static str, step: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'static,
        R: 'static,
    {
        self.push(Some(name), step)
    }

    /// Append a step that fails with `error` when `predicate` is false.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_fns::ValidationPipe;
    ///
    /// let pipe = ValidationPipe::new()
    ///     .check(|n: &u8| *n != 0, "zero")
    ///     .check(|n: &u8| *n < 100, "too large");
    ///
    /// assert_eq!(pipe.run(&0), Err("zero"));
    /// assert_eq!(pipe.run(&200), Err("too large"));
    /// ```
    pub fn check<P>(self, predicate: P, error: E) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        E: Clone,
    {
        self.push(None, check(predicate, error))
    }

    fn push<F, R>(mut self, name: Option<&'static str>, step: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + 'static,
        R: 'static,
    {
        self.steps.push(Entry {
            name,
            step: Box::new(discard(step)),
        });
        self
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipe has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step against `input`, returning the first error unchanged.
    pub fn run(&self, input: &T) -> Result<(), E> {
        self.run_traced(input).map_err(StepFailure::into_error)
    }

    /// Run every step against `input`, reporting the failing step's position
    /// and name along with its error.
    pub fn run_traced(&self, input: &T) -> Result<(), StepFailure<E>> {
        for (index, entry) in self.steps.iter().enumerate() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                step = index,
                name = entry.name.unwrap_or("<unnamed>"),
                "running validation step"
            );

            if let Err(error) = (entry.step)(input) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    step = index,
                    name = entry.name.unwrap_or("<unnamed>"),
                    skipped = self.steps.len() - index - 1,
                    "validation step failed"
                );
                return Err(StepFailure::new(index, entry.name, error));
            }
        }
        Ok(())
    }

    /// Turn the pipe into a plain closure equivalent to [`run`](ValidationPipe::run).
    pub fn into_fn(self) -> impl Fn(&T) -> Result<(), E> {
        move |input: &T| self.run(input)
    }
}

impl<T: ?Sized + 'static, E: 'static> Default for ValidationPipe<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> fmt::Debug for ValidationPipe<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .steps
            .iter()
            .map(|entry| entry.name.unwrap_or("<unnamed>"))
            .collect();
        f.debug_struct("ValidationPipe")
            .field("steps", &names)
            .finish()
    }
}
