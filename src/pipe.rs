//! Left-to-right function composition
//!
//! This module threads a value through a sequence of functions, feeding each
//! function's output to the next one:
//!
//! - [`compose`] and the [`pipe!`](crate::pipe!) macro for statically typed,
//!   heterogeneous stages (`A -> B -> C -> ...`)
//! - [`try_compose`] and [`try_pipe!`](crate::try_pipe!) for stages returning
//!   `Result`, stopping at the first `Err`
//! - [`Pipeline`] for a homogeneous (`T -> T`) sequence of stages held as data
//!
//! # Examples
//!
//! ```
//! use pipe_fns::pipe;
//!
//! let add_two_then_double = pipe!(|n: i32| n + 2, |n: i32| n * 2);
//! assert_eq!(add_two_then_double(1), 6);
//! ```
//!
//! Every stage takes a single argument. A first stage that needs several
//! inputs takes them as a tuple:
//!
//! ```
//! use pipe_fns::pipe;
//!
//! let area_label = pipe!(|(w, h): (u32, u32)| w * h, |a: u32| format!("{} m²", a));
//! assert_eq!(area_label((3, 4)), "12 m²");
//! ```

use std::fmt;

/// Compose two functions left to right: `compose(f, g)(a) == g(f(a))`.
///
/// `f` runs first and its output becomes the only argument of `g`.
///
/// # Example
///
/// ```
/// use pipe_fns::compose;
///
/// let h = compose(|n: i32| n + 2, |n: i32| n * 2);
/// assert_eq!(h(1), 6);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Compose two fallible functions left to right.
///
/// If `f` returns `Err`, the error is returned as is and `g` is never called.
///
/// # Example
///
/// ```
/// use pipe_fns::try_compose;
///
/// let parse_then_halve = try_compose(
///     |s: &str| s.parse::<i32>().map_err(|_| "not a number"),
///     |n: i32| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") },
/// );
///
/// assert_eq!(parse_then_halve("8"), Ok(4));
/// assert_eq!(parse_then_halve("7"), Err("odd"));
/// assert_eq!(parse_then_halve("x"), Err("not a number"));
/// ```
pub fn try_compose<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |a| g(f(a)?)
}

/// Compose any number of functions left to right.
///
/// `pipe!(f1, f2, ..., fn)` builds `h` such that `h(x) == fn(...f2(f1(x)))`.
/// A single stage is returned unchanged.
///
/// # Example
///
/// ```
/// use pipe_fns::pipe;
///
/// let shout = pipe!(
///     |s: &str| s.trim().to_string(),
///     |s: String| s.to_uppercase(),
///     |s: String| s + "!",
/// );
///
/// assert_eq!(shout("  hello "), "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe::compose($first, $crate::pipe!($($rest),+))
    };
}

/// Compose any number of fallible functions left to right.
///
/// Each stage returns `Result<_, E>` with the same `E`. The first `Err`
/// ends the pipe and later stages are not called.
///
/// # Example
///
/// ```
/// use pipe_fns::try_pipe;
///
/// let checked = try_pipe!(
///     |n: u32| n.checked_mul(1000).ok_or("overflow"),
///     |n: u32| n.checked_add(1).ok_or("overflow"),
/// );
///
/// assert_eq!(checked(2), Ok(2001));
/// assert_eq!(checked(u32::MAX), Err("overflow"));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe::try_compose($first, $crate::try_pipe!($($rest),+))
    };
}

/// A boxed pipeline stage.
pub type Stage<T> = Box<dyn Fn(T) -> T>;

/// A sequence of `T -> T` stages stored as data.
///
/// Unlike [`pipe!`](crate::pipe!), the number of stages does not have to be
/// known at compile time. A pipeline without stages is the identity.
///
/// # Example
///
/// ```
/// use pipe_fns::Pipeline;
///
/// let normalize = Pipeline::new()
///     .then(|s: String| s.trim().to_string())
///     .then(|s: String| s.to_lowercase());
///
/// assert_eq!(normalize.call("  Hello ".to_string()), "hello");
/// assert_eq!(Pipeline::<i32>::new().call(7), 7);
/// ```
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T: 'static> Pipeline<T> {
    /// Create a pipeline with no stages.
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Append a stage.
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run `input` through every stage in order.
    pub fn call(&self, input: T) -> T {
        let total = self.stages.len();
        self.stages
            .iter()
            .enumerate()
            .fold(input, |value, (index, stage)| {
                #[cfg(feature = "tracing")]
                tracing::trace!(stage = index, stages = total, "running pipeline stage");
                #[cfg(not(feature = "tracing"))]
                let _ = (index, total);
                stage(value)
            })
    }

    /// Turn the pipeline into a plain closure.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_fns::Pipeline;
    ///
    /// let inc_twice = Pipeline::new().then(|n: i32| n + 1).then(|n: i32| n + 1).into_fn();
    /// let results: Vec<i32> = vec![1, 2, 3].into_iter().map(inc_twice).collect();
    /// assert_eq!(results, vec![3, 4, 5]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |input| self.call(input)
    }
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Stage<T>> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = Stage<T>>>(iter: I) -> Self {
        Pipeline {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Stage<T>> for Pipeline<T> {
    fn extend<I: IntoIterator<Item = Stage<T>>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
