//! # pipe-fns
//!
//! Two small higher-order helpers for composing unary functions:
//!
//! - **pipe**: left-to-right composition, where each function's output is the
//!   next function's input
//! - **void pipe** (also **validation pipe**): every function receives the same
//!   original input, return values are discarded, and the first failure stops
//!   the run
//!
//! ## Quick Example
//!
//! ```rust
//! use pipe_fns::{check, pipe, void_pipe};
//!
//! // h(x) = (x + 2) * 2
//! let h = pipe!(|n: i32| n + 2, |n: i32| n * 2);
//! assert_eq!(h(1), 6);
//!
//! // Each validator sees the same input; the first failure wins.
//! let validate = void_pipe!(
//!     check(|n: &i32| n % 2 != 0, "number is not odd"),
//!     check(|n: &i32| *n > 10, "not greater than 10"),
//! );
//!
//! assert_eq!(validate(&11), Ok(()));
//! assert_eq!(validate(&9), Err("not greater than 10"));
//! assert_eq!(validate(&12), Err("number is not odd"));
//! ```
//!
//! Failures are plain `Result` values. A failing stage never triggers the
//! stages after it, and its error reaches the caller unchanged.
//!
//! ## Features
//!
//! - `tracing`: emit `trace!`/`debug!` events while pipelines and validation
//!   pipes run.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod pipe;
pub mod testing;
pub mod void_pipe;

// Re-exports
pub use error::StepFailure;
pub use pipe::{compose, try_compose, Pipeline, Stage};
pub use void_pipe::{check, ValidationPipe, VoidPipe};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::StepFailure;
    pub use crate::pipe::{compose, try_compose, Pipeline, Stage};
    pub use crate::void_pipe::{check, ValidationPipe, VoidPipe};
    pub use crate::{pipe, try_pipe, validation_pipe, void_pipe};
}
