//! Validation Chain Example
//!
//! Demonstrates composing transformations with `pipe!` and running
//! short-circuiting validators with `ValidationPipe`, with tracing enabled.
//!
//! Run with `cargo run --example validation_chain --features tracing`.

use pipe_fns::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    Empty,
    TooLong { max: usize },
    BadCharacter(char),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::Empty => write!(f, "username is empty"),
            SignupError::TooLong { max } => write!(f, "username is longer than {} chars", max),
            SignupError::BadCharacter(c) => write!(f, "username contains '{}'", c),
        }
    }
}

impl std::error::Error for SignupError {}

fn no_bad_characters(name: &str) -> Result<(), SignupError> {
    match name.chars().find(|c| !c.is_alphanumeric() && *c != '_') {
        Some(c) => Err(SignupError::BadCharacter(c)),
        None => Ok(()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("\n=== Normalizing with pipe! ===");
    let normalize = pipe!(
        |raw: &str| raw.trim().to_string(),
        |s: String| s.to_lowercase(),
        |s: String| s.replace(' ', "_"),
    );

    let raw = "  Ada Lovelace ";
    let username = normalize(raw);
    println!("'{}' -> '{}'", raw, username);

    println!("\n=== Validating with ValidationPipe ===");
    let validate = ValidationPipe::new()
        .then_named("not_empty", check(|s: &str| !s.is_empty(), SignupError::Empty))
        .then_named(
            "max_length",
            check(|s: &str| s.len() <= 16, SignupError::TooLong { max: 16 }),
        )
        .then_named("charset", no_bad_characters);

    for candidate in [username.as_str(), "", "a_very_long_username_indeed", "bob!"] {
        match validate.run_traced(candidate) {
            Ok(()) => println!("  '{}' accepted", candidate),
            Err(failure) => {
                tracing::info!(index = failure.index(), "rejected");
                println!("  '{}' rejected: {}", candidate, failure);
            }
        }
    }

    println!("\n=== Fallible stages with try_pipe! ===");
    let parse_port = try_pipe!(
        |s: &str| s.parse::<u32>().map_err(|e| e.to_string()),
        |n: u32| u16::try_from(n).map_err(|_| format!("{} is out of range", n)),
    );

    for input in ["8080", "70000", "http"] {
        println!("  {:>6} -> {:?}", input, parse_port(input));
    }
}
