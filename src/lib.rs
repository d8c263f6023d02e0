//! Ask the user to choose one of a set of allowed options.
//!
//! The prompt is repeated until a valid option is entered, a blank answer
//! selects the default, or the attempt limit is reached.

/// Handles argument parsing and the `chooser` binary.
pub mod cli;

/// The choose loop and its options.
pub mod chooser;

/// Loading options from JSON and YAML files.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Line-oriented input and prompt output helpers.
pub mod ioutils;

/// Prompt formatting and the yes/no confirmation.
pub mod prompt;

pub use chooser::{Chooser, Options};
pub use error::{Error, Result};
pub use ioutils::LineSource;
pub use prompt::{build_prompt, confirm};
