use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No input stream was configured for the prompt.
    #[error("No input stream configured.")]
    NilInputError,

    /// A read or write on one of the prompt streams failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The user never entered a valid option within the attempt budget.
    #[error("Gave up after {attempts} attempts without a valid answer.")]
    GaveUpError { attempts: u32 },

    #[error("Failed to parse JSON config. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported config file '{path}'. Expected one of: {extensions}.")]
    UnsupportedConfigFormatError { path: String, extensions: String },
}

/// Convenience type alias for Results with chooser's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
