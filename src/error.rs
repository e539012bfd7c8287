//! Error handling for the genai-scaffold application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for generation operations.
///
/// This enum represents all possible errors that can occur while building a
/// configuration or generating a project. It implements the standard Error
/// trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine during rendering
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while serializing the render context
    #[error("Context serialization error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A resolved descriptor names a template body that is not registered
    #[error("Template '{name}' is not registered.")]
    TemplateNotFoundError { name: String },

    /// A configuration field holds a value outside of its allowed set
    #[error("Invalid value '{value}' for field '{field}'.")]
    ConfigurationError { field: &'static str, value: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
