//! Error handling for pkgscaffold.
//! Defines the error type and result alias shared by every pipeline stage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read user input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The registry query for a dependency exited with an error or wrote to stderr.
    #[error("Failed to resolve the latest version of '{package}': {reason}")]
    RegistryLookupError { package: String, reason: String },

    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template '{name}' is missing from the template set.")]
    TemplateNotFoundError { name: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDirDoesNotExistError { template_dir: String },

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Failed to parse answers: {0}.")]
    AnswersParseError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the failure and exits the program.
///
/// # Behavior
/// Logs the error, prints `stop.` to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::error!("{err}");
    eprintln!("stop.");
    std::process::exit(1);
}
