use std::fmt;

use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE_ERROR: i32 = 1;
pub const EXIT_DATA_ERROR: i32 = 2;
pub const EXIT_SYSTEM_ERROR: i32 = 3;

pub type CommandResult<T> = Result<T, CliError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Broad classification of a CLI failure; decides the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad invocation: unknown verb or flag, unexpected positional arguments.
    Usage,
    /// The embedded proverb resource could not be loaded.
    Data,
    /// Anything else.
    System,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => EXIT_USAGE_ERROR,
            ErrorKind::Data => EXIT_DATA_ERROR,
            ErrorKind::System => EXIT_SYSTEM_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Usage => "usage",
            ErrorKind::Data => "data",
            ErrorKind::System => "system",
        };
        f.write_str(name)
    }
}

/// A classified failure carrying a user-facing message and an optional hint.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    kind: ErrorKind,
    message: String,
    suggestion: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl CliError {
    pub fn usage(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Usage,
            message: message.into(),
            suggestion: Some(suggestion.into()),
            source: None,
        }
    }

    pub fn data<E>(message: impl Into<String>, source: E, suggestion: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind: ErrorKind::Data,
            message: message.into(),
            suggestion: Some(suggestion.into()),
            source: Some(source.into()),
        }
    }

    pub fn system<E>(message: impl Into<String>, source: E, suggestion: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind: ErrorKind::System,
            message: message.into(),
            suggestion: Some(suggestion.into()),
            source: Some(source.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref().filter(|s| !s.is_empty())
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    /// Text written to stderr for this error, without a trailing newline.
    pub fn render(&self) -> String {
        match self.suggestion() {
            Some(suggestion) => format!("Error: {}\nSuggestion: {}", self.message, suggestion),
            None => format!("Error: {}", self.message),
        }
    }
}

/// Renders any error for stderr and picks its exit code. Errors that were not
/// classified as a [`CliError`] count as system errors.
pub fn describe(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<CliError>() {
        Some(cli_error) => (cli_error.render(), cli_error.exit_code()),
        None => (format!("Error: {err:#}"), EXIT_SYSTEM_ERROR),
    }
}

/// Writes the error to stderr and returns the exit code the process should use.
pub fn report(err: &anyhow::Error) -> i32 {
    let (text, code) = describe(err);
    let kind = err
        .downcast_ref::<CliError>()
        .map_or(ErrorKind::System, CliError::kind);
    tracing::debug!(%kind, exit_code = code, error = ?err, "command failed");
    eprintln!("{text}");
    code
}
