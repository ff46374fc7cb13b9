use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Missing form field: {0}")]
    #[diagnostic(code(tallysheet::missing_field))]
    MissingField(String),

    #[error("Invalid entry: {0}")]
    #[diagnostic(code(tallysheet::invalid_entry))]
    InvalidEntry(String),

    #[error("Submission blocked: {0}")]
    #[diagnostic(code(tallysheet::submission_guard))]
    SubmissionGuard(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(tallysheet::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(tallysheet::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(tallysheet::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(tallysheet::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(tallysheet::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type TallyResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create missing-field errors from a field id
pub fn missing_field_error(field: &str) -> Error {
    Error::MissingField(field.to_string())
}

/// Helper to create invalid-entry errors
pub fn invalid_entry_error(message: &str) -> Error {
    Error::InvalidEntry(message.to_string())
}

/// Helper to create submission-guard errors
pub fn submission_guard_error(message: &str) -> Error {
    Error::SubmissionGuard(message.to_string())
}
