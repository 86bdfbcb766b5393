use std::{fmt, io};

/// Crate-wide `Result` type using [`DocwordsError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, DocwordsError>;

/// Top-level error type for docwords operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate. The completion
/// engine itself is infallible; errors only arise at the edges
/// (configuration I/O, provider and plugin registration).
#[derive(Debug)]
pub enum DocwordsError {
    /// Configuration errors.
    Config(ConfigError),

    /// Provider or plugin registration errors.
    Registry(RegistryError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Registration-specific errors.
#[derive(Debug)]
pub enum RegistryError {
    /// A provider or plugin with the same name is already registered.
    AlreadyRegistered(String),

    /// No provider or trigger with that name is registered.
    NotFound(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for DocwordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocwordsError::Config(e) => write!(f, "Configuration error: {e}"),
            DocwordsError::Registry(e) => write!(f, "Registration error: {e}"),
            DocwordsError::Io(e) => write!(f, "I/O error: {e}"),
            DocwordsError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::AlreadyRegistered(name) => {
                write!(f, "Already registered: {name}")
            }
            RegistryError::NotFound(name) => write!(f, "Not registered: {name}"),
        }
    }
}

impl std::error::Error for DocwordsError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for RegistryError {}

/* ========================= Conversions to DocwordsError ========================= */

impl From<io::Error> for DocwordsError {
    fn from(err: io::Error) -> Self {
        DocwordsError::Io(err)
    }
}

impl From<ConfigError> for DocwordsError {
    fn from(err: ConfigError) -> Self {
        DocwordsError::Config(err)
    }
}

impl From<RegistryError> for DocwordsError {
    fn from(err: RegistryError) -> Self {
        DocwordsError::Registry(err)
    }
}

impl From<String> for DocwordsError {
    fn from(msg: String) -> Self {
        DocwordsError::Generic(msg)
    }
}

impl From<&str> for DocwordsError {
    fn from(msg: &str) -> Self {
        DocwordsError::Generic(msg.to_owned())
    }
}
