use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not connect to teacher {uri}: {message}")]
    PeerConnectionError { uri: String, message: String },

    #[error("Unknown external address: {message}")]
    UnknownAddressError { message: String },
}

impl SeedError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    pub fn unknown_address(message: impl Into<String>) -> Self {
        Self::UnknownAddressError {
            message: message.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) => "Check network connectivity and try again",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigurationError { .. } => {
                "Fix the static-nodes.json file or the teacher URI"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Review the configuration file and CLI flags",
            Self::PeerConnectionError { .. } => "Check the teacher URI or pass another with --teacher",
            Self::UnknownAddressError { .. } => {
                "Check that the address-echo service is reachable or set address.echo_url"
            }
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigurationError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => 1,
            Self::HttpError(_) | Self::PeerConnectionError { .. } | Self::UnknownAddressError { .. } => 2,
            Self::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
