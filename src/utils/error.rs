use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("A discovery request is already in progress")]
    DiscoveryInProgress,
}

impl DiscoveryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => format!("Could not reach the museum API: {}", e),
            Self::SerializationError(_) => {
                "The museum API returned a response we could not parse".to_string()
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Required configuration '{}' is missing", field)
            }
            Self::DiscoveryInProgress => {
                "A discovery is already running; wait for it to finish".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check your network connection and try 'discover' again",
            Self::SerializationError(_) => {
                "The API may have changed its response format; try again later"
            }
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Run with --help to see valid flags, or set HARVARD_API_KEY"
            }
            Self::DiscoveryInProgress => "Wait for the current discovery to complete",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
