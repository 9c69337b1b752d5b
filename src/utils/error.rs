use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnitQueryError {
    #[error("Cannot parse amount '{token}' (decimal separator '{decimal_separator}')")]
    InvalidAmount {
        token: String,
        decimal_separator: char,
    },

    #[error("Unknown locale: {culture}")]
    UnknownLocale { culture: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UnitQueryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UnitQueryError::InvalidAmount { .. } => ErrorCategory::Input,
            UnitQueryError::UnknownLocale { .. }
            | UnitQueryError::ConfigError { .. }
            | UnitQueryError::ConfigValidationError { .. }
            | UnitQueryError::InvalidConfigValueError { .. }
            | UnitQueryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            UnitQueryError::IoError(_) => ErrorCategory::Io,
            UnitQueryError::SerializationError(_) | UnitQueryError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UnitQueryError::InvalidAmount { .. } => {
                "Start the query with a number, e.g. '10 ft in cm', using your locale's decimal separator"
            }
            UnitQueryError::UnknownLocale { .. } => {
                "Use a culture tag such as en-US or de-DE, or set decimal_separator explicitly"
            }
            UnitQueryError::IoError(_) => "Check that the input/config file exists and is readable",
            UnitQueryError::SerializationError(_) | UnitQueryError::CsvError(_) => {
                "Try a different --format or check that stdout is writable"
            }
            UnitQueryError::ConfigError { .. }
            | UnitQueryError::ConfigValidationError { .. }
            | UnitQueryError::InvalidConfigValueError { .. }
            | UnitQueryError::MissingConfigError { .. } => {
                "Review the configuration file against the documented [resolver], [locale] and [output] sections"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UnitQueryError::InvalidAmount { token, .. } => {
                format!("'{}' is not a number", token)
            }
            UnitQueryError::UnknownLocale { culture } => {
                format!("Locale '{}' is not supported", culture)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UnitQueryError>;
