use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid date '{value}' in {file}: {source}")]
    InvalidDate {
        file: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unexpected parser state: {file} has no closing front matter delimiter")]
    MissingBodyDelimiter { file: String },

    #[error("Invalid target document: {message}")]
    InvalidTargetDocument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    GlobPatternError(#[from] glob::PatternError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Target,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidDate { .. } | ConvertError::MissingBodyDelimiter { .. } => {
                ErrorCategory::Input
            }
            ConvertError::InvalidTargetDocument { .. } | ConvertError::SerializationError(_) => {
                ErrorCategory::Target
            }
            ConvertError::IoError(_) | ConvertError::GlobPatternError(_) => ErrorCategory::Io,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Target | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::InvalidDate { .. } => {
                "Use the 'YYYY-MM-DD HH:MM' format for the date field"
            }
            ConvertError::MissingBodyDelimiter { .. } => {
                "Close the front matter block with a '---' line before the post body"
            }
            ConvertError::InvalidTargetDocument { .. } => {
                "Export a fresh database from /ghost/debug and pass that file as the target"
            }
            ConvertError::SerializationError(_) => "Check that the target file is valid JSON",
            ConvertError::IoError(_) => "Check that the paths exist and are readable",
            ConvertError::GlobPatternError(_) => "Avoid glob metacharacters in the input folder",
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ConfigValidationError { .. } => "Review the settings file and CLI arguments",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not parse a post: {}", self),
            ErrorCategory::Target => format!("Could not use the Ghost export: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    /// 對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_high_severity() {
        let err = ConvertError::MissingBodyDelimiter {
            file: "posts/a.md".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("posts/a.md"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: ConvertError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "output.json").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("File access failed"));
    }
}
