use crate::domain::model::ErrorBody;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request";

/// 輸入錯誤：來自客戶端的數字字串無法接受
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{raw}' is not a valid number")]
    Unparsable { raw: String },

    #[error("'{raw}' truncates to {value}, outside the accepted range of ±{ceiling}")]
    OutOfRange {
        raw: String,
        value: i64,
        ceiling: u64,
    },
}

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Configuration,
    Network,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClassifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClassifierError::Input(_) => ErrorCategory::Client,
            ClassifierError::ConfigError { .. }
            | ClassifierError::InvalidConfigValueError { .. }
            | ClassifierError::TomlError(_) => ErrorCategory::Configuration,
            ClassifierError::ApiError(_) | ClassifierError::ServerError { .. } => {
                ErrorCategory::Network
            }
            ClassifierError::Internal { .. } | ClassifierError::IoError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClassifierError::Input(InputError::Unparsable { .. }) => {
                "Pass a numeric value, e.g. ?number=371".to_string()
            }
            ClassifierError::Input(InputError::OutOfRange { ceiling, .. }) => {
                range_message(*ceiling)
            }
            ClassifierError::ConfigError { .. }
            | ClassifierError::InvalidConfigValueError { .. } => {
                "Check the command line flags, environment variables and config file".to_string()
            }
            ClassifierError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            ClassifierError::IoError(_) => "Check that the file exists and is readable".to_string(),
            ClassifierError::ApiError(_) => {
                "Check the facts endpoint and network access".to_string()
            }
            ClassifierError::ServerError { .. } => {
                "Make sure the port is free and the host address is valid".to_string()
            }
            ClassifierError::Internal { .. } => {
                "Retry the request; report it if it persists".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClassifierError::Input(e) => e.to_string(),
            ClassifierError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self {
            ClassifierError::Input(_) => 400,
            _ => 500,
        }
    }

    /// 回應給客戶端的錯誤內容，內部細節不外洩
    pub fn error_body(&self) -> ErrorBody {
        match self {
            ClassifierError::Input(InputError::Unparsable { raw }) => ErrorBody {
                number: Some(raw.clone()),
                error: true,
                message: None,
            },
            ClassifierError::Input(InputError::OutOfRange { raw, ceiling, .. }) => ErrorBody {
                number: Some(raw.clone()),
                error: true,
                message: Some(range_message(*ceiling)),
            },
            _ => ErrorBody {
                number: None,
                error: true,
                message: Some(INTERNAL_ERROR_MESSAGE.to_string()),
            },
        }
    }
}

fn range_message(ceiling: u64) -> String {
    let bound = group_thousands(ceiling);
    format!("Number must be between -{} and {}", bound, bound)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_body_echoes_input() {
        let err = ClassifierError::from(InputError::Unparsable {
            raw: "abc".to_string(),
        });

        assert_eq!(err.status_code(), 400);
        let body = serde_json::to_value(err.error_body()).unwrap();
        assert_eq!(body, serde_json::json!({"number": "abc", "error": true}));
    }

    #[test]
    fn test_out_of_range_body_has_message() {
        let err = ClassifierError::from(InputError::OutOfRange {
            raw: "2000000000".to_string(),
            value: 2_000_000_000,
            ceiling: 1_000_000_000,
        });

        let body = err.error_body();
        assert_eq!(body.number.as_deref(), Some("2000000000"));
        assert_eq!(
            body.message.as_deref(),
            Some("Number must be between -1,000,000,000 and 1,000,000,000")
        );
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.to_string().contains("truncates to 2000000000"));
    }

    #[test]
    fn test_recovery_suggestion_uses_configured_ceiling() {
        let err = ClassifierError::from(InputError::OutOfRange {
            raw: "1500".to_string(),
            value: 1500,
            ceiling: 1000,
        });

        assert_eq!(
            err.recovery_suggestion(),
            "Number must be between -1,000 and 1,000"
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = ClassifierError::Internal {
            message: "index out of bounds".to_string(),
        };

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.user_friendly_message(), INTERNAL_ERROR_MESSAGE);
        let body = err.error_body();
        assert!(body.number.is_none());
        assert_eq!(body.message.as_deref(), Some(INTERNAL_ERROR_MESSAGE));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
    }
}
