//! Error handling for pass-forge
//!
//! The password policy engine itself is total and never fails; these errors
//! only come from the edges of the program (configuration, clipboard tools,
//! terminal prompts and JSON output).

use thiserror::Error;

/// Main error type for pass-forge
#[derive(Error, Debug, Clone)]
pub enum PassForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Clipboard error ({tool}): {message}")]
    Clipboard { tool: String, message: String },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PassForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a clipboard error
    pub fn clipboard(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Clipboard {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the user simply backed out of an interactive prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt { message } if message == CANCELLED)
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or PASS_FORGE_* variables", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Clipboard { tool, message } => {
                format!("❌ Failed to copy password ({}): {}\n💡 Install wl-copy, xclip or xsel, or copy it by hand", tool, message)
            }
            Self::Prompt { message } => {
                format!("❌ Terminal prompt failed: {}\n💡 Interactive mode needs a TTY, try the one-shot flags instead", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

const CANCELLED: &str = "operation cancelled";

impl From<serde_json::Error> for PassForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Failed to serialize output: {}", err))
    }
}

impl From<inquire::InquireError> for PassForgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::prompt(CANCELLED),
            other => Self::prompt(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PassForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassForgeError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = PassForgeError::clipboard("xclip", "exit status 1");
        assert_eq!(err.to_string(), "Clipboard error (xclip): exit status 1");
    }

    #[test]
    fn test_cancelled_prompt() {
        let err: PassForgeError = inquire::InquireError::OperationCanceled.into();
        assert!(err.is_cancelled());
        assert!(!PassForgeError::prompt("no tty").is_cancelled());
    }

    #[test]
    fn test_json_error_is_internal() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: PassForgeError = json_err.into();
        assert!(matches!(err, PassForgeError::Internal { .. }));
        assert!(err.user_message().contains("Failed to serialize output"));
    }

    #[test]
    fn test_config_macro() {
        let err = config_error!("bad value for {}", "PASS_FORGE_LENGTH");
        assert!(err.user_message().contains("PASS_FORGE_LENGTH"));
    }
}
