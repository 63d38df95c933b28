use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Errors raised while parsing a chat command's arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command}: invalid {name} '{value}' (expected {expected})")]
    InvalidArgument {
        command: String,
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{command}: missing {name}")]
    MissingArgument { command: String, name: &'static str },
}

impl CommandError {
    /// The command that failed
    pub fn command(&self) -> &str {
        match self {
            CommandError::InvalidArgument { command, .. }
            | CommandError::MissingArgument { command, .. } => command,
        }
    }
}

/// API error response (matches Axum's built-in JsonRejection format)
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Command(_) | ServiceError::InvalidRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Config { .. } | ServiceError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Command(CommandError::InvalidArgument { .. }) => "invalid_argument",
            ServiceError::Command(CommandError::MissingArgument { .. }) => "missing_argument",
            ServiceError::InvalidRequest { .. } => "invalid_request",
            ServiceError::Config { .. } => "config_error",
            ServiceError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let response = ErrorResponse {
            message: self.to_string(),
            code: Some(self.error_code().to_string()),
        };

        (status, Json(response)).into_response()
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for command argument parsing
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_message() {
        let err = CommandError::InvalidArgument {
            command: "trade".to_string(),
            name: "rarity",
            value: "abc".to_string(),
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "trade: invalid rarity 'abc' (expected an integer)");
        assert_eq!(err.command(), "trade");
    }

    #[test]
    fn test_status_and_code() {
        let err: ServiceError = CommandError::MissingArgument {
            command: "repair".to_string(),
            name: "condition",
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "missing_argument");
        assert_eq!(err.to_string(), "repair: missing condition");

        let err = ServiceError::Internal {
            message: "boom".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "internal_error");
    }
}
