use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub const ANSWERS_REQUIRED: &str = "Invalid request: answers array required";
pub const ANSWER_OUT_OF_RANGE: &str = "Invalid request: answer values must be between 1 and 5";
pub const DUPLICATE_ANSWER: &str = "Invalid request: duplicate answer for a question";
pub const UNKNOWN_QUESTION: &str = "Invalid request: unknown question id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Carries a message that is safe to hand back to the client.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Generation failure: {0}")]
    GenerationFailure(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn invalid_request(message: &str) -> Self {
        AppError::InvalidRequest(message.to_string())
    }

    /// The message sent over the wire. Server-side causes stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidRequest(message) => message,
            AppError::ConfigurationError(_) => "Server configuration error",
            AppError::GenerationFailure(_) => "Failed to analyze personality",
            AppError::MethodNotAllowed => "Method not allowed",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::GenerationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        log::debug!("answer validation failed: {}", err);
        AppError::invalid_request(ANSWER_OUT_OF_RANGE)
    }
}

pub type AppResult<T> = Result<T, AppError>;
