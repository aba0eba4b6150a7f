use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::completion_client::CompletionError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput {
        message: String,
        details: Option<String>,
    },

    #[error("{context}: {source}")]
    Completion {
        context: String,
        #[source]
        source: CompletionError,
    },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            message: message.into(),
            details: None,
        }
    }

    /// Wraps an upstream failure with the route-level message shown to clients.
    pub fn completion(context: impl Into<String>, source: CompletionError) -> Self {
        AppError::Completion {
            context: context.into(),
            source,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput { message, .. } => message.clone(),
            AppError::Completion { context, .. } => context.clone(),
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            AppError::InvalidInput { details, .. } => details.clone(),
            AppError::Completion { source, .. } => Some(source.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Completion { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            details: self.details(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput {
            message: "Invalid request data".to_string(),
            details: Some(err.to_string()),
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::completion("Completion service request failed", err)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::invalid_input("Missing topic").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::completion("Failed to generate MCQs", CompletionError::MissingCredentials)
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::completion("Failed to generate notes", CompletionError::EmptyResponse);
        assert_eq!(
            err.to_string(),
            "Failed to generate notes: Completion service returned no text"
        );
    }

    #[actix_web::test]
    async fn test_error_body_carries_error_and_details() {
        let err = AppError::completion(
            "Failed to generate MCQs",
            CompletionError::UpstreamError {
                status: Some(502),
                message: "bad gateway".into(),
            },
        );

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Failed to generate MCQs");
        assert!(json["details"].as_str().unwrap().contains("502"));
    }

    #[actix_web::test]
    async fn test_invalid_input_omits_details_when_absent() {
        let err = AppError::invalid_input("Missing subject parameter");

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Missing subject parameter");
        assert!(json.get("details").is_none());
    }
}
