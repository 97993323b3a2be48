use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match *self {
            AppError::ValidationError(..) => StatusCode::BAD_REQUEST,
            AppError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            AppError::NotFoundError(..) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": match *self {
                AppError::ValidationError(..) => "VALIDATION_ERROR",
                AppError::BadRequestError(..) => "BAD_REQUEST_ERROR",
                AppError::NotFoundError(..) => "NOT_FOUND_ERROR",
                AppError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            },
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
