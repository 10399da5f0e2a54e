use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::domain::EmailValidationError;

use super::super::helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    ValidationError(#[from] EmailValidationError),
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            SignupError::ValidationError(e) => {
                let message = e.to_string();
                HttpResponse::build(self.status_code()).json(json!({
                    "message": message,
                    "fields": { "email": [message] }
                }))
            }
        }
    }
}
