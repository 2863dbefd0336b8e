use actix_web::http::StatusCode;
use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use std::convert::From;

use crate::render;

#[derive(Debug, Display)]
pub enum ServiceError {
    #[display(fmt = "Internal Server Error")]
    InternalServerError,

    #[display(fmt = "{}", _0)]
    BadRequest(String),

    /// the backend refused the credentials, the message is shown to the user as-is
    #[display(fmt = "{}", _0)]
    Unauthorized(String),

    #[display(fmt = "Connect Supabase to get started")]
    NotConfigured,
}

impl ServiceError {
    /// the message a form should show for this error
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::BadRequest(message) | ServiceError::Unauthorized(message) => {
                message.clone()
            }
            ServiceError::NotConfigured => self.to_string(),
            _ => String::from("Não foi possível completar a operação, tente novamente"),
        }
    }
}

// impl ResponseError trait allows to convert our errors into http responses with appropriate data
impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ServiceError::InternalServerError => {
                String::from("Internal Server Error, Please try later")
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(render::error_page(message))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> ServiceError {
        error!("reqwest error: {}", error);
        ServiceError::InternalServerError
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(error: serde_json::Error) -> ServiceError {
        error!("unable to decode backend payload: {}", error);
        ServiceError::InternalServerError
    }
}

impl From<url::ParseError> for ServiceError {
    fn from(error: url::ParseError) -> ServiceError {
        error!("invalid backend url: {}", error);
        ServiceError::InternalServerError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_keep_the_backend_message() {
        let error = ServiceError::Unauthorized(String::from("Invalid login credentials"));

        assert_eq!(error.user_message(), "Invalid login credentials");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_errors_are_not_leaked_to_forms() {
        let message = ServiceError::InternalServerError.user_message();

        assert!(!message.contains("Internal"));
    }
}
