use actix_web::HttpResponse;
use serde::Serialize;
use std::fmt;

/// Error kinds raised by the service and client layers. Mapped to HTTP
/// status codes in one place (`to_response`) at the REST boundary.
#[derive(Debug)]
pub enum MovieError {
    InvalidRequest(String),
    Upstream(String),
    Internal(String),
}

/// Error body returned on 400/500/502 responses
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub error: String,
}

impl fmt::Display for MovieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            MovieError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            MovieError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MovieError {}

impl MovieError {
    /// Translates the error kind into the HTTP response. Internal detail is
    /// logged by the caller and never surfaced in the body.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            MovieError::InvalidRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse {
                timestamp: chrono::Utc::now().to_rfc3339(),
                error: msg.clone(),
            }),
            MovieError::Upstream(msg) => HttpResponse::BadGateway().json(ErrorResponse {
                timestamp: chrono::Utc::now().to_rfc3339(),
                error: msg.clone(),
            }),
            MovieError::Internal(_) => HttpResponse::InternalServerError().json(ErrorResponse {
                timestamp: chrono::Utc::now().to_rfc3339(),
                error: "Internal server error".to_string(),
            }),
        }
    }
}
