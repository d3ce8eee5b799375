pub mod handlers;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

use crate::config;
use crate::error::Error;

pub use handlers::AppState;

/// Registers the HTTP routes and the JSON body limit.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(config::MAX_PAYLOAD_BYTES))
        .service(handlers::index)
        .service(handlers::rank)
        .service(handlers::normalizer_info);
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyCorpus => StatusCode::BAD_REQUEST,
            Error::TokenLimit { .. } | Error::InputTooLarge { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
