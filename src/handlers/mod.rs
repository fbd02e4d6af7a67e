pub mod analysis_handler;
pub mod health_handler;
pub mod question_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::{AppError, ANSWERS_REQUIRED};

pub use analysis_handler::{analyze, method_not_allowed};
pub use health_handler::health_check;
pub use question_handler::list_questions;

const JSON_BODY_LIMIT: usize = 64 * 1024;

/// Every body the extractor cannot turn into an answer list is reported the
/// same way to the client.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejecting {} {}: {}", req.method(), req.path(), err);
    AppError::invalid_request(ANSWERS_REQUIRED).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error_handler),
    )
    .service(
        web::resource("/api/analyze")
            .route(web::post().to(analyze))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(list_questions)
    .service(health_check);
}
