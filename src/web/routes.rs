use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // the trailing slash on /chat/ is part of the path
    cfg.route("/health", web::get().to(handlers::health))
        .route("/chat/", web::post().to(handlers::chat));
}

/// Body-deserialization failures (malformed JSON, missing fields, invalid
/// roles) become a structured 400 instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": detail })),
        )
        .into()
    })
}
