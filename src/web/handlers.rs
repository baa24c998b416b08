use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::provider::CompletionClient;
use crate::web::models::{ensure_system_message, ChatRequest, ChatResponse};

// Health check endpoint
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

// Chat endpoint: ensure a system message is present, relay the conversation
// to the completion provider, return the first choice's text.
pub async fn chat(
    client: web::Data<CompletionClient>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let messages = ensure_system_message(req.into_inner().messages);

    info!("Chat request with {} messages", messages.len());

    match client.complete(&messages).await {
        Ok(reply) => HttpResponse::Ok().json(ChatResponse { reply }),
        Err(e) => {
            error!("Completion request failed: {}", e);
            HttpResponse::BadGateway().json(json!({
                "error": "failed to get a reply from the completion API"
            }))
        }
    }
}
