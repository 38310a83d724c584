//! Conversation history endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// `GET /api/v1/conversations/{id}`
pub async fn conversation_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let conversation_id = path.into_inner();
    let messages = state.conversations.history(&conversation_id);

    HttpResponse::Ok().json(json!({
        "conversation_id": conversation_id,
        "count": messages.len(),
        "messages": messages,
    }))
}
