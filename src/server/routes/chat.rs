//! Chat endpoint

use crate::core::chat::ChatRequest;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use std::time::Instant;
use tracing::{error, info, warn};

/// Forward one chat message to the AI service
///
/// Admission has already been decided by the rate limit middleware; no lock
/// is held while the upstream call is in flight.
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request = request.into_inner();
    let started = Instant::now();

    info!(
        conversation = request.conversation_id.as_deref().unwrap_or("-"),
        "Chat request received"
    );

    match state.forwarder.handle(&request).await {
        Ok(response) => {
            state.stats.record_chat(started.elapsed());
            if let Some(conversation_id) = &request.conversation_id {
                state
                    .conversations
                    .record(conversation_id, response.clone());
            }
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            if e.is_upstream() {
                error!("AI service error: {}", e);
            } else {
                warn!("Invalid chat request: {}", e);
            }
            Err(e)
        }
    }
}
