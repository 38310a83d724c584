//! Gateway statistics endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};

/// `GET /api/v1/stats`
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let active_users = state.limiter.tracked_clients();
    HttpResponse::Ok().json(state.stats.snapshot(active_users))
}
