//! Product search and recommendation endpoints

use crate::server::state::AppState;
use crate::services::{RecommendationQuery, SearchQuery};
use crate::utils::current_timestamp;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::debug;

/// `GET /api/v1/products/search?q=&category=&max_price=`
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, GatewayError> {
    debug!(?query, "Product search");

    let products = state.catalog.search(&query)?;

    Ok(HttpResponse::Ok().json(json!({
        "count": products.len(),
        "products": products,
        "timestamp": current_timestamp(),
    })))
}

/// `GET /api/v1/recommendations?budget=&style=&room=`
pub async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, GatewayError> {
    debug!(?query, "Recommendations requested");

    let recommendations = state.catalog.recommend(&query)?;

    Ok(HttpResponse::Ok().json(json!({
        "budget": query.budget.clone().unwrap_or_default(),
        "style": query.style.clone().unwrap_or_default(),
        "room": query.room.clone().unwrap_or_default(),
        "recommendations": recommendations,
        "timestamp": current_timestamp(),
    })))
}
