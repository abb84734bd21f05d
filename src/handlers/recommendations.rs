use crate::{
    error::ApiError,
    models::{RecommendationRequest, RecommendationResponse},
    services::{HistoryService, RecommendationService, SimulatedLatency},
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommendations").route(web::post().to(get_recommendations)));
}

/// Get book recommendations for a mood
#[utoipa::path(
    post,
    path = "/api/recommendations",
    tag = "Recommendations",
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "Books for the requested mood, in catalog order", body = RecommendationResponse),
    ),
    summary = "Get mood-based book recommendations",
    description = "Returns the catalog bucket for the given mood label. Labels are matched exactly (case-sensitive); a label without a bucket falls back to the default bucket, so the list is never empty."
)]
pub async fn get_recommendations(
    request: Json<RecommendationRequest>,
    recommendation_service: web::Data<RecommendationService>,
    history: web::Data<HistoryService>,
    latency: web::Data<SimulatedLatency>,
) -> Result<HttpResponse, ApiError> {
    // Boundary-only delay so the UI can show its loading state
    latency.apply().await;

    let result = recommendation_service.recommend(&request.mood);
    history.record_lookup(&request.mood, result.mood, result.fallback)?;

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        mood: result.mood.to_string(),
        fallback: result.fallback,
        recommendations: result.books.to_vec(),
    }))
}
