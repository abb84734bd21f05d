use crate::{error::ApiError, services::HistoryService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

pub fn history_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/history").route(web::get().to(get_history)))
        .service(web::resource("/history/stats").route(web::get().to(get_history_stats)));
}

/// Recent mood searches, most recent first.
pub async fn get_history(
    params: web::Query<HistoryQuery>,
    history: web::Data<HistoryService>,
) -> Result<HttpResponse, ApiError> {
    let records = history.recent(params.limit)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "history": records,
    })))
}

/// Per-mood search counts for the admin dashboard.
pub async fn get_history_stats(
    history: web::Data<HistoryService>,
) -> Result<HttpResponse, ApiError> {
    let stats = history.stats()?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "total": stats.total,
        "moods": stats.moods,
    })))
}
