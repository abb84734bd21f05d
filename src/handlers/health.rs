use actix_web::{get, route, HttpResponse};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// CORS preflight
#[route("/health", method = "OPTIONS")]
pub async fn health_options() -> HttpResponse {
    HttpResponse::Ok().finish()
}
