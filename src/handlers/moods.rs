use crate::{
    error::ApiError,
    models::{AnalyzeMoodRequest, AnalyzeMoodResponse},
    services::{HistoryService, MoodClassifier, SimulatedLatency},
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use tracing::info;

pub fn moods_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/moods").route(web::get().to(list_moods)))
        .service(web::resource("/moods/analyze").route(web::post().to(analyze_mood)));
}

/// List the classifier's mood vocabulary in its pinned order.
pub async fn list_moods(classifier: web::Data<MoodClassifier>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "moods": classifier.vocabulary(),
    }))
}

/// Classify free text into a mood label
#[utoipa::path(
    post,
    path = "/api/moods/analyze",
    tag = "Moods",
    request_body = AnalyzeMoodRequest,
    responses(
        (status = 200, description = "Detected mood from the fixed vocabulary", body = AnalyzeMoodResponse),
    ),
    summary = "Analyze a mood description",
    description = "Classifies a free-text description of how the reader feels into one mood label using keyword matching. Total over all inputs: text with no recognized keywords returns the default mood."
)]
pub async fn analyze_mood(
    request: Json<AnalyzeMoodRequest>,
    classifier: web::Data<MoodClassifier>,
    history: web::Data<HistoryService>,
    latency: web::Data<SimulatedLatency>,
) -> Result<HttpResponse, ApiError> {
    // Boundary-only delay so the UI can show its loading state
    latency.apply().await;

    let mood = classifier.classify(&request.text);
    info!("analyzed mood text into {}", mood);
    history.record_analysis(&request.text, mood)?;

    Ok(HttpResponse::Ok().json(AnalyzeMoodResponse { mood }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(MoodClassifier::builtin()))
                    .app_data(web::Data::new(HistoryService::new()))
                    .app_data(web::Data::new(SimulatedLatency::none()))
                    .service(web::scope("/api").configure(moods_config)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn analyze_returns_a_vocabulary_mood() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/moods/analyze")
            .set_json(serde_json::json!({ "text": "I feel so happy and excited today" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["mood"], "Happy");
    }

    #[actix_web::test]
    async fn empty_text_degenerates_to_default() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/moods/analyze")
            .set_json(serde_json::json!({ "text": "" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["mood"], "Happy");
    }

    #[actix_web::test]
    async fn moods_lists_the_vocabulary_in_order() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/moods").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let moods = body["moods"].as_array().unwrap();
        assert_eq!(moods.len(), 10);
        assert_eq!(moods[0], "Happy");
        assert_eq!(moods[1], "Sad");
    }
}
