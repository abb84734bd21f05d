use crate::{
    catalog::Catalog,
    config::Config,
    error::Result,
    models,
    routes::{api_routes, openapi_route, swagger_redirect_route, swagger_routes},
    services::{
        CartService, HistoryService, MoodClassifier, RecommendationService, SimulatedLatency,
    },
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::net::TcpListener;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::moods::analyze_mood,
        crate::handlers::recommendations::get_recommendations,
    ),
    components(schemas(
        models::Book,
        models::CartItem,
        models::CartSummary,
        models::AnalyzeMoodRequest,
        models::AnalyzeMoodResponse,
        models::RecommendationRequest,
        models::RecommendationResponse,
        models::AddCartItemRequest,
        models::UpdateQuantityRequest,
        models::PromoRequest,
        models::CartResponse,
        models::HealthResponse,
        models::ErrorResponse,
        models::MoodSearchRecord,
        models::MoodCount,
        models::SearchKind,
        crate::catalog::Mood,
    )),
    tags(
        (name = "Moods", description = "Free-text mood analysis"),
        (name = "Recommendations", description = "Mood-based book recommendations")
    )
)]
pub struct ApiDoc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for Docker compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        // Initialize services over the built-in tables
        let catalog = Arc::new(Catalog::builtin());
        let classifier = web::Data::new(MoodClassifier::builtin());
        let recommendation_service =
            web::Data::new(RecommendationService::new(Arc::clone(&catalog)));
        let cart_service = web::Data::new(CartService::new(Arc::clone(&catalog)));
        let history_service = web::Data::new(HistoryService::new());
        let latency = web::Data::new(SimulatedLatency::from_millis(
            self.config.simulated_latency_ms,
        ));

        if self.config.simulated_latency_ms > 0 {
            info!(
                "Simulating {}ms of latency on analysis and recommendation responses",
                self.config.simulated_latency_ms
            );
        }

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(classifier.clone())
                .app_data(recommendation_service.clone())
                .app_data(cart_service.clone())
                .app_data(history_service.clone())
                .app_data(latency.clone())
                .service(api_routes())
                .service(swagger_routes())
                .service(openapi_route())
                .service(swagger_redirect_route())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
