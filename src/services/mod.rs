pub mod cart;
pub mod history;
pub mod latency;
pub mod mood_classifier;
pub mod recommendation;

// Re-export public types
pub use cart::CartService;
pub use history::{HistoryService, HistoryStats};
pub use latency::SimulatedLatency;
pub use mood_classifier::MoodClassifier;
pub use recommendation::{RecommendationService, Recommendations};
