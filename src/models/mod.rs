use crate::catalog::Mood;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Re-export domain types
pub use book::Book;
pub use cart::{CartItem, CartSummary};
pub use history::{MoodCount, MoodSearchRecord, SearchKind};

mod book;
mod cart;
mod history;

/// Request structure for free-text mood analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMoodRequest {
    /// Free-form description of how the reader feels
    #[schema(example = "I feel so happy and excited today")]
    pub text: String,
}

/// Response structure for mood analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMoodResponse {
    /// The detected mood, always a member of the fixed vocabulary
    #[schema(example = "Happy")]
    pub mood: Mood,
}

/// Request structure for book recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRequest {
    /// The mood to recommend for; unknown labels fall back to the default bucket
    #[schema(example = "Adventurous")]
    pub mood: String,
}

/// Response structure for book recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    /// The bucket the recommendations came from
    #[schema(example = "Adventurous")]
    pub mood: String,
    /// True when the requested label had no bucket and the default was used
    pub fallback: bool,
    /// Recommended books in catalog order
    pub recommendations: Vec<Book>,
}

/// Request structure for adding a catalog book to the cart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    #[schema(example = "1")]
    pub book_id: String,
}

/// Request structure for changing a cart line's quantity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// New quantity; zero removes the line
    #[schema(example = 2)]
    pub quantity: u32,
}

/// Request structure for applying a promo code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromoRequest {
    #[schema(example = "booklover")]
    pub code: String,
}

/// Cart contents plus the derived price summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status of the service
    #[schema(example = "ok")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Not found: no book with id 99")]
    pub error: String,
}
