use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry. Every field is required; the catalog is static data
/// defined at process start and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Cover image URL or path.
    pub cover: String,
    pub genre: String,
    /// The mood bucket this book belongs to.
    pub mood: String,
    /// Reader rating, 0 to 5.
    pub rating: f32,
    /// Non-negative price in the store currency.
    pub price: f64,
}
