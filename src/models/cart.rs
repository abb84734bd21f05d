use crate::models::Book;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A line in the shopping cart. Quantity is always positive; setting it to
/// zero removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub cover: String,
    pub quantity: u32,
}

impl From<&Book> for CartItem {
    fn from(book: &Book) -> Self {
        CartItem {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            cover: book.cover.clone(),
            quantity: 1,
        }
    }
}

/// Price breakdown for the current cart contents.
///
/// Shipping is free above a 50.00 subtotal, tax is a flat 8%, and the
/// discount comes from an applied promo code. An empty cart reports zeros
/// across the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
}
