use crate::catalog::Catalog;
use crate::error::{ApiError, Result};
use crate::models::{CartItem, CartSummary};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
const SHIPPING_FLAT_RATE: f64 = 5.99;
const TAX_RATE: f64 = 0.08;

/// Applied promo code. The discount is recomputed from the current
/// subtotal whenever the summary is built, so it stays consistent as the
/// cart changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Promo {
    /// 10% off the subtotal.
    BookLover,
    /// Flat 5.00 off.
    NewReader,
}

impl Promo {
    fn parse(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "booklover" => Some(Promo::BookLover),
            "newreader" => Some(Promo::NewReader),
            _ => None,
        }
    }

    fn discount(&self, subtotal: f64) -> f64 {
        match self {
            Promo::BookLover => subtotal * 0.10,
            Promo::NewReader => 5.0,
        }
    }
}

#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartItem>,
    promo: Option<Promo>,
}

/// In-memory shopping cart keyed by catalog book id.
///
/// Insertion order is preserved for listing. Adding an id already in the
/// cart increments its quantity; setting a quantity to zero removes the
/// line. All recommendation output feeds into `add_book` by `Book::id`.
#[derive(Debug, Clone)]
pub struct CartService {
    catalog: Arc<Catalog>,
    state: Arc<RwLock<CartState>>,
}

impl CartService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Arc::new(RwLock::new(CartState::default())),
        }
    }

    /// Add a catalog book to the cart, incrementing quantity on repeat.
    pub fn add_book(&self, book_id: &str) -> Result<CartItem> {
        let book = self
            .catalog
            .find_book(book_id)
            .ok_or_else(|| ApiError::NotFound(format!("no book with id {}", book_id)))?;

        let mut state = self.write()?;
        if let Some(item) = state.items.iter_mut().find(|item| item.id == book_id) {
            item.quantity += 1;
            debug!("incremented cart quantity for '{}' to {}", item.title, item.quantity);
            return Ok(item.clone());
        }

        let item = CartItem::from(book);
        info!("added '{}' to cart", item.title);
        state.items.push(item.clone());
        Ok(item)
    }

    /// Set a line's quantity. Zero removes the line and returns None.
    pub fn set_quantity(&self, book_id: &str, quantity: u32) -> Result<Option<CartItem>> {
        let mut state = self.write()?;
        let position = state
            .items
            .iter()
            .position(|item| item.id == book_id)
            .ok_or_else(|| ApiError::NotFound(format!("no cart item with id {}", book_id)))?;

        if quantity == 0 {
            let removed = state.items.remove(position);
            debug!("removed '{}' from cart via zero quantity", removed.title);
            return Ok(None);
        }

        let item = &mut state.items[position];
        item.quantity = quantity;
        Ok(Some(item.clone()))
    }

    pub fn remove(&self, book_id: &str) -> Result<()> {
        let mut state = self.write()?;
        let position = state
            .items
            .iter()
            .position(|item| item.id == book_id)
            .ok_or_else(|| ApiError::NotFound(format!("no cart item with id {}", book_id)))?;
        state.items.remove(position);
        Ok(())
    }

    /// Empty the cart and drop any applied promo.
    pub fn clear(&self) -> Result<()> {
        let mut state = self.write()?;
        state.items.clear();
        state.promo = None;
        Ok(())
    }

    /// Apply a promo code and return the updated summary.
    pub fn apply_promo(&self, code: &str) -> Result<CartSummary> {
        let promo = Promo::parse(code)
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown promo code '{}'", code)))?;

        let mut state = self.write()?;
        state.promo = Some(promo);
        info!("applied promo code '{}'", code.to_lowercase());
        Ok(summarize(&state))
    }

    /// Current items (insertion order) and price summary.
    pub fn snapshot(&self) -> Result<(Vec<CartItem>, CartSummary)> {
        let state = self.read()?;
        Ok((state.items.clone(), summarize(&state)))
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CartState>> {
        self.state
            .read()
            .map_err(|_| ApiError::InternalError("cart state lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, CartState>> {
        self.state
            .write()
            .map_err(|_| ApiError::InternalError("cart state lock poisoned".to_string()))
    }
}

fn summarize(state: &CartState) -> CartSummary {
    if state.items.is_empty() {
        return CartSummary {
            item_count: 0,
            subtotal: 0.0,
            shipping: 0.0,
            tax: 0.0,
            discount: 0.0,
            total: 0.0,
        };
    }

    let item_count: u32 = state.items.iter().map(|item| item.quantity).sum();
    let subtotal: f64 = state
        .items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
    let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        SHIPPING_FLAT_RATE
    };
    let tax = subtotal * TAX_RATE;
    let discount = state
        .promo
        .map(|promo| promo.discount(subtotal))
        .unwrap_or(0.0);

    CartSummary {
        item_count,
        subtotal: round_cents(subtotal),
        shipping,
        tax: round_cents(tax),
        discount: round_cents(discount),
        total: round_cents(subtotal + shipping + tax - discount),
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CartService {
        CartService::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn add_unknown_book_is_not_found() {
        let cart = service();
        assert!(matches!(cart.add_book("999"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn repeat_add_increments_quantity() {
        let cart = service();
        let first = cart.add_book("1").unwrap();
        assert_eq!(first.quantity, 1);
        let second = cart.add_book("1").unwrap();
        assert_eq!(second.quantity, 2);

        let (items, summary) = cart.snapshot().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let cart = service();
        cart.add_book("2").unwrap();
        assert!(cart.set_quantity("2", 0).unwrap().is_none());
        let (items, _) = cart.snapshot().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn set_quantity_on_missing_line_is_not_found() {
        let cart = service();
        assert!(matches!(
            cart.set_quantity("2", 3),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn summary_charges_shipping_below_threshold() {
        let cart = service();
        // Beach Read, 13.99
        cart.add_book("2").unwrap();

        let (_, summary) = cart.snapshot().unwrap();
        assert_eq!(summary.subtotal, 13.99);
        assert_eq!(summary.shipping, SHIPPING_FLAT_RATE);
        assert_eq!(summary.tax, 1.12);
        assert_eq!(summary.total, 21.1);
    }

    #[test]
    fn summary_ships_free_above_threshold() {
        let cart = service();
        // 4 x The House in the Cerulean Sea, 14.99 each = 59.96
        for _ in 0..4 {
            cart.add_book("1").unwrap();
        }

        let (_, summary) = cart.snapshot().unwrap();
        assert_eq!(summary.subtotal, 59.96);
        assert_eq!(summary.shipping, 0.0);
    }

    #[test]
    fn empty_cart_summary_is_all_zeros() {
        let cart = service();
        let (_, summary) = cart.snapshot().unwrap();
        assert_eq!(summary.shipping, 0.0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn booklover_promo_takes_ten_percent() {
        let cart = service();
        cart.add_book("1").unwrap(); // 14.99
        let summary = cart.apply_promo("BOOKLOVER").unwrap();
        assert_eq!(summary.discount, 1.5);
    }

    #[test]
    fn newreader_promo_is_flat_five() {
        let cart = service();
        cart.add_book("1").unwrap();
        let summary = cart.apply_promo("newreader").unwrap();
        assert_eq!(summary.discount, 5.0);
    }

    #[test]
    fn unknown_promo_is_invalid_input() {
        let cart = service();
        assert!(matches!(
            cart.apply_promo("FREEBOOKS"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn promo_discount_follows_cart_changes() {
        let cart = service();
        cart.add_book("1").unwrap(); // 14.99
        cart.apply_promo("booklover").unwrap();
        cart.add_book("1").unwrap(); // 29.98

        let (_, summary) = cart.snapshot().unwrap();
        assert_eq!(summary.discount, 3.0);
    }

    #[test]
    fn clear_resets_items_and_promo() {
        let cart = service();
        cart.add_book("1").unwrap();
        cart.apply_promo("booklover").unwrap();
        cart.clear().unwrap();

        cart.add_book("2").unwrap();
        let (_, summary) = cart.snapshot().unwrap();
        assert_eq!(summary.discount, 0.0);
    }
}
