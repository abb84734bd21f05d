use crate::{
    error::ApiError,
    models::{AddCartItemRequest, CartResponse, PromoRequest, UpdateQuantityRequest},
    services::CartService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

pub fn cart_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cart")
            .route(web::get().to(get_cart))
            .route(web::delete().to(clear_cart)),
    )
    .service(web::resource("/cart/items").route(web::post().to(add_item)))
    .service(
        web::resource("/cart/items/{id}")
            .route(web::patch().to(update_quantity))
            .route(web::delete().to(remove_item)),
    )
    .service(web::resource("/cart/promo").route(web::post().to(apply_promo)));
}

pub async fn get_cart(cart: web::Data<CartService>) -> Result<HttpResponse, ApiError> {
    let (items, summary) = cart.snapshot()?;
    Ok(HttpResponse::Ok().json(CartResponse { items, summary }))
}

pub async fn add_item(
    request: Json<AddCartItemRequest>,
    cart: web::Data<CartService>,
) -> Result<HttpResponse, ApiError> {
    let item = cart.add_book(&request.book_id)?;
    Ok(HttpResponse::Ok().json(item))
}

pub async fn update_quantity(
    path: web::Path<String>,
    request: Json<UpdateQuantityRequest>,
    cart: web::Data<CartService>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match cart.set_quantity(&id, request.quantity)? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": id }))),
    }
}

pub async fn remove_item(
    path: web::Path<String>,
    cart: web::Data<CartService>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    cart.remove(&id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": id })))
}

pub async fn clear_cart(cart: web::Data<CartService>) -> Result<HttpResponse, ApiError> {
    cart.clear()?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "cleared": true })))
}

pub async fn apply_promo(
    request: Json<PromoRequest>,
    cart: web::Data<CartService>,
) -> Result<HttpResponse, ApiError> {
    let summary = cart.apply_promo(&request.code)?;
    Ok(HttpResponse::Ok().json(summary))
}
