use crate::server::error::ApiError;
use crate::server::AppStateArc;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

pub fn routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(get_cart))
        .route("/add", post(add_to_cart))
        .route("/remove/:menu_item_id", delete(remove_from_cart))
        .route("/clear", delete(clear_cart))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartRequest {
    menu_item_id: Option<String>,
    quantity: Option<u32>,
}

async fn get_cart(State(state): State<AppStateArc>) -> Json<Value> {
    let cart = state.store.read().await.cart();
    Json(json!({ "success": true, "data": cart }))
}

async fn add_to_cart(
    State(state): State<AppStateArc>,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;

    let menu_item_id = req
        .menu_item_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Menu item ID is required".to_string()))?;

    let quantity = req.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(ApiError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let cart = state
        .store
        .write()
        .await
        .add_to_cart(&menu_item_id, quantity)?;
    info!(
        "Cart now has {} lines, total {}",
        cart.items.len(),
        cart.total_price
    );

    Ok(Json(json!({
        "success": true,
        "message": "Item added to cart",
        "data": cart,
    })))
}

async fn remove_from_cart(
    State(state): State<AppStateArc>,
    Path(menu_item_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let cart = state
        .store
        .write()
        .await
        .remove_from_cart(&menu_item_id)?;
    info!("Removed {} from cart", menu_item_id);

    Ok(Json(json!({
        "success": true,
        "message": "Item removed from cart",
        "data": cart,
    })))
}

async fn clear_cart(State(state): State<AppStateArc>) -> Json<Value> {
    let cart = state.store.write().await.clear_cart();
    info!("Cart cleared");

    Json(json!({
        "success": true,
        "message": "Cart cleared",
        "data": cart,
    }))
}
