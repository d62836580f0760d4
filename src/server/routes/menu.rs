use crate::model::Category;
use crate::server::error::ApiError;
use crate::server::guard::MerchantUser;
use crate::server::AppStateArc;
use crate::share::whatsapp_share_url;
use crate::store::{MenuItemPatch, NewMenuItem};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

pub fn routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/share", get(share_item))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemRequest {
    title: Option<String>,
    description: Option<String>,
    price: Option<u32>,
    image_url: Option<String>,
    category: Option<String>,
}

fn parse_category(category: Option<String>) -> Result<Option<Category>, ApiError> {
    category
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.parse::<Category>().map_err(ApiError::BadRequest))
        .transpose()
}

fn not_found() -> ApiError {
    ApiError::NotFound("Menu item not found".to_string())
}

async fn list_items(State(state): State<AppStateArc>) -> Json<Value> {
    let items = state.store.read().await.list_items();
    Json(json!({
        "success": true,
        "count": items.len(),
        "data": items,
    }))
}

async fn get_item(
    State(state): State<AppStateArc>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let item = store.get_item(&id).ok_or_else(not_found)?;
    Ok(Json(json!({ "success": true, "data": item })))
}

async fn create_item(
    State(state): State<AppStateArc>,
    MerchantUser(claims): MerchantUser,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(req) = payload?;

    let (title, description, price) = match (req.title, req.description, req.price) {
        (Some(title), Some(description), Some(price))
            if !title.trim().is_empty() && !description.is_empty() && price > 0 =>
        {
            (title, description, price)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Please provide title, description, and price".to_string(),
            ))
        }
    };

    let new_item = NewMenuItem {
        title,
        description,
        price,
        image_url: req.image_url,
        category: parse_category(req.category)?,
        merchant_id: claims.user_id,
    };

    let item = state.store.write().await.create_item(new_item);
    info!("Created menu item {} '{}'", item.id, item.title);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": item })),
    ))
}

async fn update_item(
    State(state): State<AppStateArc>,
    MerchantUser(_): MerchantUser,
    Path(id): Path<String>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;

    let patch = MenuItemPatch {
        title: req.title,
        description: req.description,
        price: req.price,
        image_url: req.image_url,
        category: parse_category(req.category)?,
    };

    let item = state
        .store
        .write()
        .await
        .update_item(&id, patch)
        .ok_or_else(not_found)?;
    info!("Updated menu item {}", item.id);

    Ok(Json(json!({ "success": true, "data": item })))
}

async fn delete_item(
    State(state): State<AppStateArc>,
    MerchantUser(_): MerchantUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let item = state
        .store
        .write()
        .await
        .delete_item(&id)
        .ok_or_else(not_found)?;
    info!("Deleted menu item {}", item.id);

    Ok(Json(json!({
        "success": true,
        "message": "Menu item deleted",
    })))
}

async fn share_item(
    State(state): State<AppStateArc>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let item = store.get_item(&id).ok_or_else(not_found)?;

    Ok(Json(json!({
        "success": true,
        "url": whatsapp_share_url(item, &state.public_url),
    })))
}
