//! Item HTTP Routes
//!
//! CRUD endpoints for inventory items.
//!
//! Bodies are taken as raw bytes rather than through the `Json` extractor:
//! a malformed body must come back as the regular `{"description"}` error,
//! and Update must answer 404 for an unknown id whatever the body holds.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::inventory::{InventoryHandler, InventoryResult, Item, ItemPayload};

// ==================
// Shared State
// ==================

/// Item state shared across handlers
pub struct ItemState {
    pub handler: InventoryHandler,
}

impl ItemState {
    pub fn new() -> Self {
        Self::with_handler(InventoryHandler::new())
    }

    pub fn with_handler(handler: InventoryHandler) -> Self {
        Self { handler }
    }
}

impl Default for ItemState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Item Routes
// ==================

/// Create item routes
pub fn item_routes(state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_item_handler(
    State(state): State<Arc<ItemState>>,
    body: Bytes,
) -> InventoryResult<(StatusCode, Json<Item>)> {
    let payload = ItemPayload::from_body(&body);
    let item = state.handler.create(&payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_items_handler(State(state): State<Arc<ItemState>>) -> InventoryResult<Json<Vec<Item>>> {
    Ok(Json(state.handler.list()?))
}

async fn get_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
) -> InventoryResult<Json<Item>> {
    Ok(Json(state.handler.get(&id)?))
}

async fn update_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> InventoryResult<Json<Item>> {
    let payload = ItemPayload::from_body(&body);
    Ok(Json(state.handler.update(&id, &payload)?))
}

async fn delete_item_handler(
    State(state): State<Arc<ItemState>>,
    Path(id): Path<String>,
) -> InventoryResult<StatusCode> {
    state.handler.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_state_creation() {
        let state = ItemState::new();
        assert!(state.handler.list().unwrap().is_empty());
    }

    #[test]
    fn test_router_builds() {
        let _router = item_routes(Arc::new(ItemState::new()));
    }
}
