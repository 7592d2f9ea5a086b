use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};
use uuid::Uuid;

use mawadda_store::rules;
use mawadda_types::api::{AddFavoriteRequest, FavoriteResponse};

use crate::SharedState;
use crate::error::ApiError;

pub async fn get_favorites(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let favorites = state.store.favorites()?;

    // Embed the referenced message; a favorite survives its message, so the
    // embed is optional.
    let mut out = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        let message = state.store.message(favorite.message_id)?;
        out.push(FavoriteResponse::new(favorite, message));
    }

    Ok(Json(out))
}

pub async fn add_favorite(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let req: AddFavoriteRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("Invalid request data: {}", e)))?;

    let favorite = state.store.add_favorite(req.message_id)?;

    // Saving a favorite earns hearts, subject to the grant cooldown.
    state.store.increment_hearts(rules::FAVORITE_REWARD_HEARTS)?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

pub async fn remove_favorite(
    State(state): State<SharedState>,
    Path(message_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if state.store.remove_favorite(message_id)? {
        Ok(Json(json!({ "message": "Removed from favorites" })))
    } else {
        Err(ApiError::NotFound("Favorite not found"))
    }
}
