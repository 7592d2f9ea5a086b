use axum::{Json, extract::State, response::IntoResponse};

use crate::SharedState;
use crate::error::ApiError;

pub async fn get_achievements(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let achievements = state.store.achievements()?;
    Ok(Json(achievements))
}
