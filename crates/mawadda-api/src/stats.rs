use axum::{Json, extract::State, response::IntoResponse};

use crate::SharedState;
use crate::error::ApiError;

pub async fn get_stats(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.store.user_stats()?;
    Ok(Json(stats))
}
