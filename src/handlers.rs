use crate::controller;
use crate::errors::AppError;
use crate::models::{DateFieldRequest, DisplayState};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let display = controller::snapshot(&state).await;
    Html(render_index(&display))
}

pub async fn get_view(State(state): State<AppState>) -> Json<DisplayState> {
    Json(controller::snapshot(&state).await)
}

pub async fn set_date_field(
    State(state): State<AppState>,
    Json(payload): Json<DateFieldRequest>,
) -> Result<Json<DisplayState>, AppError> {
    let display = controller::edit_field(&state, payload).await?;
    Ok(Json(display))
}

pub async fn trigger(State(state): State<AppState>) -> Result<Json<DisplayState>, AppError> {
    let display = controller::press(&state).await?;
    Ok(Json(display))
}
