use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioExtractor, SubtitleRenderer, Transcriber};
use crate::presentation::state::AppState;

pub const SERVICE_NAME: &str = "Vosk Captions API";

#[derive(Serialize)]
pub struct StatusResponse {
    pub processing_in_progress: bool,
    pub service: String,
}

pub async fn status_handler<E, T, R>(State(state): State<AppState<E, T, R>>) -> impl IntoResponse
where
    E: AudioExtractor + 'static + ?Sized,
    T: Transcriber + 'static + ?Sized,
    R: SubtitleRenderer + 'static + ?Sized,
{
    (
        StatusCode::OK,
        Json(StatusResponse {
            processing_in_progress: state.busy.available_permits() == 0,
            service: SERVICE_NAME.to_string(),
        }),
    )
}
