use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::{AudioExtractor, SubtitleRenderer, Transcriber};
use crate::domain::CaptionStyle;
use crate::presentation::state::AppState;

use super::upload::{ErrorResponse, read_caption_upload};

/// Synchronous captioning: upload a video, wait, download the captioned
/// result. Exactly one pipeline run at a time; concurrent callers get 429.
#[tracing::instrument(skip(state, multipart))]
pub async fn caption_handler<E, T, R>(
    State(state): State<AppState<E, T, R>>,
    mut multipart: Multipart,
) -> Response
where
    E: AudioExtractor + 'static + ?Sized,
    T: Transcriber + 'static + ?Sized,
    R: SubtitleRenderer + 'static + ?Sized,
{
    let upload = match read_caption_upload(&mut multipart).await {
        Ok(u) => u,
        Err(e) => return e.into_response(),
    };

    let _permit = match state.busy.clone().try_acquire_owned() {
        Ok(p) => p,
        Err(_) => {
            tracing::warn!("Caption request rejected: pipeline busy");
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    error: "Video processing already in progress. Please wait.".to_string(),
                }),
            )
                .into_response();
        }
    };

    let defaults = state.settings.default_style();
    let style = CaptionStyle::new(
        upload.font_size.unwrap_or(defaults.font_size),
        upload.y_offset.unwrap_or(defaults.y_offset),
    );

    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        font_size = style.font_size,
        y_offset = style.y_offset,
        "Caption request accepted"
    );

    match state
        .caption_service
        .caption_video(&upload.data, upload.format, style)
        .await
    {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "video/mp4".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", upload.filename),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Caption pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to process video".to_string(),
                }),
            )
                .into_response()
        }
    }
}
