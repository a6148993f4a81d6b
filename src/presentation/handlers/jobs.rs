use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{
    AudioExtractor, StagingStoreError, SubtitleRenderer, Transcriber,
};
use crate::application::services::CaptionMessage;
use crate::domain::{CaptionJob, CaptionStyle, JobId, JobStatus, StoragePath, Video};
use crate::presentation::state::AppState;

use super::upload::{ErrorResponse, read_caption_upload};

#[derive(Serialize)]
pub struct SubmitCaptionResponse {
    pub video_id: String,
    pub job_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub id: String,
    pub status: String,
    pub video_id: String,
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Queue-based captioning: stage the upload, record a job and hand it to
/// the worker.
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_caption_job_handler<E, T, R>(
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

    let video = Video::new(
        upload.filename.clone(),
        upload.format,
        upload.data.len() as u64,
    );
    let video_id = video.id;

    let storage_path = StoragePath::for_upload(&video.id, &video.filename);
    if let Err(e) = state.staging_store.store(&storage_path, upload.data).await {
        tracing::error!(error = %e, "Failed to stage upload");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to stage upload: {}", e),
            }),
        )
            .into_response();
    }

    let job = CaptionJob::new(video.id);
    let job_id = job.id;

    if let Err(e) = state.job_repository.create(&job).await {
        tracing::error!(error = %e, "Failed to create job record");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create job: {}", e),
            }),
        )
            .into_response();
    }

    let defaults = state.settings.default_style();
    let msg = CaptionMessage {
        job_id,
        video,
        storage_path,
        style: CaptionStyle::new(
            upload.font_size.unwrap_or(defaults.font_size),
            upload.y_offset.unwrap_or(defaults.y_offset),
        ),
    };

    if let Err(e) = state.caption_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue caption job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Caption queue full or worker unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        job_id = %job_id.as_uuid(),
        video_id = %video_id.as_uuid(),
        "Caption job enqueued"
    );

    (
        StatusCode::ACCEPTED,
        Json(SubmitCaptionResponse {
            video_id: video_id.as_uuid().to_string(),
            job_id: job_id.as_uuid().to_string(),
            message: "Video captioning started".to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler<E, T, R>(
    State(state): State<AppState<E, T, R>>,
    Path(job_id): Path<String>,
) -> Response
where
    E: AudioExtractor + 'static + ?Sized,
    T: Transcriber + 'static + ?Sized,
    R: SubtitleRenderer + 'static + ?Sized,
{
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    match state
        .job_repository
        .get_by_id(JobId::from_uuid(uuid))
        .await
    {
        Ok(Some(job)) => {
            let response = JobStatusResponse {
                id: job.id.as_uuid().to_string(),
                status: job.status.as_str().to_string(),
                video_id: job.video_id.as_uuid().to_string(),
                error_message: job.error_message,
                created_at: job.created_at.to_rfc3339(),
                updated_at: job.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", job_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch job: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn job_result_handler<E, T, R>(
    State(state): State<AppState<E, T, R>>,
    Path(job_id): Path<String>,
) -> Response
where
    E: AudioExtractor + 'static + ?Sized,
    T: Transcriber + 'static + ?Sized,
    R: SubtitleRenderer + 'static + ?Sized,
{
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    let job = match state
        .job_repository
        .get_by_id(JobId::from_uuid(uuid))
        .await
    {
        Ok(Some(job)) => job,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Job not found: {}", job_id),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch job: {}", e),
                }),
            )
                .into_response();
        }
    };

    if job.status != JobStatus::Completed {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("Job not completed: {}", job.status),
            }),
        )
            .into_response();
    }

    let Some(output_path) = job.output_path else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Result not available".to_string(),
            }),
        )
            .into_response();
    };

    match state.staging_store.fetch(&output_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "video/mp4".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", output_path.filename()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(StagingStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Result not available".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read captioned output");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to read result: {}", e),
                }),
            )
                .into_response()
        }
    }
}
