use axum::Json;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::domain::VideoFormat;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The parsed multipart form shared by the synchronous and job-based
/// caption endpoints.
pub struct CaptionUpload {
    pub filename: String,
    pub format: VideoFormat,
    pub data: Bytes,
    pub font_size: Option<u32>,
    pub y_offset: Option<u32>,
}

pub enum UploadError {
    NoFile,
    UnsupportedFormat,
    Malformed(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let error = match self {
            UploadError::NoFile => "No file uploaded".to_string(),
            UploadError::UnsupportedFormat => "Unsupported file format".to_string(),
            UploadError::Malformed(e) => format!("Failed to read multipart: {}", e),
        };
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

pub async fn read_caption_upload(
    multipart: &mut Multipart,
) -> Result<CaptionUpload, UploadError> {
    let mut video: Option<(String, Bytes)> = None;
    let mut font_size = None;
    let mut y_offset = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => return Err(UploadError::Malformed(e.to_string())),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "video" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?;
                video = Some((filename, data));
            }
            "font_size" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?;
                font_size = text.trim().parse().ok();
            }
            "y_offset" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?;
                y_offset = text.trim().parse().ok();
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
                let _ = field.bytes().await;
            }
        }
    }

    let (filename, data) = video.ok_or(UploadError::NoFile)?;

    // Clients may send a full path; keep only the final component.
    let filename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("unknown")
        .to_string();

    let format = VideoFormat::from_filename(&filename).ok_or(UploadError::UnsupportedFormat)?;

    Ok(CaptionUpload {
        filename,
        format,
        data,
        font_size,
        y_offset,
    })
}
