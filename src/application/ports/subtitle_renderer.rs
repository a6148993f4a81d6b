use std::path::Path;

use async_trait::async_trait;

use crate::domain::{CaptionStyle, SubtitleTrack};

/// Burns a subtitle track into a video, writing the result to
/// `output_path` as MP4.
#[async_trait]
pub trait SubtitleRenderer: Send + Sync {
    async fn burn(
        &self,
        video_path: &Path,
        track: &SubtitleTrack,
        style: CaptionStyle,
        output_path: &Path,
    ) -> Result<(), RendererError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
    #[error("renderer produced no output")]
    EmptyOutput,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
