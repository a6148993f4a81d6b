use std::path::Path;

use async_trait::async_trait;

/// Sample rate the recognizer expects.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Pulls the audio track out of a video file as 16 kHz mono signed 16-bit
/// PCM.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract_pcm(&self, video_path: &Path) -> Result<Vec<i16>, AudioExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractorError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("no audio track found: {0}")]
    NoAudioTrack(String),
    #[error("extractor command failed: {0}")]
    CommandFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
