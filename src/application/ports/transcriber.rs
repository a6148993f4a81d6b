use async_trait::async_trait;

use crate::domain::WordTiming;

/// Speech-to-text over 16 kHz mono PCM, yielding per-word timings.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, pcm: &[i16]) -> Result<Vec<WordTiming>, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}
