use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::application::ports::{
    AudioExtractor, AudioExtractorError, RendererError, SubtitleRenderer, Transcriber,
    TranscriberError,
};
use crate::domain::{CaptionStyle, SubtitleTrack, VideoFormat, WordTiming};

/// Runs the caption pipeline: audio extraction, transcription, subtitle
/// burn-in. One stage at a time; callers serialize runs themselves.
pub struct CaptionService<E: ?Sized, T: ?Sized, R: ?Sized> {
    extractor: Arc<E>,
    transcriber: Arc<T>,
    renderer: Arc<R>,
}

impl<E: ?Sized, T: ?Sized, R: ?Sized> CaptionService<E, T, R>
where
    E: AudioExtractor + 'static,
    T: Transcriber + 'static,
    R: SubtitleRenderer + 'static,
{
    pub fn new(extractor: Arc<E>, transcriber: Arc<T>, renderer: Arc<R>) -> Self {
        Self {
            extractor,
            transcriber,
            renderer,
        }
    }

    /// Write uploaded bytes to a temp file with the right extension so
    /// ffmpeg and the output muxer can identify the container. The file is
    /// removed on drop.
    pub async fn stage_to_temp(
        &self,
        data: &[u8],
        format: VideoFormat,
    ) -> Result<NamedTempFile, CaptionError> {
        let temp = tempfile::Builder::new()
            .suffix(&format!(".{}", format.as_extension()))
            .tempfile()?;
        tokio::fs::write(temp.path(), data).await?;
        Ok(temp)
    }

    pub fn new_output_temp(&self) -> Result<NamedTempFile, CaptionError> {
        Ok(tempfile::Builder::new().suffix(".mp4").tempfile()?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn extract(&self, video_path: &Path) -> Result<Vec<i16>, CaptionError> {
        let pcm = self.extractor.extract_pcm(video_path).await?;
        tracing::debug!(samples = pcm.len(), "Audio track extracted");
        Ok(pcm)
    }

    #[tracing::instrument(skip(self, pcm))]
    pub async fn transcribe(&self, pcm: &[i16]) -> Result<Vec<WordTiming>, CaptionError> {
        let words = self.transcriber.transcribe(pcm).await?;
        if words.is_empty() {
            return Err(CaptionError::EmptyTranscript);
        }
        tracing::debug!(words = words.len(), "Transcription finished");
        Ok(words)
    }

    #[tracing::instrument(skip(self, words))]
    pub async fn render(
        &self,
        video_path: &Path,
        words: &[WordTiming],
        style: CaptionStyle,
        output_path: &Path,
    ) -> Result<(), CaptionError> {
        let track = SubtitleTrack::from_words(words);
        self.renderer
            .burn(video_path, &track, style, output_path)
            .await?;
        tracing::debug!(cues = track.len(), "Subtitles burned into video");
        Ok(())
    }

    /// Full pipeline for the synchronous endpoint: returns the captioned
    /// video bytes.
    pub async fn caption_video(
        &self,
        data: &[u8],
        format: VideoFormat,
        style: CaptionStyle,
    ) -> Result<Vec<u8>, CaptionError> {
        let input = self.stage_to_temp(data, format).await?;
        let output = self.new_output_temp()?;

        let pcm = self.extract(input.path()).await?;
        let words = self.transcribe(&pcm).await?;
        self.render(input.path(), &words, style, output.path())
            .await?;

        let bytes = tokio::fs::read(output.path()).await?;
        Ok(bytes)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("audio extraction: {0}")]
    Extraction(#[from] AudioExtractorError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriberError),
    #[error("no words were transcribed")]
    EmptyTranscript,
    #[error("subtitle rendering: {0}")]
    Rendering(#[from] RendererError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
