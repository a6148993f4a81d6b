use std::sync::Arc;

use crate::application::ports::AudioExtractor;

use super::ffmpeg_extractor::FfmpegAudioExtractor;
use super::symphonia_extractor::SymphoniaAudioExtractor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtractorProvider {
    Ffmpeg,
    Symphonia,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(provider: ExtractorProvider) -> Arc<dyn AudioExtractor> {
        match provider {
            ExtractorProvider::Ffmpeg => Arc::new(FfmpegAudioExtractor),
            ExtractorProvider::Symphonia => Arc::new(SymphoniaAudioExtractor),
        }
    }
}
