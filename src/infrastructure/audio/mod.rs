pub mod ffmpeg_extractor;
mod extractor_factory;
mod symphonia_extractor;
mod vosk_transcriber;

pub use extractor_factory::{ExtractorFactory, ExtractorProvider};
pub use ffmpeg_extractor::{FfmpegAudioExtractor, check_ffmpeg_binary};
pub use symphonia_extractor::SymphoniaAudioExtractor;
pub use vosk_transcriber::VoskTranscriber;
