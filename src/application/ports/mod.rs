mod audio_extractor;
mod job_repository;
mod repository_error;
mod staging_store;
mod subtitle_renderer;
mod transcriber;

pub use audio_extractor::{AudioExtractor, AudioExtractorError, TARGET_SAMPLE_RATE};
pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
pub use staging_store::{StagingStore, StagingStoreError};
pub use subtitle_renderer::{RendererError, SubtitleRenderer};
pub use transcriber::{Transcriber, TranscriberError};
