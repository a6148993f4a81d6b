use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};

use crate::application::ports::{
    AudioExtractor, JobRepository, StagingStore, SubtitleRenderer, Transcriber,
};
use crate::application::services::{CaptionMessage, CaptionService};
use crate::presentation::config::Settings;

pub struct AppState<E: ?Sized, T: ?Sized, R: ?Sized>
where
    E: AudioExtractor,
    T: Transcriber,
    R: SubtitleRenderer,
{
    pub caption_service: Arc<CaptionService<E, T, R>>,
    pub job_repository: Arc<dyn JobRepository>,
    pub staging_store: Arc<dyn StagingStore>,
    pub caption_sender: mpsc::Sender<CaptionMessage>,
    /// One permit; held for the duration of a pipeline run by either the
    /// synchronous endpoint or the worker.
    pub busy: Arc<Semaphore>,
    pub settings: Settings,
}

impl<E: ?Sized, T: ?Sized, R: ?Sized> Clone for AppState<E, T, R>
where
    E: AudioExtractor,
    T: Transcriber,
    R: SubtitleRenderer,
{
    fn clone(&self) -> Self {
        Self {
            caption_service: Arc::clone(&self.caption_service),
            job_repository: Arc::clone(&self.job_repository),
            staging_store: Arc::clone(&self.staging_store),
            caption_sender: self.caption_sender.clone(),
            busy: Arc::clone(&self.busy),
            settings: self.settings.clone(),
        }
    }
}
