use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::{Semaphore, mpsc};

use crate::application::ports::{
    AudioExtractor, JobRepository, StagingStore, SubtitleRenderer, Transcriber,
};
use crate::domain::{CaptionStyle, JobId, JobStatus, StoragePath, Video};

use super::caption_service::{CaptionError, CaptionService};

pub struct CaptionMessage {
    pub job_id: JobId,
    pub video: Video,
    pub storage_path: StoragePath,
    pub style: CaptionStyle,
}

/// Dedicated task that drains queued caption jobs one at a time. Holds the
/// shared busy permit while a job runs so the synchronous endpoint and
/// `/status` see the pipeline as occupied.
pub struct CaptionWorker<E: ?Sized, T: ?Sized, R: ?Sized> {
    receiver: mpsc::Receiver<CaptionMessage>,
    service: Arc<CaptionService<E, T, R>>,
    job_repository: Arc<dyn JobRepository>,
    staging_store: Arc<dyn StagingStore>,
    busy: Arc<Semaphore>,
}

impl<E: ?Sized, T: ?Sized, R: ?Sized> CaptionWorker<E, T, R>
where
    E: AudioExtractor + 'static,
    T: Transcriber + 'static,
    R: SubtitleRenderer + 'static,
{
    pub fn new(
        receiver: mpsc::Receiver<CaptionMessage>,
        service: Arc<CaptionService<E, T, R>>,
        job_repository: Arc<dyn JobRepository>,
        staging_store: Arc<dyn StagingStore>,
        busy: Arc<Semaphore>,
    ) -> Self {
        Self {
            receiver,
            service,
            job_repository,
            staging_store,
            busy,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Caption worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "caption_job",
                job_id = %msg.job_id.as_uuid(),
                video_id = %msg.video.id.as_uuid(),
                filename = %msg.video.filename,
            );
            let _guard = span.enter();

            if let Err(e) = self.process_job(msg).await {
                tracing::error!(error = %e, "Caption job failed");
            }
        }
        tracing::info!("Caption worker stopped: channel closed");
    }

    async fn process_job(&self, msg: CaptionMessage) -> Result<(), CaptionWorkerError> {
        let permit = match self.busy.clone().acquire_owned().await {
            Ok(p) => p,
            Err(_) => return Ok(()), // semaphore closed, shutting down
        };

        let job_id = msg.job_id;
        let result = self.process_pipeline(&msg).await;
        drop(permit);

        // The staged upload is consumed either way.
        if let Err(e) = self.staging_store.delete(&msg.storage_path).await {
            tracing::warn!(
                error = %e,
                path = %msg.storage_path,
                "Failed to delete staged upload"
            );
        }

        match &result {
            Ok(output_path) => {
                self.job_repository
                    .set_output(job_id, output_path)
                    .await
                    .map_err(CaptionWorkerError::Repository)?;
                self.update_status(job_id, JobStatus::Completed, None)
                    .await?;
                tracing::info!(output = %output_path, "Caption job completed");
            }
            Err(e) => {
                let error_msg = e.to_string();
                self.update_status(job_id, JobStatus::Failed, Some(&error_msg))
                    .await?;
            }
        }

        result.map(|_| ())
    }

    async fn process_pipeline(
        &self,
        msg: &CaptionMessage,
    ) -> Result<StoragePath, CaptionWorkerError> {
        let job_id = msg.job_id;

        self.update_status(job_id, JobStatus::Processing, None)
            .await?;

        let data = self
            .staging_store
            .fetch(&msg.storage_path)
            .await
            .map_err(CaptionWorkerError::Staging)?;

        let input = self
            .service
            .stage_to_temp(&data, msg.video.format)
            .await
            .map_err(CaptionWorkerError::Pipeline)?;
        let output = self
            .service
            .new_output_temp()
            .map_err(CaptionWorkerError::Pipeline)?;

        self.update_status(job_id, JobStatus::Extracting, None)
            .await?;
        let pcm = self
            .service
            .extract(input.path())
            .await
            .map_err(CaptionWorkerError::Pipeline)?;

        self.update_status(job_id, JobStatus::Transcribing, None)
            .await?;
        let words = self
            .service
            .transcribe(&pcm)
            .await
            .map_err(CaptionWorkerError::Pipeline)?;

        self.update_status(job_id, JobStatus::Rendering, None)
            .await?;
        self.service
            .render(input.path(), &words, msg.style, output.path())
            .await
            .map_err(CaptionWorkerError::Pipeline)?;

        let bytes = tokio::fs::read(output.path())
            .await
            .map_err(|e| CaptionWorkerError::Pipeline(CaptionError::Io(e)))?;

        let output_path = StoragePath::for_output(&msg.video.id, &msg.video.filename);
        self.staging_store
            .store(&output_path, Bytes::from(bytes))
            .await
            .map_err(CaptionWorkerError::Staging)?;

        Ok(output_path)
    }

    async fn update_status(
        &self,
        job_id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), CaptionWorkerError> {
        tracing::debug!(status = %status, "Job status transition");
        self.job_repository
            .update_status(job_id, status, error_message)
            .await
            .map_err(CaptionWorkerError::Repository)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionWorkerError {
    #[error("pipeline: {0}")]
    Pipeline(CaptionError),
    #[error("staging store: {0}")]
    Staging(crate::application::ports::StagingStoreError),
    #[error("repository: {0}")]
    Repository(crate::application::ports::RepositoryError),
}
