use async_trait::async_trait;

use crate::domain::{CaptionJob, JobId, JobStatus, StoragePath};

use super::RepositoryError;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &CaptionJob) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<CaptionJob>, RepositoryError>;

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError>;

    /// Record where the captioned output of a completed job was stored.
    async fn set_output(&self, id: JobId, path: &StoragePath) -> Result<(), RepositoryError>;
}
