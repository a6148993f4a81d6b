use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{CaptionJob, JobId, JobStatus, StoragePath};

/// Job bookkeeping held in process memory. Captioning jobs are short-lived
/// and the service is single-instance, so nothing needs to survive a
/// restart.
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<JobId, CaptionJob>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &CaptionJob) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<CaptionJob>, RepositoryError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        job.status = status;
        job.error_message = error_message.map(String::from);
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn set_output(&self, id: JobId, path: &StoragePath) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        job.output_path = Some(path.clone());
        job.updated_at = Utc::now();
        Ok(())
    }
}
