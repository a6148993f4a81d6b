use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{JobStatus, StoragePath, VideoId};

/// One captioning run tracked from upload to delivery.
#[derive(Debug, Clone)]
pub struct CaptionJob {
    pub id: JobId,
    pub video_id: VideoId,
    pub status: JobStatus,
    pub error_message: Option<String>,
    /// Where the captioned video landed in the staging store, once the job
    /// completed.
    pub output_path: Option<StoragePath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptionJob {
    pub fn new(video_id: VideoId) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            video_id,
            status: JobStatus::Queued,
            error_message: None,
            output_path: None,
            created_at: now,
            updated_at: now,
        }
    }
}
