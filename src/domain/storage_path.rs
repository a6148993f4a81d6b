use std::fmt;

use super::VideoId;

/// Location of an object in the staging store, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Path for a freshly uploaded video.
    pub fn for_upload(video_id: &VideoId, filename: &str) -> Self {
        Self(format!("uploads/{}/{}", video_id.as_uuid(), filename))
    }

    /// Path for the captioned output of a video.
    pub fn for_output(video_id: &VideoId, filename: &str) -> Self {
        Self(format!("outputs/{}/captioned_{}", video_id.as_uuid(), filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment, e.g. the attachment filename of an output.
    pub fn filename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
