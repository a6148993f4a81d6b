mod caption_style;
mod job;
mod job_status;
mod storage_path;
mod subtitle;
mod video;
mod word_timing;

pub use caption_style::CaptionStyle;
pub use job::{CaptionJob, JobId};
pub use job_status::JobStatus;
pub use storage_path::StoragePath;
pub use subtitle::{SubtitleCue, SubtitleTrack, format_srt_timestamp};
pub use video::{Video, VideoFormat, VideoId};
pub use word_timing::WordTiming;
