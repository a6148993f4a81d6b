mod caption_service;
mod caption_worker;

pub use caption_service::{CaptionError, CaptionService};
pub use caption_worker::{CaptionMessage, CaptionWorker, CaptionWorkerError};
