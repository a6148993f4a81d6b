mod caption;
mod health;
mod jobs;
mod status;
mod upload;

pub use caption::caption_handler;
pub use health::health_handler;
pub use jobs::{job_result_handler, job_status_handler, submit_caption_job_handler};
pub use status::{SERVICE_NAME, status_handler};
