pub mod audio;
pub mod gpu;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod video;
