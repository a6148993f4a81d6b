mod ffmpeg_renderer;

pub use ffmpeg_renderer::FfmpegSubtitleRenderer;
