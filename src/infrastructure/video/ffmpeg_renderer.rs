use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{RendererError, SubtitleRenderer};
use crate::domain::{CaptionStyle, SubtitleTrack};

/// Burns subtitles into a video with ffmpeg's libass `subtitles` filter.
/// Audio is copied through untouched; video is re-encoded, with Intel QSV
/// when hardware encoding was enabled at startup.
pub struct FfmpegSubtitleRenderer {
    fonts_dir: PathBuf,
    font_family: String,
    use_qsv: bool,
}

impl FfmpegSubtitleRenderer {
    pub fn new(fonts_dir: PathBuf, font_family: String, use_qsv: bool) -> Self {
        Self {
            fonts_dir,
            font_family,
            use_qsv,
        }
    }

    fn subtitle_filter(&self, srt_path: &Path, style: CaptionStyle) -> String {
        format!(
            "subtitles={}:fontsdir={}:force_style='FontName={},FontSize={},MarginV={}'",
            escape_filter_path(srt_path),
            escape_filter_path(&self.fonts_dir),
            self.font_family,
            style.font_size,
            style.y_offset
        )
    }
}

#[async_trait]
impl SubtitleRenderer for FfmpegSubtitleRenderer {
    async fn burn(
        &self,
        video_path: &Path,
        track: &SubtitleTrack,
        style: CaptionStyle,
        output_path: &Path,
    ) -> Result<(), RendererError> {
        let srt_file = tempfile::Builder::new().suffix(".srt").tempfile()?;
        tokio::fs::write(srt_file.path(), track.to_srt()).await?;

        let filter = self.subtitle_filter(srt_file.path(), style);

        let mut command = Command::new("ffmpeg");
        command
            .arg("-hide_banner")
            .arg("-y")
            .arg("-i")
            .arg(video_path)
            .arg("-vf")
            .arg(&filter);
        if self.use_qsv {
            command.args(["-c:v", "h264_qsv"]);
        }
        command.args(["-c:a", "copy"]).arg(output_path);

        tracing::debug!(filter = %filter, qsv = self.use_qsv, "Rendering subtitles");

        let output = command
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(stderr = %stderr, "ffmpeg subtitle rendering failed");
            return Err(RendererError::EncodingFailed(last_stderr_line(&stderr)));
        }

        // ffmpeg can exit 0 and still write nothing usable
        let len = tokio::fs::metadata(output_path).await.map(|m| m.len());
        match len {
            Ok(n) if n > 0 => Ok(()),
            _ => Err(RendererError::EmptyOutput),
        }
    }
}

/// Escape a path for use inside an ffmpeg filter argument, where `\` and
/// `:` are meta characters.
fn escape_filter_path(path: &Path) -> String {
    path.display()
        .to_string()
        .replace('\\', "\\\\")
        .replace(':', "\\:")
}

fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("ffmpeg failed with no diagnostic output")
        .to_string()
}
