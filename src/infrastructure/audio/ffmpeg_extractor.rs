use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractor, AudioExtractorError, TARGET_SAMPLE_RATE};

/// Audio extraction via the ffmpeg binary. Decodes whatever container
/// ffmpeg understands (including AVI, which the in-process decoder does
/// not) and emits raw 16 kHz mono s16le samples on stdout.
pub struct FfmpegAudioExtractor;

/// Startup check that the ffmpeg binary is reachable.
pub fn check_ffmpeg_binary() -> Result<(), AudioExtractorError> {
    let output = std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()?;
    if !output.status.success() {
        return Err(AudioExtractorError::CommandFailed(
            "ffmpeg -version exited with failure".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract_pcm(&self, video_path: &Path) -> Result<Vec<i16>, AudioExtractorError> {
        let output = Command::new("ffmpeg")
            .arg("-hide_banner")
            .arg("-y")
            .arg("-i")
            .arg(video_path)
            .args([
                "-vn",
                "-acodec",
                "pcm_s16le",
                "-ac",
                "1",
                "-ar",
                &TARGET_SAMPLE_RATE.to_string(),
                "-f",
                "s16le",
                "-",
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(stderr = %stderr, "ffmpeg audio extraction failed");
            return Err(AudioExtractorError::CommandFailed(last_stderr_line(
                &stderr,
            )));
        }

        if output.stdout.is_empty() {
            return Err(AudioExtractorError::NoAudioTrack(
                video_path.display().to_string(),
            ));
        }

        let samples = output
            .stdout
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect::<Vec<_>>();

        tracing::debug!(
            samples = samples.len(),
            duration_secs = samples.len() as f32 / TARGET_SAMPLE_RATE as f32,
            "Audio extracted to 16kHz mono PCM"
        );

        Ok(samples)
    }
}

fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("ffmpeg failed with no diagnostic output")
        .to_string()
}
