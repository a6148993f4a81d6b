use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// DRI render node the container passes through for Intel Arc access.
const RENDER_DEVICE: &str = "/dev/dri/renderD128";

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment the Intel media stack and ffmpeg's VA-API/QSV plugins read.
const INTEL_ENV_VARS: &[(&str, &str)] = &[
    ("LIBVA_DRIVER_NAME", "iHD"),
    ("LIBVA_DRIVERS_PATH", "/usr/lib/x86_64-linux-gnu/dri"),
    ("INTEL_GPU_MIN_FREQ", "0"),
    ("INTEL_GPU_MAX_FREQ", "2100"),
    ("INTEL_MEDIA_RUNTIME", "/usr/lib/x86_64-linux-gnu/dri"),
    ("MFX_IMPL_BASEDIR", "/usr/lib/x86_64-linux-gnu"),
];

/// What the startup probe found out about hardware video encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct GpuSupport {
    pub available: bool,
    pub vaapi_h264: bool,
    pub vaapi_hevc: bool,
    pub vaapi_av1: bool,
}

/// Prepare Intel Arc hardware acceleration for ffmpeg: export the driver
/// environment, verify the render device, and probe VA-API capabilities.
/// Never fails the server; an absent or unprobeable GPU degrades to
/// software encoding.
pub async fn initialize_intel_gpu() -> GpuSupport {
    tracing::info!("Initializing Intel Arc GPU support for ffmpeg");

    for &(key, value) in INTEL_ENV_VARS {
        std::env::set_var(key, value);
        tracing::debug!(key, value, "Set GPU environment variable");
    }

    if !Path::new(RENDER_DEVICE).exists() {
        tracing::warn!(device = RENDER_DEVICE, "No Intel GPU render device found");
        return GpuSupport::default();
    }

    let mut support = GpuSupport {
        available: true,
        ..Default::default()
    };

    match probe_vainfo().await {
        Ok(stdout) => {
            support.vaapi_h264 = stdout.contains("H264");
            support.vaapi_hevc = stdout.contains("HEVC");
            support.vaapi_av1 = stdout.contains("AV1");
            tracing::info!(
                h264 = support.vaapi_h264,
                hevc = support.vaapi_hevc,
                av1 = support.vaapi_av1,
                "VA-API hardware acceleration ready"
            );
        }
        Err(e) => {
            // QSV can still work when vainfo is missing or unhappy
            tracing::warn!(error = %e, "VA-API probe failed, continuing with QSV untested");
        }
    }

    log_ffmpeg_hw_support().await;

    support
}

async fn probe_vainfo() -> Result<String, String> {
    let probe = Command::new("vainfo")
        .args(["--display", "drm", "--device", RENDER_DEVICE])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output();

    let output = tokio::time::timeout(PROBE_TIMEOUT, probe)
        .await
        .map_err(|_| "vainfo timed out".to_string())?
        .map_err(|e| format!("vainfo not runnable: {}", e))?;

    if !output.status.success() {
        return Err("vainfo exited with failure".to_string());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Log the Intel-capable encoders and decoders this ffmpeg build carries.
async fn log_ffmpeg_hw_support() {
    for flag in ["-encoders", "-decoders"] {
        let listing = Command::new("ffmpeg")
            .arg("-hide_banner")
            .arg(flag)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output();

        let output = match tokio::time::timeout(PROBE_TIMEOUT, listing).await {
            Ok(Ok(o)) if o.status.success() => o,
            Ok(Ok(_)) | Ok(Err(_)) => {
                tracing::warn!(flag, "ffmpeg hardware capability listing failed");
                continue;
            }
            Err(_) => {
                tracing::warn!(flag, "ffmpeg hardware capability listing timed out");
                continue;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            let lower = line.to_lowercase();
            if lower.contains("vaapi") || lower.contains("qsv") || lower.contains("intel") {
                tracing::info!(flag, codec = line.trim(), "Intel hardware codec");
            }
        }
    }
}
