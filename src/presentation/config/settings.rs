use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::CaptionStyle;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub caption: CaptionSettings,
    pub extraction: ExtractionSettings,
    pub gpu: GpuSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionSettings {
    pub fonts_dir: PathBuf,
    pub font_family: String,
    pub font_size: u32,
    pub y_offset: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub provider: ExtractorSetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorSetting {
    Ffmpeg,
    Symphonia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GpuSettings {
    pub acceleration: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub staging_dir: PathBuf,
}

impl Settings {
    /// Assemble settings from environment variables, falling back to the
    /// defaults the container image ships with.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 8080),
                max_upload_mb: env_parse("MAX_UPLOAD_MB", 512),
            },
            model: ModelSettings {
                path: PathBuf::from(env_or("VOSK_MODEL_PATH", "models/vosk-model-en-us-0.22")),
            },
            caption: CaptionSettings {
                fonts_dir: PathBuf::from(env_or("FONTS_DIR", "fonts")),
                font_family: env_or("FONT_FAMILY", "Lexend Bold"),
                font_size: env_parse("CAPTION_FONT_SIZE", CaptionStyle::DEFAULT_FONT_SIZE),
                y_offset: env_parse("CAPTION_Y_OFFSET", CaptionStyle::DEFAULT_Y_OFFSET),
            },
            extraction: ExtractionSettings {
                provider: match env_or("AUDIO_EXTRACTOR", "ffmpeg").to_lowercase().as_str() {
                    "symphonia" => ExtractorSetting::Symphonia,
                    _ => ExtractorSetting::Ffmpeg,
                },
            },
            gpu: GpuSettings {
                acceleration: env_flag("GPU_ACCELERATION"),
            },
            storage: StorageSettings {
                staging_dir: PathBuf::from(env_or("STAGING_DIR", "staging")),
            },
        }
    }

    pub fn default_style(&self) -> CaptionStyle {
        CaptionStyle::new(self.caption.font_size, self.caption.y_offset)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
