mod settings;

pub use settings::{
    CaptionSettings, ExtractionSettings, ExtractorSetting, GpuSettings, ModelSettings,
    ServerSettings, Settings, StorageSettings,
};
