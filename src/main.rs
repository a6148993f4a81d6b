use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::{Semaphore, mpsc};

use vosk_captions::application::services::{CaptionService, CaptionWorker};
use vosk_captions::infrastructure::audio::{
    ExtractorFactory, ExtractorProvider, VoskTranscriber, check_ffmpeg_binary,
};
use vosk_captions::infrastructure::gpu::{GpuSupport, initialize_intel_gpu};
use vosk_captions::infrastructure::observability::{TracingConfig, init_tracing};
use vosk_captions::infrastructure::persistence::InMemoryJobRepository;
use vosk_captions::infrastructure::storage::LocalStagingStore;
use vosk_captions::infrastructure::video::FfmpegSubtitleRenderer;
use vosk_captions::presentation::{AppState, ExtractorSetting, Settings, create_router};

const CAPTION_QUEUE_DEPTH: usize = 32;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let gpu = if settings.gpu.acceleration {
        initialize_intel_gpu().await
    } else {
        GpuSupport::default()
    };

    if let Err(e) = check_ffmpeg_binary() {
        tracing::warn!(
            error = %e,
            "ffmpeg not found; captioning requests will fail until it is installed"
        );
    }

    let provider = match settings.extraction.provider {
        ExtractorSetting::Ffmpeg => ExtractorProvider::Ffmpeg,
        ExtractorSetting::Symphonia => ExtractorProvider::Symphonia,
    };
    let extractor = ExtractorFactory::create(provider);

    let transcriber = Arc::new(VoskTranscriber::new(&settings.model.path)?);

    let renderer = Arc::new(FfmpegSubtitleRenderer::new(
        settings.caption.fonts_dir.clone(),
        settings.caption.font_family.clone(),
        settings.gpu.acceleration && gpu.available,
    ));

    let caption_service = Arc::new(CaptionService::new(extractor, transcriber, renderer));

    let job_repository = Arc::new(InMemoryJobRepository::new());
    let staging_store = Arc::new(LocalStagingStore::new(settings.storage.staging_dir.clone())?);
    let busy = Arc::new(Semaphore::new(1));

    let (caption_sender, caption_receiver) = mpsc::channel(CAPTION_QUEUE_DEPTH);

    let worker = CaptionWorker::new(
        caption_receiver,
        Arc::clone(&caption_service),
        job_repository.clone(),
        staging_store.clone(),
        Arc::clone(&busy),
    );
    tokio::spawn(worker.run());

    let state = AppState {
        caption_service,
        job_repository,
        staging_store,
        caption_sender,
        busy,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
