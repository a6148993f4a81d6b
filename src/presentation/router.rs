use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, SubtitleRenderer, Transcriber};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    caption_handler, health_handler, job_result_handler, job_status_handler, status_handler,
    submit_caption_job_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, T, R>(state: AppState<E, T, R>) -> Router
where
    E: AudioExtractor + 'static + ?Sized,
    T: Transcriber + 'static + ?Sized,
    R: SubtitleRenderer + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload = state.settings.server.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler::<E, T, R>))
        .route("/caption", post(caption_handler::<E, T, R>))
        .route("/caption/jobs", post(submit_caption_job_handler::<E, T, R>))
        .route("/caption/jobs/{job_id}", get(job_status_handler::<E, T, R>))
        .route(
            "/caption/jobs/{job_id}/result",
            get(job_result_handler::<E, T, R>),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
