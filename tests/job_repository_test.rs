use vosk_captions::application::ports::{JobRepository, RepositoryError};
use vosk_captions::domain::{CaptionJob, JobId, JobStatus, StoragePath, VideoId};
use vosk_captions::infrastructure::persistence::InMemoryJobRepository;

#[tokio::test]
async fn given_created_job_when_fetching_then_returns_it() {
    let repo = InMemoryJobRepository::new();
    let job = CaptionJob::new(VideoId::new());

    repo.create(&job).await.unwrap();
    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, job.id);
    assert_eq!(fetched.video_id, job.video_id);
    assert_eq!(fetched.status, JobStatus::Queued);
    assert!(fetched.output_path.is_none());
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let repo = InMemoryJobRepository::new();

    let fetched = repo.get_by_id(JobId::new()).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_status_update_when_fetching_then_reflects_new_status() {
    let repo = InMemoryJobRepository::new();
    let job = CaptionJob::new(VideoId::new());
    repo.create(&job).await.unwrap();

    repo.update_status(job.id, JobStatus::Transcribing, None)
        .await
        .unwrap();

    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Transcribing);
    assert!(fetched.updated_at >= job.updated_at);
}

#[tokio::test]
async fn given_failure_when_updating_then_error_message_recorded() {
    let repo = InMemoryJobRepository::new();
    let job = CaptionJob::new(VideoId::new());
    repo.create(&job).await.unwrap();

    repo.update_status(job.id, JobStatus::Failed, Some("no words were transcribed"))
        .await
        .unwrap();

    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Failed);
    assert_eq!(
        fetched.error_message.as_deref(),
        Some("no words were transcribed")
    );
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_returns_not_found() {
    let repo = InMemoryJobRepository::new();

    let result = repo
        .update_status(JobId::new(), JobStatus::Completed, None)
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_completed_job_when_setting_output_then_path_recorded() {
    let repo = InMemoryJobRepository::new();
    let job = CaptionJob::new(VideoId::new());
    repo.create(&job).await.unwrap();

    let output = StoragePath::for_output(&job.video_id, "clip.mp4");
    repo.set_output(job.id, &output).await.unwrap();

    let fetched = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(fetched.output_path, Some(output));
}
