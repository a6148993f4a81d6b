use std::str::FromStr;

use vosk_captions::domain::{JobStatus, StoragePath, VideoFormat, VideoId, WordTiming};

#[test]
fn given_known_extensions_when_parsing_format_then_matches() {
    assert_eq!(VideoFormat::from_filename("a.mp4"), Some(VideoFormat::Mp4));
    assert_eq!(VideoFormat::from_filename("b.AVI"), Some(VideoFormat::Avi));
    assert_eq!(
        VideoFormat::from_filename("holiday.clip.mov"),
        Some(VideoFormat::Mov)
    );
}

#[test]
fn given_unknown_or_missing_extension_when_parsing_format_then_none() {
    assert_eq!(VideoFormat::from_filename("notes.txt"), None);
    assert_eq!(VideoFormat::from_filename("mp4"), None);
    assert_eq!(VideoFormat::from_filename(""), None);
}

#[test]
fn given_video_id_when_building_paths_then_upload_and_output_differ() {
    let id = VideoId::new();

    let upload = StoragePath::for_upload(&id, "clip.mp4");
    let output = StoragePath::for_output(&id, "clip.mp4");

    assert_eq!(
        upload.as_str(),
        format!("uploads/{}/clip.mp4", id.as_uuid())
    );
    assert_eq!(
        output.as_str(),
        format!("outputs/{}/captioned_clip.mp4", id.as_uuid())
    );
    assert_eq!(output.filename(), "captioned_clip.mp4");
}

#[test]
fn given_status_strings_when_round_tripping_then_identical() {
    for status in [
        JobStatus::Queued,
        JobStatus::Processing,
        JobStatus::Extracting,
        JobStatus::Transcribing,
        JobStatus::Rendering,
        JobStatus::Completed,
        JobStatus::Failed,
    ] {
        assert_eq!(JobStatus::from_str(status.as_str()), Ok(status));
    }
    assert!(JobStatus::from_str("RUNNING").is_err());
}

#[test]
fn given_terminal_statuses_when_checking_then_only_completed_and_failed() {
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
    assert!(!JobStatus::Transcribing.is_terminal());
    assert!(!JobStatus::Queued.is_terminal());
}

#[test]
fn given_reversed_timing_when_computing_duration_then_clamps_to_zero() {
    let word = WordTiming::new("oops", 2.0, 1.5, 0.4);
    assert_eq!(word.duration(), 0.0);

    let word = WordTiming::new("fine", 1.0, 1.75, 0.4);
    assert!((word.duration() - 0.75).abs() < f32::EPSILON);
}
