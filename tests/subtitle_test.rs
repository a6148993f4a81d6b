use vosk_captions::domain::{SubtitleTrack, WordTiming, format_srt_timestamp};

#[test]
fn given_zero_seconds_when_formatting_then_returns_zero_timestamp() {
    assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
}

#[test]
fn given_fractional_seconds_when_formatting_then_rounds_to_milliseconds() {
    assert_eq!(format_srt_timestamp(1.5), "00:00:01,500");
    assert_eq!(format_srt_timestamp(0.0014), "00:00:00,001");
}

#[test]
fn given_over_an_hour_when_formatting_then_carries_into_hours() {
    // 1h 1m 1.25s
    assert_eq!(format_srt_timestamp(3661.25), "01:01:01,250");
}

#[test]
fn given_negative_seconds_when_formatting_then_clamps_to_zero() {
    assert_eq!(format_srt_timestamp(-0.5), "00:00:00,000");
}

#[test]
fn given_words_when_building_track_then_cues_are_numbered_from_one() {
    let words = vec![
        WordTiming::new("hello", 0.0, 0.4, 1.0),
        WordTiming::new("world", 0.4, 0.9, 0.9),
    ];

    let track = SubtitleTrack::from_words(&words);

    assert_eq!(track.len(), 2);
    assert_eq!(track.cues()[0].index, 1);
    assert_eq!(track.cues()[1].index, 2);
    assert_eq!(track.cues()[1].text, "world");
}

#[test]
fn given_track_when_rendering_srt_then_emits_one_cue_per_word() {
    let words = vec![
        WordTiming::new("hello", 0.0, 0.4, 1.0),
        WordTiming::new("world", 0.4, 0.9, 0.9),
    ];

    let srt = SubtitleTrack::from_words(&words).to_srt();

    let expected = "1\n00:00:00,000 --> 00:00:00,400\nhello\n\n\
                    2\n00:00:00,400 --> 00:00:00,900\nworld\n\n";
    assert_eq!(srt, expected);
}

#[test]
fn given_no_words_when_building_track_then_track_is_empty() {
    let track = SubtitleTrack::from_words(&[]);

    assert!(track.is_empty());
    assert_eq!(track.to_srt(), "");
}
