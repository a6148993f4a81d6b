use std::fmt::Write;

use super::WordTiming;

/// An ordered set of subtitle cues, one per recognized word.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleTrack {
    cues: Vec<SubtitleCue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    pub index: usize,
    pub start: f32,
    pub end: f32,
    pub text: String,
}

impl SubtitleTrack {
    pub fn from_words(words: &[WordTiming]) -> Self {
        let cues = words
            .iter()
            .enumerate()
            .map(|(i, w)| SubtitleCue {
                index: i + 1,
                start: w.start,
                end: w.end,
                text: w.word.clone(),
            })
            .collect();
        Self { cues }
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn cues(&self) -> &[SubtitleCue] {
        &self.cues
    }

    /// Render the track in SubRip format.
    pub fn to_srt(&self) -> String {
        let mut out = String::new();
        for cue in &self.cues {
            // Write into a String cannot fail
            let _ = write!(
                out,
                "{}\n{} --> {}\n{}\n\n",
                cue.index,
                format_srt_timestamp(cue.start),
                format_srt_timestamp(cue.end),
                cue.text
            );
        }
        out
    }
}

/// Format seconds as an SRT timestamp, `HH:MM:SS,mmm`.
pub fn format_srt_timestamp(seconds: f32) -> String {
    let seconds = seconds.max(0.0) as f64;
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}
