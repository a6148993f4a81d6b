use std::path::Path;

use async_trait::async_trait;
use vosk::{CompleteResult, DecodingState, LogLevel, Model, Recognizer};

use crate::application::ports::{TARGET_SAMPLE_RATE, Transcriber, TranscriberError};
use crate::domain::WordTiming;

/// Samples fed to the recognizer per call.
const CHUNK_SAMPLES: usize = 4000;

/// Offline speech recognition backed by a Kaldi/Vosk model directory.
/// The model is loaded once; a fresh recognizer is created per request.
pub struct VoskTranscriber {
    model: Model,
}

impl VoskTranscriber {
    pub fn new(model_path: &Path) -> Result<Self, TranscriberError> {
        tracing::info!(model = %model_path.display(), "Loading Vosk model");

        if !model_path.is_dir() {
            return Err(TranscriberError::ModelLoadFailed(format!(
                "model directory not found: {}",
                model_path.display()
            )));
        }

        vosk::set_log_level(LogLevel::Error);

        let model = Model::new(model_path.display().to_string()).ok_or_else(|| {
            TranscriberError::ModelLoadFailed(format!(
                "failed to load model from {}",
                model_path.display()
            ))
        })?;

        tracing::info!("Vosk model loaded");

        Ok(Self { model })
    }

    fn collect_words(words: &mut Vec<WordTiming>, result: CompleteResult<'_>) {
        if let CompleteResult::Single(single) = result {
            for w in single.result {
                words.push(WordTiming::new(w.word, w.start, w.end, w.conf));
            }
        }
    }
}

#[async_trait]
impl Transcriber for VoskTranscriber {
    async fn transcribe(&self, pcm: &[i16]) -> Result<Vec<WordTiming>, TranscriberError> {
        let mut recognizer = Recognizer::new(&self.model, TARGET_SAMPLE_RATE as f32)
            .ok_or_else(|| {
                TranscriberError::RecognitionFailed("failed to create recognizer".to_string())
            })?;
        recognizer.set_words(true);

        let mut words = Vec::new();

        for chunk in pcm.chunks(CHUNK_SAMPLES) {
            match recognizer.accept_waveform(chunk) {
                Ok(DecodingState::Finalized) => {
                    Self::collect_words(&mut words, recognizer.result());
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(TranscriberError::RecognitionFailed(format!(
                        "accept_waveform: {}",
                        e
                    )));
                }
            }
        }

        Self::collect_words(&mut words, recognizer.final_result());

        tracing::debug!(words = words.len(), "Recognition pass finished");

        Ok(words)
    }
}
