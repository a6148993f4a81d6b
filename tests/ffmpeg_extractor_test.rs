use std::io::Write;

use vosk_captions::application::ports::{AudioExtractor, AudioExtractorError};
use vosk_captions::infrastructure::audio::{FfmpegAudioExtractor, check_ffmpeg_binary};

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn write_temp(suffix: &str, data: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn given_wav_file_when_extracting_then_returns_pcm_samples() {
    if !ffmpeg_available() {
        return;
    }

    let wav = build_wav(16_000, &vec![0i16; 1600]);
    let file = write_temp(".wav", &wav);
    let extractor = FfmpegAudioExtractor;

    let result = extractor.extract_pcm(file.path()).await;

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[tokio::test]
async fn given_wav_at_44100hz_when_extracting_then_resamples_to_16khz() {
    if !ffmpeg_available() {
        return;
    }

    let wav = build_wav(44_100, &vec![0i16; 4410]);
    let file = write_temp(".wav", &wav);
    let extractor = FfmpegAudioExtractor;

    let result = extractor.extract_pcm(file.path()).await;

    assert!(result.is_ok());
    let pcm = result.unwrap();
    assert!(!pcm.is_empty());
    // 4410 samples @ 44100Hz is 0.1s, so roughly 1600 samples at 16kHz
    assert!(
        pcm.len() < 4410,
        "output should be fewer samples than 44.1kHz input"
    );
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_returns_command_error() {
    if !ffmpeg_available() {
        return;
    }

    let file = write_temp(".mp4", &[0xFFu8; 128]);
    let extractor = FfmpegAudioExtractor;

    let result = extractor.extract_pcm(file.path()).await;

    assert!(matches!(
        result,
        Err(AudioExtractorError::CommandFailed(_))
    ));
}

#[test]
fn given_ffmpeg_in_path_when_checking_binary_then_returns_ok() {
    if !ffmpeg_available() {
        return;
    }

    assert!(check_ffmpeg_binary().is_ok());
}
