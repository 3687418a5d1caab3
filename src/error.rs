//! Error types shared across the crate.

/// Errors produced by tokenization, resolution, and playback.
#[derive(thiserror::Error, Debug)]
pub enum PhonicsError {
    #[error("No audio resource is defined for unit '{0}'")]
    NoAudioAvailable(String),
    #[error("Every audio source failed for unit '{0}'")]
    AllSourcesFailed(String),
    #[error("Word '{0}' cannot be broken into phonic sounds")]
    CannotVocalize(String),
    #[error("Speech synthesis is not supported on this platform")]
    SynthesisUnsupported,
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("Audio source failed: {0}")]
    Source(String),
    #[error("Invalid curriculum table: {0}")]
    Table(String),
    #[error("Invalid word list: {0}")]
    WordList(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
