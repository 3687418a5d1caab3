//! Platform seams for audio and speech output.

use async_trait::async_trait;

use crate::error::PhonicsError;
use crate::resolver::AudioSource;

use super::speech::SpeechOptions;

/// Plays recorded audio clips.
///
/// Implementations own a single audio channel: starting a new clip while
/// one is sounding must silence the old one first, and `stop` must silence
/// whatever is sounding right now. A `play` future resolves when the clip
/// reaches its natural end and errs when the source fails to load or play.
#[async_trait]
pub trait AudioBackend: Send + Sync {
    /// Play one source to completion.
    async fn play(&self, source: &AudioSource) -> Result<(), PhonicsError>;

    /// Silence the current clip. Idempotent, never errors.
    fn stop(&self);
}

/// Speaks text through the platform's speech synthesis capability.
///
/// The utterance queue has capacity exactly one: starting a new utterance
/// cancels the one in progress.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Whether the platform offers speech synthesis at all.
    fn is_supported(&self) -> bool;

    /// Speak `text` to completion with the given voice options.
    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<(), PhonicsError>;

    /// Cancel the current utterance. Idempotent, never errors.
    fn stop(&self);
}

/// Speech backend for platforms without synthesis.
///
/// Reports unsupported and fails every `speak` call with
/// [`PhonicsError::SynthesisUnsupported`], which routes the sequencer into
/// its unit-replay fallback instead of crashing.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSpeech;

#[async_trait]
impl SpeechBackend for UnsupportedSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str, _options: &SpeechOptions) -> Result<(), PhonicsError> {
        Err(PhonicsError::SynthesisUnsupported)
    }

    fn stop(&self) {}
}
