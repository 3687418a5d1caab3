//! Voice options for speech synthesis.

use derive_builder::Builder;

/// Rate used when pronouncing a whole word after its sounds. Markedly
/// slower than conversational speech so the learner can follow along.
pub const WORD_REVIEW_RATE: f32 = 0.4;

/// Options applied to one utterance.
///
/// ```rust
/// use phonics_rs::playback::{SpeechOptions, SpeechOptionsBuilder};
///
/// let slow = SpeechOptionsBuilder::default()
///     .rate(0.4)
///     .build()
///     .unwrap();
/// assert_eq!(slow.pitch, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default)]
pub struct SpeechOptions {
    /// Speech rate multiplier. 1.0 is the platform's normal speed.
    pub rate: f32,
    /// Voice pitch multiplier.
    pub pitch: f32,
    /// Volume in `0.0..=1.0`.
    pub volume: f32,
    /// BCP 47 locale tag for voice selection.
    pub locale: String,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
            locale: "en-US".to_string(),
        }
    }
}

impl SpeechOptions {
    /// Options for the slowed full-word pronunciation.
    pub fn word_review() -> Self {
        Self {
            rate: WORD_REVIEW_RATE,
            ..Self::default()
        }
    }
}
