//! Sequenced multimedia playback.
//!
//! The pipeline has three layers:
//!
//! - [`backend`] — the platform seams: [`AudioBackend`] plays recorded
//!   clips, [`SpeechBackend`] speaks synthesized text. Both own a single
//!   channel; starting a new sound silences the old one.
//! - [`UnitPlayer`] — plays one phonic unit, trying its candidate sources
//!   in priority order (local clip, then the remote recording).
//! - [`WordSequencer`] — sounds out a whole word: unit clips in order with
//!   timed pauses, then the word spoken slowly, with a unit-replay fallback
//!   when synthesis is unavailable. Owns session cancellation.
//!
//! Enable the `playback` cargo feature for `RodioBackend`, a concrete
//! audio backend that plays local clips through rodio and downloads remote
//! ones with reqwest.

pub mod backend;
mod player;
mod sequencer;
mod speech;

#[cfg(feature = "playback")]
mod system;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{AudioBackend, SpeechBackend, UnsupportedSpeech};
pub use player::UnitPlayer;
pub use sequencer::{PlaybackOutcome, PlaybackTiming, WordSequencer};
pub use speech::{SpeechOptions, SpeechOptionsBuilder, WORD_REVIEW_RATE};

#[cfg(feature = "playback")]
pub use system::RodioBackend;
