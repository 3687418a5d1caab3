//! Whole-word playback orchestration.
//!
//! The sequencer sounds out a word the way it is taught: each phonic unit
//! in order with short pauses, a longer pause, then the whole word spoken
//! slowly. Everything suspends cooperatively, and a cancellation token is
//! checked at every suspension point so `stop()` (or a newer request) can
//! silence the word mid-flight.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use crate::curriculum::CurriculumTable;
use crate::error::PhonicsError;
use crate::resolver::AudioResolver;
use crate::tokenizer;

use super::backend::{AudioBackend, SpeechBackend};
use super::player::UnitPlayer;
use super::speech::SpeechOptions;

/// How a playback request ended.
///
/// A stopped session is not a failure, but it must never be mistaken for a
/// completed one: none of its remaining sounds were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every step ran to its natural end.
    Completed,
    /// The session was cancelled by `stop()` or a newer request.
    Stopped,
}

/// Pause lengths used while sounding out a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Pause between consecutive unit sounds.
    pub unit_gap: Duration,
    /// Pause between the last unit sound and the spoken word.
    pub pre_word_gap: Duration,
    /// Shorter pause used when replaying units after a synthesis failure.
    pub fallback_gap: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            unit_gap: Duration::from_millis(300),
            pre_word_gap: Duration::from_millis(500),
            fallback_gap: Duration::from_millis(200),
        }
    }
}

/// Cooperative cancellation flag for one playback session.
#[derive(Clone)]
struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    fn cancel(&self) {
        self.tx.send_replace(true);
    }

    fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The sender lives in self, so this can only end by cancellation.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    fn same_session(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

/// Plays whole words as sequenced unit sounds followed by slow synthesized
/// speech.
///
/// One session is active at most; a new request first silences and cancels
/// the previous one ("newest request wins"). `stop()` may be called from
/// any other flow at any time and is always safe.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use phonics_rs::curriculum::CurriculumTable;
/// use phonics_rs::playback::{UnsupportedSpeech, WordSequencer};
/// use phonics_rs::resolver::AudioResolver;
/// # use phonics_rs::playback::AudioBackend;
/// # async fn demo<B: AudioBackend + 'static>(audio: Arc<B>) -> Result<(), Box<dyn std::error::Error>> {
/// let sequencer = WordSequencer::new(
///     Arc::new(CurriculumTable::builtin()),
///     AudioResolver::new(),
///     audio,
///     Arc::new(UnsupportedSpeech),
/// );
/// sequencer.play_word("ship").await?;
/// # Ok(())
/// # }
/// ```
pub struct WordSequencer<A: AudioBackend, S: SpeechBackend> {
    player: UnitPlayer<A>,
    speech: Arc<S>,
    timing: PlaybackTiming,
    session: Mutex<Option<CancelToken>>,
}

impl<A: AudioBackend, S: SpeechBackend> WordSequencer<A, S> {
    pub fn new(
        table: Arc<CurriculumTable>,
        resolver: AudioResolver,
        audio: Arc<A>,
        speech: Arc<S>,
    ) -> Self {
        Self {
            player: UnitPlayer::new(table, resolver, audio),
            speech,
            timing: PlaybackTiming::default(),
            session: Mutex::new(None),
        }
    }

    /// Override the pause lengths.
    pub fn with_timing(mut self, timing: PlaybackTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Sound out `word`: each unit in order with [`PlaybackTiming::unit_gap`]
    /// pauses, a [`PlaybackTiming::pre_word_gap`] pause, then the word spoken
    /// at the slow review rate.
    ///
    /// A unit whose clip fails is logged and skipped; partial pronunciation
    /// beats silence. A failed synthesis step falls back to replaying every
    /// unit once more with shorter pauses, without retrying synthesis.
    ///
    /// Fails with [`PhonicsError::CannotVocalize`] before any sound when the
    /// word tokenizes to nothing.
    pub async fn play_word(&self, word: &str) -> Result<PlaybackOutcome, PhonicsError> {
        let units = tokenizer::tokenize(self.player.table(), word);
        if units.is_empty() {
            return Err(PhonicsError::CannotVocalize(word.to_string()));
        }

        let token = self.begin_session();
        log::debug!("Playing '{word}' as {units:?}");

        for (i, unit) in units.iter().enumerate() {
            if !self.play_unit_in_session(&token, unit).await {
                return Ok(PlaybackOutcome::Stopped);
            }
            if i + 1 < units.len() && !pause(&token, self.timing.unit_gap).await {
                return Ok(PlaybackOutcome::Stopped);
            }
        }

        if !pause(&token, self.timing.pre_word_gap).await {
            return Ok(PlaybackOutcome::Stopped);
        }

        let review_options = SpeechOptions::word_review();
        let spoken = tokio::select! {
            res = self.speech.speak(word, &review_options) => res,
            _ = token.cancelled() => {
                self.speech.stop();
                return Ok(PlaybackOutcome::Stopped);
            }
        };

        if let Err(err) = spoken {
            if token.is_cancelled() {
                return Ok(PlaybackOutcome::Stopped);
            }
            log::warn!("Full-word synthesis failed for '{word}': {err}");
            // Fallback: the unit sounds once more, a little quicker. Unit
            // failures are swallowed here as well, and synthesis is not
            // retried.
            for (i, unit) in units.iter().enumerate() {
                if !self.play_unit_in_session(&token, unit).await {
                    return Ok(PlaybackOutcome::Stopped);
                }
                if i + 1 < units.len() && !pause(&token, self.timing.fallback_gap).await {
                    return Ok(PlaybackOutcome::Stopped);
                }
            }
        }

        self.finish_session(&token);
        Ok(PlaybackOutcome::Completed)
    }

    /// Letter-mode playback: one unit's pure sound, no sequencing.
    pub async fn play_unit(&self, unit: &str) -> Result<PlaybackOutcome, PhonicsError> {
        let token = self.begin_session();
        let res = tokio::select! {
            res = self.player.play(unit) => res,
            _ = token.cancelled() => {
                self.player.stop();
                return Ok(PlaybackOutcome::Stopped);
            }
        };
        self.finish_session(&token);
        res.map(|()| PlaybackOutcome::Completed)
    }

    /// Speak arbitrary text through the speech backend.
    ///
    /// Fails with [`PhonicsError::SynthesisUnsupported`] when the platform
    /// offers no synthesis; callers should treat that as "feature absent",
    /// not as a crash.
    pub async fn speak(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<PlaybackOutcome, PhonicsError> {
        if !self.speech.is_supported() {
            return Err(PhonicsError::SynthesisUnsupported);
        }
        let token = self.begin_session();
        let res = tokio::select! {
            res = self.speech.speak(text, options) => res,
            _ = token.cancelled() => {
                self.speech.stop();
                return Ok(PlaybackOutcome::Stopped);
            }
        };
        self.finish_session(&token);
        res.map(|()| PlaybackOutcome::Completed)
    }

    /// Cancel the active session and silence audio and speech.
    ///
    /// Safe to call at any time from any flow; a no-op when idle. Never
    /// errors.
    pub fn stop(&self) {
        let taken = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(token) = taken else {
            return;
        };
        token.cancel();
        self.player.stop();
        self.speech.stop();
    }

    /// Whether a playback session is currently active.
    pub fn is_active(&self) -> bool {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Play one unit inside a session. Returns false when the session was
    /// cancelled; per-unit errors are logged and reported as "keep going".
    async fn play_unit_in_session(&self, token: &CancelToken, unit: &str) -> bool {
        if token.is_cancelled() {
            return false;
        }
        let res = tokio::select! {
            res = self.player.play(unit) => res,
            _ = token.cancelled() => {
                self.player.stop();
                return false;
            }
        };
        if let Err(err) = res {
            if token.is_cancelled() {
                return false;
            }
            log::warn!("Unit '{unit}' failed during word playback, continuing: {err}");
        }
        true
    }

    /// Replace the active session: cancel and silence the old one, install
    /// a fresh token.
    fn begin_session(&self) -> CancelToken {
        let token = CancelToken::new();
        let previous = {
            let mut slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
            slot.replace(token.clone())
        };
        if let Some(old) = previous {
            old.cancel();
            self.player.stop();
            self.speech.stop();
        }
        token
    }

    /// Clear the session slot, but only if it still belongs to `token`; a
    /// newer session must not be torn down by the flow it preempted.
    fn finish_session(&self, token: &CancelToken) {
        let mut slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|t| t.same_session(token)) {
            *slot = None;
        }
    }
}

/// Cancellable pause. Returns false when the session was cancelled before
/// the timer fired.
async fn pause(token: &CancelToken, gap: Duration) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(gap) => true,
        _ = token.cancelled() => false,
    }
}
