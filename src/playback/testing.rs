//! Recording mock backends for playback tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::error::PhonicsError;
use crate::resolver::AudioSource;

use super::backend::{AudioBackend, SpeechBackend};
use super::speech::SpeechOptions;

/// One observed backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    AudioStopped,
    Played(AudioSource),
    Failed(AudioSource),
    Spoke { text: String, rate: f32 },
    SpeechFailed(String),
    SpeechStopped,
}

/// Shared, time-stamped call log. Audio and speech mocks can share one log
/// so cross-backend ordering is observable.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<(BackendEvent, Instant)>>>,
}

impl EventLog {
    pub fn record(&self, event: BackendEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event, Instant::now()));
    }

    pub fn events(&self) -> Vec<BackendEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(e, _)| e.clone())
            .collect()
    }

    pub fn timed_events(&self) -> Vec<(BackendEvent, Instant)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Audio backend that records calls instead of making noise.
///
/// Completion events are recorded when a clip *finishes*; a play future
/// dropped by cancellation leaves no completion in the log, matching the
/// rule that intentionally stopped audio must not fire "ended" handling.
#[derive(Default)]
pub struct MockAudio {
    log: EventLog,
    fail_local: AtomicBool,
    fail_remote: AtomicBool,
    fail_files: Mutex<HashSet<String>>,
    hold: Mutex<Option<Duration>>,
}

impl MockAudio {
    pub fn with_log(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    /// Make every local source fail to play.
    pub fn fail_local(&self) {
        self.fail_local.store(true, Ordering::SeqCst);
    }

    /// Make every remote source fail to play.
    pub fn fail_remote(&self) {
        self.fail_remote.store(true, Ordering::SeqCst);
    }

    /// Make any source for the given clip file fail.
    pub fn fail_file(&self, file: &str) {
        self.fail_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(file.to_string());
    }

    /// Make each clip take this long to finish.
    pub fn hold_for(&self, duration: Duration) {
        let hold = if duration.is_zero() {
            None
        } else {
            Some(duration)
        };
        *self.hold.lock().unwrap_or_else(PoisonError::into_inner) = hold;
    }

    pub fn events(&self) -> Vec<BackendEvent> {
        self.log.events()
    }

    fn should_fail(&self, source: &AudioSource) -> bool {
        let by_kind = match source {
            AudioSource::Local(_) => self.fail_local.load(Ordering::SeqCst),
            AudioSource::Remote(_) => self.fail_remote.load(Ordering::SeqCst),
        };
        if by_kind {
            return true;
        }
        let file = match source {
            AudioSource::Local(path) => path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or_default()
                .to_string(),
            AudioSource::Remote(url) => url.rsplit('/').next().unwrap_or_default().to_string(),
        };
        self.fail_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&file)
    }
}

#[async_trait]
impl AudioBackend for MockAudio {
    async fn play(&self, source: &AudioSource) -> Result<(), PhonicsError> {
        if self.should_fail(source) {
            self.log.record(BackendEvent::Failed(source.clone()));
            return Err(PhonicsError::Source(format!("mock failure for {source}")));
        }
        let hold = *self.hold.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(duration) = hold {
            tokio::time::sleep(duration).await;
        }
        self.log.record(BackendEvent::Played(source.clone()));
        Ok(())
    }

    fn stop(&self) {
        self.log.record(BackendEvent::AudioStopped);
    }
}

/// Speech backend that records utterances.
pub struct MockSpeech {
    log: EventLog,
    supported: AtomicBool,
    fail_next: AtomicBool,
}

impl Default for MockSpeech {
    fn default() -> Self {
        Self {
            log: EventLog::default(),
            supported: AtomicBool::new(true),
            fail_next: AtomicBool::new(false),
        }
    }
}

impl MockSpeech {
    pub fn with_log(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn set_supported(&self, supported: bool) {
        self.supported.store(supported, Ordering::SeqCst);
    }

    /// Fail the next utterance mid-speech.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SpeechBackend for MockSpeech {
    fn is_supported(&self) -> bool {
        self.supported.load(Ordering::SeqCst)
    }

    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<(), PhonicsError> {
        if !self.is_supported() {
            return Err(PhonicsError::SynthesisUnsupported);
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            self.log.record(BackendEvent::SpeechFailed(text.to_string()));
            return Err(PhonicsError::Synthesis("mock utterance failure".to_string()));
        }
        self.log.record(BackendEvent::Spoke {
            text: text.to_string(),
            rate: options.rate,
        });
        Ok(())
    }

    fn stop(&self) {
        self.log.record(BackendEvent::SpeechStopped);
    }
}
