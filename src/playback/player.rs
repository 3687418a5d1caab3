//! Single-unit clip playback with source fallback.

use std::sync::Arc;

use crate::curriculum::CurriculumTable;
use crate::error::PhonicsError;
use crate::resolver::AudioResolver;

use super::backend::AudioBackend;

/// Plays one phonic unit's recorded sound, trying each candidate source in
/// priority order (local clip first, then the remote recording).
pub struct UnitPlayer<B: AudioBackend> {
    table: Arc<CurriculumTable>,
    resolver: AudioResolver,
    backend: Arc<B>,
}

impl<B: AudioBackend> UnitPlayer<B> {
    pub fn new(table: Arc<CurriculumTable>, resolver: AudioResolver, backend: Arc<B>) -> Self {
        Self {
            table,
            resolver,
            backend,
        }
    }

    /// Play the unit's clip to completion.
    ///
    /// Silences any clip already sounding; only one unit is ever audible at
    /// a time. Fails with [`PhonicsError::NoAudioAvailable`] when the unit
    /// has no recording, and [`PhonicsError::AllSourcesFailed`] when every
    /// candidate source errors. Individual source failures are logged and
    /// the next candidate is tried.
    pub async fn play(&self, unit: &str) -> Result<(), PhonicsError> {
        let candidates = self.resolver.resolve(&self.table, unit);
        if candidates.is_empty() {
            return Err(PhonicsError::NoAudioAvailable(unit.to_string()));
        }

        // One audio channel: whatever is sounding stops before we start.
        self.backend.stop();

        for source in &candidates {
            match self.backend.play(source).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    log::warn!("Source {source} failed for unit '{unit}': {err}");
                }
            }
        }

        Err(PhonicsError::AllSourcesFailed(unit.to_string()))
    }

    /// Silence the current clip. Idempotent.
    pub fn stop(&self) {
        self.backend.stop();
    }

    pub(super) fn table(&self) -> &Arc<CurriculumTable> {
        &self.table
    }
}
