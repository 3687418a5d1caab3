//! Rodio-backed audio playback.
//!
//! Plays local clips straight from disk and fetches remote ones over HTTP
//! before decoding. The backend holds at most one sounding sink; a new clip
//! or a `stop()` silences the previous one.

use std::io::Cursor;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rodio::{Decoder, OutputStreamHandle, Sink};

use crate::error::PhonicsError;
use crate::resolver::AudioSource;

use super::backend::AudioBackend;

/// [`AudioBackend`] built on a rodio output stream.
///
/// The caller owns the `OutputStream` and hands over its handle; the stream
/// must outlive the backend or playback goes silent.
///
/// ```rust,no_run
/// use rodio::OutputStream;
/// use phonics_rs::playback::RodioBackend;
///
/// let (_stream, handle) = OutputStream::try_default()?;
/// let backend = RodioBackend::new(handle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct RodioBackend {
    handle: OutputStreamHandle,
    client: reqwest::Client,
    current: Mutex<Option<Arc<Sink>>>,
}

impl RodioBackend {
    pub fn new(handle: OutputStreamHandle) -> Self {
        Self {
            handle,
            client: reqwest::Client::new(),
            current: Mutex::new(None),
        }
    }

    async fn fetch(&self, source: &AudioSource) -> Result<Vec<u8>, PhonicsError> {
        match source {
            AudioSource::Local(path) => Ok(tokio::fs::read(path).await?),
            AudioSource::Remote(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| PhonicsError::Source(format!("GET {url} failed: {e}")))?;
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| PhonicsError::Source(format!("GET {url} failed: {e}")))?;
                Ok(bytes.to_vec())
            }
        }
    }
}

#[async_trait]
impl AudioBackend for RodioBackend {
    async fn play(&self, source: &AudioSource) -> Result<(), PhonicsError> {
        let bytes = self.fetch(source).await?;
        let decoder = Decoder::new(Cursor::new(bytes))
            .map_err(|e| PhonicsError::Source(format!("Cannot decode {source}: {e}")))?;
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| PhonicsError::Source(format!("Cannot open sink: {e}")))?;
        sink.append(decoder);

        let sink = Arc::new(sink);
        {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(old) = current.replace(Arc::clone(&sink)) {
                old.stop();
            }
        }

        log::debug!("Playing {source}");
        let waiter = Arc::clone(&sink);
        tokio::task::spawn_blocking(move || waiter.sleep_until_end())
            .await
            .map_err(|e| PhonicsError::Source(format!("Playback wait failed: {e}")))?;
        Ok(())
    }

    fn stop(&self) {
        let taken = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sink) = taken {
            sink.stop();
        }
    }
}
