use std::sync::Arc;

use phonics_rs::curriculum::CurriculumTable;
use phonics_rs::playback::{RodioBackend, UnsupportedSpeech, WordSequencer};
use phonics_rs::resolver::AudioResolver;
use phonics_rs::tokenizer;
use rodio::OutputStream;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let word = std::env::args().nth(1).unwrap_or_else(|| "ship".to_string());

    let table = Arc::new(CurriculumTable::builtin());
    println!("'{}' sounds out as: {}", word, tokenizer::sound_breakdown(&table, &word));

    let (_stream, handle) = OutputStream::try_default()?;
    let sequencer = WordSequencer::new(
        Arc::clone(&table),
        AudioResolver::new(),
        Arc::new(RodioBackend::new(handle)),
        // No platform speech here; the sequencer falls back to replaying
        // the unit clips after the pre-word pause.
        Arc::new(UnsupportedSpeech),
    );

    let outcome = sequencer.play_word(&word).await?;
    println!("Playback {outcome:?}");
    Ok(())
}
