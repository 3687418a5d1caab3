//! # phonics-rs
//!
//! A Rust library for phonics word segmentation and sequenced letter-sound
//! playback, following the Jolly Phonics curriculum.
//!
//! ## Features
//!
//! - **Word tokenization**: greedy digraph-first segmentation of a word
//!   into teachable phonic units ("chat" → `ch`, `a`, `t`)
//! - **Layered audio resolution**: local clip first, remote recording as
//!   fallback, as an explicit ordered candidate list
//! - **Sequenced playback**: unit sounds in order with timed pauses, then
//!   the whole word spoken slowly, with cooperative cancellation
//! - **Curriculum groups**: strict group-membership checks for
//!   stage-appropriate word selection
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! phonics-rs = { version = "0.1", features = ["playback"] }
//! ```
//!
//! ```ignore
//! use std::sync::Arc;
//! use phonics_rs::curriculum::CurriculumTable;
//! use phonics_rs::playback::{RodioBackend, UnsupportedSpeech, WordSequencer};
//! use phonics_rs::resolver::AudioResolver;
//! use rodio::OutputStream;
//!
//! let (_stream, handle) = OutputStream::try_default()?;
//! let sequencer = WordSequencer::new(
//!     Arc::new(CurriculumTable::builtin()),
//!     AudioResolver::new(),
//!     Arc::new(RodioBackend::new(handle)),
//!     Arc::new(UnsupportedSpeech),
//! );
//! sequencer.play_word("ship").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Tokenization alone needs no backend at all:
//!
//! ```rust
//! use phonics_rs::curriculum::CurriculumTable;
//! use phonics_rs::tokenizer;
//!
//! let table = CurriculumTable::builtin();
//! assert_eq!(tokenizer::tokenize(&table, "chat"), vec!["ch", "a", "t"]);
//! assert_eq!(tokenizer::sound_breakdown(&table, "rain"), "r-ai-n");
//! assert!(tokenizer::fits_group(&table, "sat", 1));
//! ```

pub mod curriculum;
pub mod error;
pub mod playback;
pub mod progress;
pub mod resolver;
pub mod tokenizer;
pub mod words;

pub use curriculum::{CurriculumEntry, CurriculumTable};
pub use error::PhonicsError;
pub use playback::{
    AudioBackend, PlaybackOutcome, PlaybackTiming, SpeechBackend, SpeechOptions, UnitPlayer,
    UnsupportedSpeech, WordSequencer,
};
pub use resolver::{AudioResolver, AudioSource};
pub use words::{UserType, WordList};
