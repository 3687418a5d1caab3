//! The phonics curriculum table.
//!
//! Maps each teachable unit (a single letter or a two-letter digraph) to its
//! pure-sound transcription, letter-sound clip, and pedagogical group. The
//! built-in data follows the Jolly Phonics programme: 42 units introduced
//! across seven groups, starting with `s a t i p n`.
//!
//! A table can also be loaded from JSON, which makes it possible to ship a
//! reduced or re-recorded curriculum without rebuilding:
//!
//! ```rust
//! use phonics_rs::curriculum::CurriculumTable;
//!
//! let table = CurriculumTable::builtin();
//! assert_eq!(table.sound_of("s"), Some("sss"));
//! assert_eq!(table.units_in_group(1), vec!["s", "a", "t", "i", "p", "n"]);
//! ```

mod data;
mod table;

pub use table::{CurriculumEntry, CurriculumTable};
