use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::PhonicsError;

/// One teachable sound in the curriculum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumEntry {
    /// Pure-sound transcription shown to the learner (e.g. "sss" for "s").
    pub sound: String,
    /// Letter-sound clip file name. Several units may share one clip
    /// ("c" and "k" both use the "ck" clip). `None` means the unit has no
    /// recording and is never emitted by the tokenizer.
    pub audio_file: Option<String>,
    /// Pedagogical group in which the unit is introduced (1..=7).
    pub group: u8,
}

/// Serialized form of a curriculum entry, one element of the JSON array.
#[derive(Debug, Deserialize)]
struct EntryDef {
    unit: String,
    sound: String,
    #[serde(default)]
    audio: Option<String>,
    group: u8,
}

/// Immutable mapping from phonic unit (letter or digraph) to its
/// curriculum entry.
///
/// Built once at startup, either from the built-in Jolly Phonics data or
/// from a JSON file. Lookup is case-insensitive; introduction order of the
/// units is preserved for group queries.
pub struct CurriculumTable {
    order: Vec<String>,
    entries: HashMap<String, CurriculumEntry>,
}

impl CurriculumTable {
    /// The built-in Jolly Phonics table: 42 units across groups 1..=7.
    pub fn builtin() -> Self {
        let mut order = Vec::with_capacity(super::data::BUILTIN.len());
        let mut entries = HashMap::with_capacity(super::data::BUILTIN.len());
        for &(unit, sound, clip, group) in super::data::BUILTIN {
            order.push(unit.to_string());
            entries.insert(
                unit.to_string(),
                CurriculumEntry {
                    sound: sound.to_string(),
                    audio_file: Some(clip.to_string()),
                    group,
                },
            );
        }
        Self { order, entries }
    }

    /// Load a table from a JSON file.
    ///
    /// The file must contain an array of entries in introduction order:
    ///
    /// ```json
    /// [
    ///   { "unit": "s", "sound": "sss", "audio": "s.mp3", "group": 1 },
    ///   { "unit": "ai", "sound": "ay", "audio": "ai.mp3", "group": 4 }
    /// ]
    /// ```
    ///
    /// The `audio` field may be omitted for units without a recording.
    pub fn from_json_file(path: &Path) -> Result<Self, PhonicsError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        log::info!(
            "Loaded curriculum table with {} units from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from a JSON string. See [`Self::from_json_file`].
    pub fn from_json_str(json: &str) -> Result<Self, PhonicsError> {
        let defs: Vec<EntryDef> = serde_json::from_str(json)?;
        let mut order = Vec::with_capacity(defs.len());
        let mut entries = HashMap::with_capacity(defs.len());
        for def in defs {
            let unit = def.unit.to_lowercase();
            if unit.is_empty() || unit.chars().count() > 2 {
                return Err(PhonicsError::Table(format!(
                    "Unit must be 1-2 characters, got {:?}",
                    def.unit
                )));
            }
            if def.group == 0 {
                return Err(PhonicsError::Table(format!(
                    "Unit {:?} has group 0; groups start at 1",
                    def.unit
                )));
            }
            if entries
                .insert(
                    unit.clone(),
                    CurriculumEntry {
                        sound: def.sound,
                        audio_file: def.audio,
                        group: def.group,
                    },
                )
                .is_some()
            {
                return Err(PhonicsError::Table(format!("Duplicate unit {:?}", unit)));
            }
            order.push(unit);
        }
        Ok(Self { order, entries })
    }

    /// Look up a unit, case-insensitively. No fuzzy matching.
    pub fn lookup(&self, unit: &str) -> Option<&CurriculumEntry> {
        self.entries.get(&unit.to_lowercase())
    }

    /// The pure-sound transcription for a unit (e.g. "sss" for "s").
    pub fn sound_of(&self, unit: &str) -> Option<&str> {
        self.lookup(unit).map(|e| e.sound.as_str())
    }

    /// The group a unit is introduced in, if the unit is taught at all.
    pub fn group_of(&self, unit: &str) -> Option<u8> {
        self.lookup(unit).map(|e| e.group)
    }

    /// Units introduced in group `n`, in introduction order.
    pub fn units_in_group(&self, n: u8) -> Vec<&str> {
        self.order
            .iter()
            .filter(|u| self.entries[u.as_str()].group == n)
            .map(|u| u.as_str())
            .collect()
    }

    /// Group numbers present in the table, ascending.
    pub fn groups(&self) -> Vec<u8> {
        let mut groups: Vec<u8> = self.entries.values().map(|e| e.group).collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }

    /// All units in introduction order.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|u| u.as_str())
    }

    /// Number of units in the table.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the table holds no units.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
