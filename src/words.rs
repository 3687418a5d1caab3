//! Practice word lists.
//!
//! Words are organised per audience and per length (2..=6 letters). The
//! built-in lists carry a small decodable sample; fuller datasets load from
//! JSON:
//!
//! ```json
//! {
//!   "kids":   { "3": ["cat", "sat", "tin"] },
//!   "adults": { "4": ["ship", "rain"] }
//! }
//! ```

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::curriculum::CurriculumTable;
use crate::error::PhonicsError;
use crate::tokenizer;

/// Which audience is practising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Kids,
    Adults,
}

/// Supported practice word lengths.
pub const WORD_LENGTHS: std::ops::RangeInclusive<usize> = 2..=6;

#[derive(Debug, Default, Deserialize)]
struct WordListDef {
    #[serde(default)]
    kids: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    adults: BTreeMap<String, Vec<String>>,
}

/// Practice words per audience and word length.
pub struct WordList {
    kids: BTreeMap<usize, Vec<String>>,
    adults: BTreeMap<usize, Vec<String>>,
}

impl WordList {
    /// A small built-in sample of decodable practice words.
    pub fn builtin() -> Self {
        let kids: &[&str] = &[
            "at", "in", "it", "an", "on", "up", "cat", "sat", "pin", "tin", "dog", "sun", "bed",
            "map", "ship", "chat", "rain", "moon", "fish", "duck", "train", "sheep", "chick",
            "queen", "boat",
        ];
        let adults: &[&str] = &[
            "ai", "or", "map", "tin", "sing", "chop", "coat", "tree", "sharp", "torch", "spoon",
            "paint", "cheese", "stream",
        ];
        let mut list = Self {
            kids: BTreeMap::new(),
            adults: BTreeMap::new(),
        };
        for &word in kids {
            list.kids.entry(word.len()).or_default().push(word.to_string());
        }
        for &word in adults {
            list.adults.entry(word.len()).or_default().push(word.to_string());
        }
        list
    }

    /// Parse a word list from JSON. Length keys must parse as integers in
    /// [`WORD_LENGTHS`]; words are lowercased.
    pub fn from_json_str(json: &str) -> Result<Self, PhonicsError> {
        let def: WordListDef = serde_json::from_str(json)?;
        Ok(Self {
            kids: Self::convert(def.kids)?,
            adults: Self::convert(def.adults)?,
        })
    }

    fn convert(
        raw: BTreeMap<String, Vec<String>>,
    ) -> Result<BTreeMap<usize, Vec<String>>, PhonicsError> {
        let mut out = BTreeMap::new();
        for (key, words) in raw {
            let length: usize = key
                .parse()
                .map_err(|_| PhonicsError::WordList(format!("Bad length key {key:?}")))?;
            if !WORD_LENGTHS.contains(&length) {
                return Err(PhonicsError::WordList(format!(
                    "Length {length} outside supported range"
                )));
            }
            out.insert(length, words.iter().map(|w| w.to_lowercase()).collect());
        }
        Ok(out)
    }

    fn for_user(&self, user: UserType) -> &BTreeMap<usize, Vec<String>> {
        match user {
            UserType::Kids => &self.kids,
            UserType::Adults => &self.adults,
        }
    }

    /// Practice words of one length.
    pub fn words(&self, user: UserType, length: usize) -> &[String] {
        self.for_user(user)
            .get(&length)
            .map(|w| w.as_slice())
            .unwrap_or(&[])
    }

    /// A random practice word of one length, if any exist.
    pub fn random_word(&self, user: UserType, length: usize) -> Option<&str> {
        self.words(user, length)
            .choose(&mut rand::thread_rng())
            .map(|w| w.as_str())
    }

    /// Words spellable entirely from one curriculum group's units, across
    /// all lengths or one specific length.
    ///
    /// Membership uses the strict group scan: every character of the word
    /// must match inside the group's unit set.
    pub fn words_in_group(
        &self,
        table: &CurriculumTable,
        user: UserType,
        group: u8,
        length: Option<usize>,
    ) -> Vec<&str> {
        self.for_user(user)
            .iter()
            .filter(|(len, _)| length.map_or(true, |l| l == **len))
            .flat_map(|(_, words)| words.iter())
            .filter(|w| tokenizer::fits_group(table, w, group))
            .map(|w| w.as_str())
            .collect()
    }

    /// Total word count for one audience.
    pub fn count(&self, user: UserType) -> usize {
        self.for_user(user).values().map(|w| w.len()).sum()
    }
}
