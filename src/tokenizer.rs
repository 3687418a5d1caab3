//! Greedy word-to-sound segmentation.
//!
//! A word is scanned left to right. At each position the two-character
//! substring is tried first, so digraphs like "ch", "sh", and "ai" win over
//! their constituent letters; a unit only matches when the curriculum table
//! knows it *and* has a recording for it. Characters that match neither way
//! are dropped silently, so the output covers a subset of the word's
//! characters with no overlaps: "box" without an "x" recording becomes
//! `["b", "o"]`.
//!
//! An empty result is a valid result, not an error. It means the word
//! cannot be vocalized; the playback layer raises
//! [`PhonicsError::CannotVocalize`](crate::PhonicsError::CannotVocalize)
//! when asked to play such a word.

use crate::curriculum::CurriculumTable;

/// Break a word into the ordered phonic units that make it up.
///
/// Only units with a recording are emitted; everything else is skipped.
pub fn tokenize(table: &CurriculumTable, word: &str) -> Vec<String> {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        // Digraph first, single letter second, both under the dual
        // condition: known to the table and backed by a clip.
        if i + 1 < chars.len() {
            let digraph: String = chars[i..i + 2].iter().collect();
            if has_playable_entry(table, &digraph) {
                units.push(digraph);
                i += 2;
                continue;
            }
        }

        let single: String = chars[i..i + 1].iter().collect();
        if has_playable_entry(table, &single) {
            units.push(single);
        }
        i += 1;
    }

    units
}

/// The sound breakdown of a word as a display string, e.g. "bad" -> "b-a-d".
pub fn sound_breakdown(table: &CurriculumTable, word: &str) -> String {
    tokenize(table, word).join("-")
}

/// Whether a word can be spelled entirely from the units of one group.
///
/// Runs the same greedy scan as [`tokenize`], but matches against the
/// group's unit set alone and is strict: a character that matches nothing
/// in the set disqualifies the word outright. There is no silent skipping
/// here; curriculum progression only offers words the learner can fully
/// sound out at that stage.
pub fn fits_group(table: &CurriculumTable, word: &str, group: u8) -> bool {
    let allowed = table.units_in_group(group);
    if allowed.is_empty() {
        return false;
    }

    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return false;
    }

    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let digraph: String = chars[i..i + 2].iter().collect();
            if allowed.contains(&digraph.as_str()) {
                i += 2;
                continue;
            }
        }

        let single: String = chars[i..i + 1].iter().collect();
        if allowed.contains(&single.as_str()) {
            i += 1;
        } else {
            return false;
        }
    }

    true
}

fn has_playable_entry(table: &CurriculumTable, unit: &str) -> bool {
    table
        .lookup(unit)
        .map(|e| e.audio_file.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{fits_group, sound_breakdown, tokenize};
    use crate::curriculum::CurriculumTable;

    #[test]
    fn breaks_simple_words_into_letter_sounds() {
        let table = CurriculumTable::builtin();
        assert_eq!(tokenize(&table, "cat"), vec!["c", "a", "t"]);
        assert_eq!(tokenize(&table, "tin"), vec!["t", "i", "n"]);
    }

    #[test]
    fn digraphs_win_over_single_letters() {
        let table = CurriculumTable::builtin();
        assert_eq!(tokenize(&table, "chat"), vec!["ch", "a", "t"]);
        assert_eq!(tokenize(&table, "ship"), vec!["sh", "i", "p"]);
        assert_eq!(tokenize(&table, "train"), vec!["t", "r", "ai", "n"]);
        assert_eq!(tokenize(&table, "queen"), vec!["qu", "ee", "n"]);
    }

    #[test]
    fn input_is_lowercased_before_matching() {
        let table = CurriculumTable::builtin();
        assert_eq!(tokenize(&table, "CHAT"), vec!["ch", "a", "t"]);
    }

    #[test]
    fn units_without_audio_are_dropped_silently() {
        let table = CurriculumTable::from_json_str(
            r#"[
                { "unit": "b", "sound": "bbb", "audio": "b.mp3", "group": 3 },
                { "unit": "o", "sound": "oh", "audio": "o.mp3", "group": 3 },
                { "unit": "x", "sound": "ks", "group": 6 }
            ]"#,
        )
        .expect("table should parse");
        assert_eq!(tokenize(&table, "box"), vec!["b", "o"]);
    }

    #[test]
    fn empty_and_unknown_input_yield_empty_output() {
        let table = CurriculumTable::builtin();
        assert!(tokenize(&table, "").is_empty());
        assert!(tokenize(&table, "123").is_empty());
    }

    #[test]
    fn matched_units_partition_the_word_without_gaps() {
        let table = CurriculumTable::builtin();
        for word in ["cat", "ship", "train", "chicken", "moon"] {
            let units = tokenize(&table, word);
            assert_eq!(units.concat(), word, "units must reassemble {word:?}");
        }
    }

    #[test]
    fn sound_breakdown_joins_units_with_dashes() {
        let table = CurriculumTable::builtin();
        assert_eq!(sound_breakdown(&table, "bad"), "b-a-d");
        assert_eq!(sound_breakdown(&table, "chat"), "ch-a-t");
        assert_eq!(sound_breakdown(&table, ""), "");
    }

    #[test]
    fn group_membership_is_strict() {
        let table = CurriculumTable::builtin();
        // Group 1 is {s, a, t, i, p, n}.
        assert!(fits_group(&table, "sat", 1));
        assert!(fits_group(&table, "pin", 1));
        assert!(!fits_group(&table, "cat", 1)); // "c" arrives in group 2
        assert!(!fits_group(&table, "sax", 1)); // "x" disqualifies outright
    }

    #[test]
    fn group_membership_matches_digraphs_in_later_groups() {
        let table = CurriculumTable::builtin();
        assert!(fits_group(&table, "ng", 5));
        assert!(!fits_group(&table, "sing", 5)); // "s" and "i" are group 1
        assert!(!fits_group(&table, "", 1));
        assert!(!fits_group(&table, "sat", 99));
    }
}
