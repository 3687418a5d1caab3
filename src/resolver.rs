//! Candidate audio source resolution.
//!
//! Resolution is pure computation: the resolver derives every location a
//! unit's clip could live at, in the fixed priority order local-then-remote,
//! without touching the filesystem or the network. Whether a source actually
//! loads is only discovered by the player when it tries it.

use std::path::{Path, PathBuf};

use crate::curriculum::CurriculumTable;

/// Remote home of the Jolly Kingdom letter-sound recordings.
pub const DEFAULT_REMOTE_BASE: &str = "https://www.jollykingdom.com/lettersounds/sound/";

/// Default directory for locally mirrored clips.
pub const DEFAULT_LOCAL_DIR: &str = "sounds";

/// A resolved location for one audio clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// A clip on the local filesystem.
    Local(PathBuf),
    /// A clip reachable over HTTP.
    Remote(String),
}

impl std::fmt::Display for AudioSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioSource::Local(path) => write!(f, "{}", path.display()),
            AudioSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Derives the ordered candidate sources for a unit's clip.
#[derive(Debug, Clone)]
pub struct AudioResolver {
    local_dir: PathBuf,
    remote_base: String,
}

impl Default for AudioResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioResolver {
    /// A resolver using the default local directory and remote base URL.
    pub fn new() -> Self {
        Self {
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
            remote_base: DEFAULT_REMOTE_BASE.to_string(),
        }
    }

    /// Override the local clip directory.
    pub fn with_local_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_dir = dir.into();
        self
    }

    /// Override the remote base URL. A trailing slash is added if missing.
    pub fn with_remote_base(mut self, base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.remote_base = base;
        self
    }

    /// The candidate sources for a unit, local before remote.
    ///
    /// Empty when the curriculum has no clip for the unit.
    pub fn resolve(&self, table: &CurriculumTable, unit: &str) -> Vec<AudioSource> {
        let Some(file) = table.lookup(unit).and_then(|e| e.audio_file.clone()) else {
            return Vec::new();
        };
        vec![
            AudioSource::Local(self.local_dir.join(&file)),
            AudioSource::Remote(format!("{}{}", self.remote_base, file)),
        ]
    }

    /// Whether any source exists for the unit.
    pub fn has_audio(&self, table: &CurriculumTable, unit: &str) -> bool {
        table
            .lookup(unit)
            .map(|e| e.audio_file.is_some())
            .unwrap_or(false)
    }

    /// The configured local clip directory.
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }
}

#[cfg(test)]
mod tests {
    use super::{AudioResolver, AudioSource};
    use crate::curriculum::CurriculumTable;
    use std::path::PathBuf;

    #[test]
    fn local_source_comes_before_remote() {
        let table = CurriculumTable::builtin();
        let resolver = AudioResolver::new();
        let sources = resolver.resolve(&table, "s");
        assert_eq!(
            sources,
            vec![
                AudioSource::Local(PathBuf::from("sounds/s.mp3")),
                AudioSource::Remote(
                    "https://www.jollykingdom.com/lettersounds/sound/s.mp3".to_string()
                ),
            ]
        );
    }

    #[test]
    fn unknown_units_resolve_to_nothing() {
        let table = CurriculumTable::builtin();
        let resolver = AudioResolver::new();
        assert!(resolver.resolve(&table, "zz").is_empty());
        assert!(!resolver.has_audio(&table, "zz"));
        assert!(resolver.has_audio(&table, "ch"));
    }

    #[test]
    fn units_without_clips_resolve_to_nothing() {
        let table = CurriculumTable::from_json_str(
            r#"[ { "unit": "x", "sound": "ks", "group": 6 } ]"#,
        )
        .expect("table should parse");
        let resolver = AudioResolver::new();
        assert!(resolver.resolve(&table, "x").is_empty());
    }

    #[test]
    fn custom_bases_are_applied() {
        let table = CurriculumTable::builtin();
        let resolver = AudioResolver::new()
            .with_local_dir("/opt/clips")
            .with_remote_base("https://example.com/audio");
        let sources = resolver.resolve(&table, "ai");
        assert_eq!(
            sources,
            vec![
                AudioSource::Local(PathBuf::from("/opt/clips/ai.mp3")),
                AudioSource::Remote("https://example.com/audio/ai.mp3".to_string()),
            ]
        );
    }
}
