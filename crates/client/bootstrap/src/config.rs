//! Client configuration structures and loaders.
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use awaken_core::{LevelUpCascade, ProgressionConfig, StreakPolicy, VitalityPolicy};
use directories::ProjectDirs;

/// Configuration required to bootstrap a session and the dashboard.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: Option<PathBuf>,
    pub progression: ProgressionConfig,
    pub enable_journal: bool,
    pub messages: MessageConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            progression: ProgressionConfig::default(),
            enable_journal: true,
            messages: MessageConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Fallback data directory when no platform directory can be resolved.
    pub const FALLBACK_DATA_DIR: &'static str = "awaken-data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AWAKEN_DATA_DIR` - Directory for the ledger and journal (default: platform data dir)
    /// - `AWAKEN_LEVEL_CASCADE` - `single` or `repeat` (default: repeat)
    /// - `AWAKEN_VITALITY_POLICY` - `unbounded` or `clamped` (default: unbounded)
    /// - `AWAKEN_STREAK_POLICY` - `frozen` or `daily` (default: frozen)
    /// - `AWAKEN_JOURNAL` - Record completed activities in the journal (default: true)
    /// - `AWAKEN_MESSAGE_CAPACITY` - Message panel capacity (default: 32)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string());
        let mut config = Self::default();

        config.data_dir = read("AWAKEN_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(cascade) = parse::<LevelUpCascade>(read("AWAKEN_LEVEL_CASCADE")) {
            config.progression.cascade = cascade;
        }
        if let Some(vitality) = parse::<VitalityPolicy>(read("AWAKEN_VITALITY_POLICY")) {
            config.progression.vitality = vitality;
        }
        if let Some(streak) = parse::<StreakPolicy>(read("AWAKEN_STREAK_POLICY")) {
            config.progression.streak = streak;
        }

        if let Some(enable) = read("AWAKEN_JOURNAL").and_then(|value| parse_flag(&value)) {
            config.enable_journal = enable;
        }

        if let Some(capacity) = parse::<usize>(read("AWAKEN_MESSAGE_CAPACITY")) {
            config.messages.capacity = capacity.max(1);
        }

        config
    }

    /// Construct configuration from a fixed map (tests, embedding).
    pub fn from_map(values: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Directory holding the ledger record and the journal.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        ProjectDirs::from("", "", "awaken")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(Self::FALLBACK_DATA_DIR))
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let values = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_map(&values)
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.progression, ProgressionConfig::default());
        assert!(config.enable_journal);
        assert_eq!(config.messages.capacity, 32);
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("AWAKEN_DATA_DIR", "/tmp/awaken"),
            ("AWAKEN_LEVEL_CASCADE", "single"),
            ("AWAKEN_VITALITY_POLICY", "Clamped"),
            ("AWAKEN_STREAK_POLICY", " daily "),
            ("AWAKEN_JOURNAL", "off"),
            ("AWAKEN_MESSAGE_CAPACITY", "8"),
        ]);

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/awaken")));
        assert_eq!(config.progression.cascade, LevelUpCascade::Single);
        assert_eq!(config.progression.vitality, VitalityPolicy::Clamped);
        assert_eq!(config.progression.streak, StreakPolicy::Daily);
        assert!(!config.enable_journal);
        assert_eq!(config.messages.capacity, 8);
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/tmp/awaken"));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("AWAKEN_LEVEL_CASCADE", "sometimes"),
            ("AWAKEN_JOURNAL", "maybe"),
            ("AWAKEN_MESSAGE_CAPACITY", "0"),
            ("AWAKEN_DATA_DIR", ""),
        ]);

        assert_eq!(config.progression.cascade, LevelUpCascade::Repeat);
        assert!(config.enable_journal);
        assert_eq!(config.messages.capacity, 1);
        assert_eq!(config.data_dir, None);
    }
}
