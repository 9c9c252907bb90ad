use anyhow::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Pause between the final answer and the results announcement.
    pub summary_delay: Duration,
    /// Session sizes offered once a file is loaded, in addition to "all".
    pub preset_counts: Vec<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            summary_delay: Duration::from_millis(1500),
            preset_counts: vec![10, 25, 50],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    pub summary_delay_ms: Option<u64>,
    pub preset_counts: Option<Vec<usize>>,
}

impl From<RawSettings> for Settings {
    fn from(raw_settings: RawSettings) -> Self {
        let defaults = Settings::default();
        Settings {
            summary_delay: raw_settings
                .summary_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.summary_delay),
            preset_counts: raw_settings
                .preset_counts
                .map(|counts| counts.into_iter().filter(|c| *c > 0).collect())
                .unwrap_or(defaults.preset_counts),
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> Result<Settings> {
        let raw_settings: RawSettings = toml::from_str(source)?;
        Ok(raw_settings.into())
    }

    pub fn open(path: &Path) -> Result<Settings> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Settings::from_toml(&source)
            .with_context(|| format!("invalid settings in {}", path.display()))
    }
}
