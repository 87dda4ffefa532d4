use agent_field::{FieldConfig, Random};
use log::info;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse settings in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub frame_interval_millis: u64,
    pub field: FieldConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_millis: 16,
            field: FieldConfig::default(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            info!("No settings file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let result = Self::parse(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded settings from {}", path.display());
        Ok(result)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_millis)
    }

    pub fn random(&self) -> Random {
        self.seed.map_or_else(Random::new, Random::from_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_field_table_keeps_other_defaults() {
        let settings = Settings::parse(
            r#"
            seed = 7

            [field]
            agent_count = 12
            grid_gap = -1.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.frame_interval(), Duration::from_millis(16));
        assert_eq!(settings.field.agent_count, 12);
        assert_eq!(settings.field.grid_gap, -1.0);
        assert_eq!(settings.field.link_dist, FieldConfig::default().link_dist);
    }

    #[test]
    fn seeded_settings_are_reproducible() {
        let settings = Settings {
            seed: Some(3),
            ..Settings::default()
        };
        let mut a = settings.random();
        let mut b = settings.random();
        assert_eq!(a.next_in_extent(1000.0), b.next_in_extent(1000.0));
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frame_interval_millis = 33\n[field]\nspeed = 0.8").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.frame_interval(), Duration::from_millis(33));
        assert_eq!(settings.field.speed, 0.8);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[field]\nagent_count = \"many\"").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().starts_with("could not parse settings in"));
    }

    #[test]
    fn bundled_settings_file_parses() {
        let text = include_str!("../ambient-field.toml");
        let settings = Settings::parse(text).unwrap();
        assert_eq!(settings.field, FieldConfig::default());
    }
}
