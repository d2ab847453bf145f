//! Plain settings record and a minimal INI section reader for it
//!
//! Keys are mapped to fields through a fixed table of setters instead of any
//! form of runtime type inspection:
//!
//! ```ini
//! ; logger settings
//! [log]
//! level = info
//! path = /var/log/app
//! name = app.log
//! max_size = 10485760
//! split_by_size = true
//! ```

use crate::{FileLoggerConfig, RotationPolicy};
use rotor_logger::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Writer settings as handed over by a configuration source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Minimum level name, e.g. `"info"`
    pub level: String,
    /// Directory holding the log files
    pub path: PathBuf,
    /// Primary file name
    pub name: String,
    /// Size threshold in bytes, used when `split_by_size` is set
    pub max_size: u64,
    /// Rotate by size when true, by day when false
    pub split_by_size: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            path: PathBuf::from("."),
            name: "app.log".to_string(),
            max_size: 10 * 1024 * 1024,
            split_by_size: true,
        }
    }
}

type Setter = fn(&mut LoggerSettings, &str) -> Result<()>;

/// INI key to field setter
const FIELDS: &[(&str, Setter)] = &[
    ("level", set_level),
    ("path", set_path),
    ("name", set_name),
    ("max_size", set_max_size),
    ("split_by_size", set_split_by_size),
];

fn set_level(settings: &mut LoggerSettings, value: &str) -> Result<()> {
    settings.level = value.to_string();
    Ok(())
}

fn set_path(settings: &mut LoggerSettings, value: &str) -> Result<()> {
    settings.path = PathBuf::from(value);
    Ok(())
}

fn set_name(settings: &mut LoggerSettings, value: &str) -> Result<()> {
    settings.name = value.to_string();
    Ok(())
}

fn set_max_size(settings: &mut LoggerSettings, value: &str) -> Result<()> {
    settings.max_size = value.parse().map_err(|_| Error::Settings {
        key: "max_size".to_string(),
        message: format!("{value:?} is not a byte count"),
    })?;
    Ok(())
}

fn set_split_by_size(settings: &mut LoggerSettings, value: &str) -> Result<()> {
    settings.split_by_size = match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => {
            return Err(Error::Settings {
                key: "split_by_size".to_string(),
                message: format!("{value:?} is not a boolean"),
            });
        }
    };
    Ok(())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

impl LoggerSettings {
    /// Read `[section]` from INI text. Keys outside the section and unknown
    /// keys are ignored; fields without a key keep their defaults.
    pub fn from_ini_str(text: &str, section: &str) -> Result<Self> {
        let mut settings = Self::default();
        let mut current: Option<&str> = None;
        let mut found = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let at = || format!("line {}", idx + 1);

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| Error::Settings {
                    key: at(),
                    message: "unterminated section header".to_string(),
                })?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(Error::Settings {
                        key: at(),
                        message: "empty section name".to_string(),
                    });
                }
                found |= name == section;
                current = Some(name);
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| Error::Settings {
                key: at(),
                message: format!("expected `key = value`, got {line:?}"),
            })?;
            if key.trim().is_empty() {
                return Err(Error::Settings {
                    key: at(),
                    message: format!("missing key before `=` in {line:?}"),
                });
            }

            if current != Some(section) {
                continue;
            }

            let key = key.trim().to_ascii_lowercase();
            let value = unquote(value.trim());
            if let Some((_, set)) = FIELDS.iter().find(|(name, _)| *name == key) {
                set(&mut settings, value)?;
            }
        }

        if !found {
            return Err(Error::Settings {
                key: format!("[{section}]"),
                message: "section not found".to_string(),
            });
        }
        Ok(settings)
    }

    /// Read `[section]` from an INI file
    pub fn from_ini_file(path: impl AsRef<Path>, section: &str) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini_str(&text, section)
    }

    /// Typed writer configuration. Fails on an unknown level name.
    pub fn to_config(&self) -> Result<FileLoggerConfig> {
        let config = FileLoggerConfig {
            level: self.level.parse()?,
            directory: self.path.clone(),
            file_name: self.name.clone(),
            rotation: if self.split_by_size {
                RotationPolicy::BySize {
                    max_bytes: self.max_size,
                }
            } else {
                RotationPolicy::Daily
            },
            utc_offset_secs: None,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rotor_logger::Level;

    const SAMPLE: &str = "; service configuration\r\n\
        [mysql]\r\n\
        addr = 127.0.0.1\r\n\
        port = 3306\r\n\
        \r\n\
        [log]\r\n\
        # written by ops\r\n\
        level = WARNING\r\n\
        path = \"/var/log/app\"\r\n\
        name = app.log\r\n\
        max_size = 4096\r\n\
        split_by_size = false\r\n\
        color = auto\r\n";

    #[test]
    fn test_reads_only_the_requested_section() {
        let settings = LoggerSettings::from_ini_str(SAMPLE, "log").unwrap();
        assert_eq!(
            settings,
            LoggerSettings {
                level: "WARNING".to_string(),
                path: PathBuf::from("/var/log/app"),
                name: "app.log".to_string(),
                max_size: 4096,
                split_by_size: false,
            }
        );
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let settings = LoggerSettings::from_ini_str("[log]\nname = svc.log\n", "log").unwrap();
        assert_eq!(settings.name, "svc.log");
        assert_eq!(settings.level, LoggerSettings::default().level);
        assert!(settings.split_by_size);
    }

    #[test]
    fn test_syntax_errors_name_the_line() {
        assert_matches!(
            LoggerSettings::from_ini_str("[log\nlevel = info\n", "log"),
            Err(Error::Settings { key, .. }) if key == "line 1"
        );
        assert_matches!(
            LoggerSettings::from_ini_str("[log]\n\nlevel info\n", "log"),
            Err(Error::Settings { key, .. }) if key == "line 3"
        );
    }

    #[test]
    fn test_empty_section_and_key_are_syntax_errors() {
        assert_matches!(
            LoggerSettings::from_ini_str("[log]\nlevel = info\n[ ]\n", "log"),
            Err(Error::Settings { key, .. }) if key == "line 3"
        );
        assert_matches!(
            LoggerSettings::from_ini_str("[log]\n = info\n", "log"),
            Err(Error::Settings { key, .. }) if key == "line 2"
        );
        // Outside the requested section too
        assert_matches!(
            LoggerSettings::from_ini_str("[other]\n= x\n[log]\n", "log"),
            Err(Error::Settings { key, .. }) if key == "line 2"
        );
    }

    #[test]
    fn test_bad_values() {
        assert_matches!(
            LoggerSettings::from_ini_str("[log]\nmax_size = big\n", "log"),
            Err(Error::Settings { key, .. }) if key == "max_size"
        );
        assert_matches!(
            LoggerSettings::from_ini_str("[log]\nsplit_by_size = maybe\n", "log"),
            Err(Error::Settings { key, .. }) if key == "split_by_size"
        );
        assert_matches!(
            LoggerSettings::from_ini_str("[mysql]\nport = 1\n", "log"),
            Err(Error::Settings { key, .. }) if key == "[log]"
        );
    }

    #[test]
    fn test_to_config() {
        let config = LoggerSettings::from_ini_str(SAMPLE, "log")
            .unwrap()
            .to_config()
            .unwrap();
        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.rotation, RotationPolicy::Daily);
        assert_eq!(config.primary_path(), PathBuf::from("/var/log/app/app.log"));

        let settings = LoggerSettings {
            split_by_size: true,
            max_size: 100,
            ..LoggerSettings::default()
        };
        assert_eq!(
            settings.to_config().unwrap().rotation,
            RotationPolicy::BySize { max_bytes: 100 }
        );
    }

    #[test]
    fn test_unparseable_level_is_a_config_error() {
        let settings = LoggerSettings {
            level: "chatty".to_string(),
            ..LoggerSettings::default()
        };
        assert_matches!(settings.to_config(), Err(Error::InvalidLevel(_)));
    }

    #[test]
    fn test_from_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(
            LoggerSettings::from_ini_file(&path, "log").unwrap().max_size,
            4096
        );
        assert_matches!(
            LoggerSettings::from_ini_file(dir.path().join("missing.ini"), "log"),
            Err(Error::Open { .. })
        );
    }
}
