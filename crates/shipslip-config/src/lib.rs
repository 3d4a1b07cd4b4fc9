use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shipslip_core::{CoreError, KeywordLists, KeywordSet};
use thiserror::Error;

const APP_DIR: &str = "shipslip";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub keywords: KeywordLists,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordLists::builtin(),
        }
    }
}

impl AppConfig {
    pub fn keyword_set(&self) -> Result<KeywordSet> {
        KeywordSet::compile(&self.keywords).map_err(ConfigError::Keywords)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid keywords: {0}")]
    Keywords(#[source] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    keywords: Option<KeywordsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordsFile {
    replace_builtin: Option<bool>,
    name: Option<Vec<String>>,
    phone: Option<Vec<String>>,
    address: Option<Vec<String>>,
    stop_words: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(keywords) = parsed.keywords {
        let extra = KeywordLists {
            name: keywords.name.unwrap_or_default(),
            phone: keywords.phone.unwrap_or_default(),
            address: keywords.address.unwrap_or_default(),
            stop_words: keywords.stop_words.unwrap_or_default(),
        };
        if keywords.replace_builtin.unwrap_or(false) {
            config.keywords = KeywordLists::default();
        }
        config.keywords.extend(extra);
    }

    // Surface bad labels at load time rather than on first extraction.
    config.keyword_set()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, KeywordsFile};
    use shipslip_core::{KeywordKind, KeywordLists};
    use std::fs;
    use tempfile::TempDir;

    fn labels(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|value| value.to_string()).collect())
    }

    #[test]
    fn merge_config_extends_builtin_lists() {
        let parsed = ConfigFile {
            keywords: Some(KeywordsFile {
                phone: labels(&["Mobile", "Tel"]),
                ..KeywordsFile::default()
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        let builtin = KeywordLists::builtin();
        assert_eq!(merged.keywords.name, builtin.name);
        assert_eq!(merged.keywords.phone.len(), builtin.phone.len() + 1);
        assert_eq!(merged.keywords.phone.last().map(String::as_str), Some("Mobile"));
    }

    #[test]
    fn merge_config_can_replace_builtin_lists() {
        let parsed = ConfigFile {
            keywords: Some(KeywordsFile {
                replace_builtin: Some(true),
                name: labels(&["Name"]),
                phone: labels(&["Phone"]),
                address: labels(&["Address"]),
                stop_words: labels(&["PS"]),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.keywords.name, vec!["Name".to_string()]);
        assert_eq!(merged.keywords.stop_words, vec!["PS".to_string()]);
    }

    #[test]
    fn merge_config_rejects_incomplete_replacement() {
        let parsed = ConfigFile {
            keywords: Some(KeywordsFile {
                replace_builtin: Some(true),
                name: labels(&["Name"]),
                ..KeywordsFile::default()
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Keywords(shipslip_core::CoreError::EmptyKeywordList(
                KeywordKind::Phone
            ))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[keywords]\naddress = [\"Address\"]\nstop_words = [\"PS\"]\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(config.keywords.address.contains(&"Address".to_string()));
        assert!(config.keywords.address.contains(&"地址".to_string()));
        assert!(config.keywords.stop_words.contains(&"PS".to_string()));
    }

    #[test]
    fn load_at_path_rejects_unknown_fields() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[keywords]\nemail = [\"Mail\"]\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_at_path_rejects_blank_labels() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[keywords]\nname = [\"  \"]\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert_eq!(err.to_string(), "invalid keywords: blank keyword in name list");
    }
}
