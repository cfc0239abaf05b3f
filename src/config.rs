use crate::errors::{FileOperation, IoError};
use crate::utils::normalize_path;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Optional per-project config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "boompie.toml";
/// Environment override for the template directory.
pub const TEMPLATE_DIR_ENV: &str = "BOOMPIE_TEMPLATE_DIR";
/// Fallback directory holding the descriptors shipped with the tool.
const BUNDLED_TEMPLATE_DIR: &str = "templates";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(boompie::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse config file at '{path}'")]
    #[diagnostic(code(boompie::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape of [`CONFIG_FILE`].
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    template_dir: Option<PathBuf>,
}

/// Where the template catalog is read from. The core tree algorithm takes
/// no configuration; only the commands that list and pick templates do.
#[derive(Debug, Clone)]
pub struct Config {
    /// Descriptors shipped with the tool.
    pub bundled_dir: PathBuf,
    /// User-supplied replacement for the bundled directory, if any.
    pub user_dir: Option<PathBuf>,
}
impl Config {
    /// Builds the configuration with the template directory resolved in
    /// precedence order: CLI flag, environment variable, config file,
    /// bundled default.
    pub fn resolve(flag: Option<&str>) -> Result<Self, ConfigError> {
        let mut user_dir = flag.map(normalize_path);

        if user_dir.is_none() {
            user_dir = std::env::var(TEMPLATE_DIR_ENV)
                .ok()
                .map(|dir| normalize_path(&dir));
        }

        if user_dir.is_none() {
            user_dir = Self::template_dir_from_file(Path::new(CONFIG_FILE))?;
        }

        Ok(Config {
            bundled_dir: PathBuf::from(BUNDLED_TEMPLATE_DIR),
            user_dir,
        })
    }

    fn template_dir_from_file(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed: ConfigFile = toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?;

        Ok(parsed.template_dir)
    }

    /// The directory the catalog is built from.
    pub fn template_dir(&self) -> &Path {
        self.user_dir.as_deref().unwrap_or(&self.bundled_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dir_replaces_bundled_dir() {
        let config = Config {
            bundled_dir: PathBuf::from("templates"),
            user_dir: Some(PathBuf::from("my-templates")),
        };

        assert_eq!(config.template_dir(), Path::new("my-templates"));
    }

    #[test]
    fn test_falls_back_to_bundled_dir() {
        let config = Config {
            bundled_dir: PathBuf::from("templates"),
            user_dir: None,
        };

        assert_eq!(config.template_dir(), Path::new("templates"));
    }

    #[test]
    fn test_reads_template_dir_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "template_dir = \"over/here\"").unwrap();

        let template_dir = Config::template_dir_from_file(&path).unwrap();

        assert_eq!(template_dir, Some(PathBuf::from("over/here")));
    }

    #[test]
    fn test_missing_config_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let template_dir = Config::template_dir_from_file(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(template_dir, None);
    }

    #[test]
    fn test_invalid_config_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "template_dir = [nope").unwrap();

        assert!(matches!(
            Config::template_dir_from_file(&path),
            Err(ConfigError::ParseToml { .. })
        ));
    }
}
