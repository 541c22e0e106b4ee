use dirs::data_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Every misspelled word followed by the statistics.
    All,
    /// Statistics only.
    Summary,
    Quiet,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    #[serde(default = "default_report")]
    pub report: ReportMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            report: default_report(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&text)?;
        if let Some(dictionary) = expand_tilde(&config.dictionary) {
            config.dictionary = dictionary;
        }
        Ok(config)
    }
}

fn default_report() -> ReportMode {
    ReportMode::All
}

fn default_dictionary() -> PathBuf {
    match data_dir() {
        Some(dir) => dir.join("speller").join("large"),
        None => PathBuf::from("dictionaries/large"),
    }
}

pub fn expand_tilde<P: AsRef<Path>>(path_user_input: P) -> Option<PathBuf> {
    let p = path_user_input.as_ref();
    if !p.starts_with("~") {
        return Some(p.to_path_buf());
    }
    if p == Path::new("~") {
        return dirs::home_dir();
    }
    let rest = p.strip_prefix("~").ok()?;
    dirs::home_dir().map(|h| h.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = write_config("{}");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary, default_dictionary());
        assert_eq!(config.report, ReportMode::All);
    }

    #[test]
    fn config_fields() {
        let file = write_config(r#"{"dictionary": "/tmp/words", "report": "summary"}"#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary, PathBuf::from("/tmp/words"));
        assert_eq!(config.report, ReportMode::Summary);
    }

    #[test]
    fn bad_config() {
        let file = write_config(r#"{"report": "loud"}"#);
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/speller.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(
            expand_tilde("/abs/path"),
            Some(PathBuf::from("/abs/path"))
        );
        assert_eq!(expand_tilde("rel"), Some(PathBuf::from("rel")));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), Some(home.clone()));
            assert_eq!(expand_tilde("~/words"), Some(home.join("words")));
        }
    }
}
