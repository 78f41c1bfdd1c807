use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::VocabularySource;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Custom skill vocabulary; the built-in list is used when unset.
    pub skills_file: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skills_file: optional_env("SKILLS_FILE").map(PathBuf::from),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    pub fn vocabulary_source(&self) -> VocabularySource {
        match &self.skills_file {
            Some(path) => VocabularySource::File(path.clone()),
            None => VocabularySource::Builtin,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            skills_file: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_source_defaults_to_builtin() {
        assert_eq!(Config::default().vocabulary_source(), VocabularySource::Builtin);
    }

    #[test]
    fn test_vocabulary_source_from_skills_file() {
        let config = Config {
            skills_file: Some(PathBuf::from("skills.txt")),
            ..Config::default()
        };
        assert_eq!(
            config.vocabulary_source(),
            VocabularySource::File(PathBuf::from("skills.txt"))
        );
    }
}
