use crate::model::ChatRole;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub role: ChatRole,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    /// Base URL with any trailing slash removed, so paths can be appended.
    pub fn backend_url(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|url| url.trim_end_matches('/').to_string())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "classdesk", "classdesk").context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig::load(&tmp.path().join("config.json")).unwrap();
        assert!(config.base_url.is_none());
        assert_eq!(config.role, ChatRole::Student);
        assert!(!config.dark_mode);
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = AppConfig {
            base_url: Some("http://localhost:8000".to_string()),
            role: ChatRole::Parent,
            student_id: Some(42),
            dark_mode: true,
        };
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(loaded.role, ChatRole::Parent);
        assert_eq!(loaded.student_id, Some(42));
        assert!(loaded.dark_mode);
    }

    #[test]
    fn backend_url_strips_trailing_slash() {
        let config = AppConfig {
            base_url: Some("http://localhost:8000/".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.backend_url().as_deref(),
            Some("http://localhost:8000")
        );
    }
}
