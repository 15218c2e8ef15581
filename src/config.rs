use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional app config file. Every field has a sensible default, so a
/// missing or unreadable file just means "run with defaults".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub reply_delay_ms: Option<u64>, // default: 1000
    #[serde(default)]
    pub initial_role: Option<String>, // "teacher" | "student"
    #[serde(default)]
    pub theme: Option<String>, // e.g. "classic_light"
}

pub fn load_app_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(s) => match serde_json::from_str(&s) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[config] Invalid config {}: {e}", path.display());
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_app_config(&dir.path().join("nope.json"));
        assert!(config.reply_delay_ms.is_none());
        assert!(config.initial_role.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, "{not json").unwrap();
        let config = load_app_config(&path);
        assert!(config.reply_delay_ms.is_none());
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(
            &path,
            r#"{ "reply_delay_ms": 250, "initial_role": "teacher", "theme": "chalkboard_dark" }"#,
        )
        .unwrap();
        let config = load_app_config(&path);
        assert_eq!(config.reply_delay_ms, Some(250));
        assert_eq!(config.initial_role.as_deref(), Some("teacher"));
        assert_eq!(config.theme.as_deref(), Some("chalkboard_dark"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, r#"{ "theme": "high_contrast" }"#).unwrap();
        let config = load_app_config(&path);
        assert_eq!(config.theme.as_deref(), Some("high_contrast"));
        assert!(config.reply_delay_ms.is_none());
    }
}
