//! Engine configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GAME_DIR` | `./games` |
//! | `SCRIPT_PATH` | unset (Trouble Brewing) |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` / `PORT` | `3000` |
//! | `CORS_ALLOWED_ORIGINS` | `*` |

use std::path::PathBuf;

use grimoire_domain::{DomainError, Script};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port '{0}'")]
    InvalidPort(String),
    #[error("Could not read script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid script {path}: {source}")]
    Script { path: PathBuf, source: DomainError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub game_dir: PathBuf,
    pub script_path: Option<PathBuf>,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let server_port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        Ok(Self {
            game_dir: get("GAME_DIR").unwrap_or_else(|| "games".into()).into(),
            script_path: get("SCRIPT_PATH").map(PathBuf::from),
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".into()),
        })
    }

    /// Load the configured script, or the built-in edition when none is set.
    pub async fn load_script(&self) -> Result<Script, ConfigError> {
        let Some(path) = &self.script_path else {
            return Ok(Script::trouble_brewing());
        };

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ScriptRead {
                path: path.clone(),
                source,
            })?;
        Script::from_json(&json).map_err(|source| ConfigError::Script {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.game_dir, PathBuf::from("games"));
        assert_eq!(config.script_path, None);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cors_allowed_origins, "*");
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 8080);

        let config = config_from(&[("SERVER_PORT", "9000"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 9000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(matches!(
            config_from(&[("SERVER_PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = config_from(&[("GAME_DIR", "  "), ("SCRIPT_PATH", "")]).unwrap();
        assert_eq!(config.game_dir, PathBuf::from("games"));
        assert!(config.script_path.is_none());
    }

    #[tokio::test]
    async fn loads_built_in_script_by_default() {
        let script = config_from(&[]).unwrap().load_script().await.unwrap();
        assert_eq!(script.name(), "Trouble Brewing");
    }

    #[tokio::test]
    async fn loads_script_file() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let path = temp_dir.path().join("script.json");
        std::fs::write(
            &path,
            r#"{"name": "Teensy", "characters": [
                {"name": "Imp", "role_type": "D", "ability_timing": "N*",
                 "ability_description": "Each night*, choose a player: they die."}
            ]}"#,
        )
        .unwrap();

        let path = path.to_string_lossy().to_string();
        let config = config_from(&[("SCRIPT_PATH", &path)]).unwrap();
        let script = config.load_script().await.unwrap();

        assert_eq!(script.name(), "Teensy");
        assert!(script.contains("imp"));
    }

    #[tokio::test]
    async fn missing_script_file_is_reported() {
        let config = config_from(&[("SCRIPT_PATH", "/definitely/not/here.json")]).unwrap();
        assert!(matches!(
            config.load_script().await,
            Err(ConfigError::ScriptRead { .. })
        ));
    }
}
