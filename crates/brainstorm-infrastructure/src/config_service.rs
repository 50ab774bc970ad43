//! Loads endpoint configuration from `config.toml` and the environment.

use brainstorm_core::config::{ApiConfig, ApiOverrides};
use brainstorm_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ENVIRONMENT: &str = "BRAINSTORM_ENV";
pub const ENV_APP_API: &str = "BRAINSTORM_APP_API";
pub const ENV_AI_API: &str = "BRAINSTORM_AI_API";
pub const ENV_ORIGIN: &str = "BRAINSTORM_ORIGIN";

/// Resolves [`ApiConfig`] from built-in defaults, then the config file,
/// then environment variables, then caller supplied overrides.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_file: PathBuf,
}

impl ConfigService {
    pub fn new(config_file: PathBuf) -> Self {
        Self { config_file }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Reads `config.toml`. A missing file yields no overrides.
    pub fn load_file(&self) -> Result<ApiOverrides> {
        if !self.config_file.exists() {
            tracing::debug!(path = %self.config_file.display(), "no config file");
            return Ok(ApiOverrides::default());
        }
        let content = fs::read_to_string(&self.config_file)?;
        Ok(toml::from_str(&content)?)
    }

    /// Full resolution with `cli` as the top layer.
    pub fn resolve(&self, cli: ApiOverrides) -> Result<ApiConfig> {
        let env = env_overrides(|key| std::env::var(key).ok())?;
        let config = self.load_file()?.merge(env).merge(cli).resolve();
        config.validate()?;
        tracing::debug!(
            environment = %config.environment,
            app = %config.app_api_base,
            ai = %config.ai_api_base,
            "resolved API configuration"
        );
        Ok(config)
    }
}

/// Builds overrides from `BRAINSTORM_*` variables read through `lookup`.
/// Empty values count as unset.
pub fn env_overrides<F>(lookup: F) -> Result<ApiOverrides>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let environment = get(ENV_ENVIRONMENT).map(|v| v.parse()).transpose()?;
    Ok(ApiOverrides {
        environment,
        origin: get(ENV_ORIGIN),
        app_api_base: get(ENV_APP_API),
        ai_api_base: get(ENV_AI_API),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainstorm_core::config::Environment;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(dir.path().join("config.toml"));
        assert_eq!(service.load_file().unwrap(), ApiOverrides::default());
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "environment = \"production\"\norigin = \"https://ideas.example.com\"\n",
        )
        .unwrap();

        let overrides = ConfigService::new(path).load_file().unwrap();
        assert_eq!(overrides.environment, Some(Environment::Production));
        assert_eq!(
            overrides.resolve().app_api_base,
            "https://ideas.example.com/api"
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_ENVIRONMENT, "prod"),
            (ENV_AI_API, "http://ai.internal:8000/api/v1/brainstorming"),
            (ENV_APP_API, "  "),
        ]
        .into_iter()
        .collect();

        let overrides = env_overrides(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(overrides.environment, Some(Environment::Production));
        assert_eq!(overrides.app_api_base, None);
        assert_eq!(
            overrides.ai_api_base.as_deref(),
            Some("http://ai.internal:8000/api/v1/brainstorming")
        );
    }

    #[test]
    fn test_bad_env_value_is_config_error() {
        let err = env_overrides(|k| (k == ENV_ENVIRONMENT).then(|| "staging".to_string()))
            .unwrap_err();
        assert!(matches!(err, brainstorm_core::BrainstormError::Config(_)));
    }
}
