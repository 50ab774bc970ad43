//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BrainstormError, Result};

const DEV_APP_API_BASE: &str = "http://localhost:8080/api";
const DEV_AI_API_BASE: &str = "http://localhost:8000/api/v1/brainstorming";
const PROD_APP_API_PATH: &str = "/api";
const PROD_AI_API_PATH: &str = "/api/v1/brainstorming";

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Both backends on localhost.
    #[default]
    Development,
    /// Both backends behind one reverse proxy origin.
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = BrainstormError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(BrainstormError::config(format!(
                "unknown environment '{other}'"
            ))),
        }
    }
}

/// Resolved base URLs of both backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Application backend: auth, ideas, inquiries.
    pub app_api_base: String,
    /// AI brainstorming backend.
    pub ai_api_base: String,
}

impl ApiConfig {
    /// Built-in bases for `environment`.
    ///
    /// Production bases are paths on the proxy `origin`; without an origin
    /// they stay relative and requests will fail to build.
    pub fn for_environment(environment: Environment, origin: Option<&str>) -> Self {
        match environment {
            Environment::Development => Self {
                environment,
                app_api_base: DEV_APP_API_BASE.to_string(),
                ai_api_base: DEV_AI_API_BASE.to_string(),
            },
            Environment::Production => {
                let origin = origin.unwrap_or_default().trim_end_matches('/');
                Self {
                    environment,
                    app_api_base: format!("{origin}{PROD_APP_API_PATH}"),
                    ai_api_base: format!("{origin}{PROD_AI_API_PATH}"),
                }
            }
        }
    }

    /// Applies overrides from a config file or the environment.
    pub fn apply(&mut self, overrides: &ApiOverrides) {
        if let Some(base) = &overrides.app_api_base {
            self.app_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = &overrides.ai_api_base {
            self.ai_api_base = base.trim_end_matches('/').to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, base) in [("app", &self.app_api_base), ("ai", &self.ai_api_base)] {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(BrainstormError::config(format!(
                    "{name} API base '{base}' is not an absolute http(s) URL; set an origin"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development, None)
    }
}

/// Optional settings layered over the built-in defaults.
///
/// This is also the schema of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_api_base: Option<String>,
}

impl ApiOverrides {
    /// Layers `other` on top of `self`; set fields in `other` win.
    pub fn merge(mut self, other: ApiOverrides) -> Self {
        if other.environment.is_some() {
            self.environment = other.environment;
        }
        if other.origin.is_some() {
            self.origin = other.origin;
        }
        if other.app_api_base.is_some() {
            self.app_api_base = other.app_api_base;
        }
        if other.ai_api_base.is_some() {
            self.ai_api_base = other.ai_api_base;
        }
        self
    }

    /// Resolves the final configuration.
    pub fn resolve(&self) -> ApiConfig {
        let environment = self.environment.unwrap_or_default();
        let mut config = ApiConfig::for_environment(environment, self.origin.as_deref());
        config.apply(self);
        config
    }
}
