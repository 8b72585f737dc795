use crate::adapters::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, OfflineTable};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub offline_tables: Vec<OfflineTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RAPIDAPI_KEY})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// CLI flags win over the file; offline tables from both are kept.
    #[cfg(feature = "cli")]
    pub fn merge_cli(&mut self, cli: &crate::config::CliConfig) {
        if let Some(endpoint) = &cli.api_endpoint {
            self.source.endpoint = endpoint.clone();
        }
        if let Some(key) = &cli.api_key {
            self.source.api_key = Some(key.clone());
        }
        self.offline_tables.extend(cli.offline_tables.iter().cloned());
    }

    fn has_unresolved_key(&self) -> bool {
        self.source
            .api_key
            .as_deref()
            .is_some_and(|key| key.starts_with("${"))
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        if self.has_unresolved_key() {
            return None;
        }
        self.source.api_key.as_deref().filter(|key| !key.is_empty())
    }

    fn offline_tables(&self) -> &[OfflineTable] {
        &self.offline_tables
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        crate::config::validate_offline_tables("offline_tables", &self.offline_tables)?;

        if self.has_unresolved_key() {
            tracing::warn!("⚠️ source.api_key references an unset environment variable; sending requests without a key");
        }
        Ok(())
    }
}
