use crate::core::{ColumnMap, ConfigProvider};
use crate::utils::error::{DocgenError, Result};
use crate::utils::validation::{validate_distinct_columns, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SOURCE_PATH: &str = "names/names_data.csv";
pub const DEFAULT_TARGET_PATH: &str = "website/docs/guides/custom-service-endpoints.html.md";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub target: TargetConfig,
    pub columns: ColumnMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SOURCE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_TARGET_PATH.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DocgenError::io("read config", path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DocgenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NAMES_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DocgenError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn target_path(&self) -> &str {
        &self.target.path
    }

    fn columns(&self) -> ColumnMap {
        self.columns
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", &self.source.path)?;
        validate_path("target.path", &self.target.path)?;
        validate_distinct_columns("columns", &self.columns.entries())?;
        Ok(())
    }
}
