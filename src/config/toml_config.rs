use crate::utils::error::{KlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

crate::reflect_enum! {
    #[derive(Debug, Default)]
    pub enum OutputFormat {
        #[default]
        Text => "text",
        Json => "json",
        Yaml => "yaml",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlConfig {
    pub split: SplitConfig,
    pub join: JoinConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Every character is a delimiter on its own.
    pub delimiters: String,
    pub skip_empty: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiters: " ".to_string(),
            skip_empty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    pub delimiter: String,
    pub empty: String,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            delimiter: ", ".to_string(),
            empty: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub skip_null_fields: bool,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            skip_null_fields: true,
            pretty: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl KlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        validate_path("config", &path.as_ref().to_string_lossy())?;
        tracing::debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(KlError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KlError::Parse {
            format: "TOML",
            message: e.message().to_string(),
        })
    }

    /// 替換環境變數 (例如 ${KL_DELIMS})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("split.delimiters", &self.split.delimiters)
    }
}

impl Validate for KlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
