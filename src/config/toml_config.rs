use crate::core::fields::DEFAULT_MAX_TITLE_LENGTH;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Optional settings file; every section falls back to the Ghost defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ghost: GhostSettings,
    pub input: InputSettings,
    pub post: PostSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostSettings {
    pub author_id: u64,
    pub language: String,
}

impl Default for GhostSettings {
    fn default() -> Self {
        Self {
            author_id: 1,
            language: "en_US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub extensions: Vec<String>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["markdown".to_string(), "md".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSettings {
    pub max_title_length: usize,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GHOST_LANGUAGE})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.ghost.author_id == 0 {
            return Err(ConvertError::InvalidConfigValueError {
                field: "ghost.author_id".to_string(),
                value: self.ghost.author_id.to_string(),
                reason: "Ghost user ids start at 1".to_string(),
            });
        }
        validation::validate_non_empty_string("ghost.language", &self.ghost.language)?;
        validation::validate_extensions("input.extensions", &self.input.extensions)?;
        validation::validate_positive_number("post.max_title_length", self.post.max_title_length, 1)?;
        Ok(())
    }
}
