pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::Settings;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "octoghost")]
#[command(about = "Convert Octopress markdown posts into a Ghost JSON export")]
pub struct CliConfig {
    /// Folder containing the Octopress .markdown / .md posts
    #[arg(default_value = ".")]
    pub input_folder: String,

    /// Ghost export (from /ghost/debug) to merge the posts into
    #[arg(default_value = "output.json")]
    pub target_json: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pretty-print the merged document
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    #[arg(skip)]
    pub settings: Settings,
}

impl CliConfig {
    /// 載入 --config 指定的設定檔，沒有指定時保留預設值
    pub fn load_settings(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            self.settings = Settings::from_file(path)?;
            tracing::info!("📁 Loaded settings from {}", path);
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_folder", &self.input_folder)?;
        validation::validate_path("target_json", &self.target_json)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        self.settings.validate()
    }
}

impl ConfigProvider for CliConfig {
    fn input_folder(&self) -> &str {
        &self.input_folder
    }

    fn target_path(&self) -> &str {
        &self.target_json
    }

    fn extensions(&self) -> &[String] {
        &self.settings.input.extensions
    }

    fn author_id(&self) -> u64 {
        self.settings.ghost.author_id
    }

    fn language(&self) -> &str {
        &self.settings.ghost.language
    }

    fn max_title_length(&self) -> usize {
        self.settings.post.max_title_length
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_defaults() {
        let config = CliConfig::try_parse_from(["octoghost"]).unwrap();
        assert_eq!(config.input_folder, ".");
        assert_eq!(config.target_json, "output.json");
        assert!(config.config.is_none());
        assert!(!config.pretty);
        assert_eq!(config.extensions().to_vec(), vec!["markdown", "md"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_positional_arguments_and_flags() {
        let config = CliConfig::try_parse_from([
            "octoghost",
            "source/_posts",
            "ghost.json",
            "--pretty",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.input_folder(), "source/_posts");
        assert_eq!(config.target_path(), "ghost.json");
        assert!(config.pretty());
        assert!(config.verbose);
    }

    #[test]
    fn test_load_settings_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[ghost]\nauthor_id = 3\n").unwrap();

        let mut config = CliConfig::try_parse_from([
            "octoghost",
            "posts",
            "ghost.json",
            "--config",
            file.path().to_str().unwrap(),
        ])
        .unwrap();
        config.load_settings().unwrap();

        assert_eq!(config.author_id(), 3);
        assert_eq!(config.language(), "en_US");
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let mut config = CliConfig::try_parse_from(["octoghost"]).unwrap();
        config.target_json = String::new();
        assert!(config.validate().is_err());
    }
}
