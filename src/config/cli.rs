use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use glob::MatchOptions;
use std::fs;
use std::path::Path;

/// Reads posts from a folder on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn list_files(&self, extensions: &[String]) -> Result<Vec<String>> {
        let base = glob::Pattern::escape(&self.base_path);
        let mut listed = Vec::new();

        for extension in extensions {
            let pattern = format!("{}/*.{}", base, extension);
            let mut names = Vec::new();
            // 與 shell 相同，隱藏檔（例如 macOS 的 ._post.md）不列入
            let options = MatchOptions {
                require_literal_leading_dot: true,
                ..Default::default()
            };
            for entry in glob::glob_with(&pattern, options)? {
                let path = entry.map_err(|e| ConvertError::IoError(e.into()))?;
                if !path.is_file() {
                    continue;
                }
                match path.file_name().and_then(|n| n.to_str()) {
                    Some(name) => names.push(name.to_string()),
                    None => tracing::warn!("Skipping {}: file name is not valid UTF-8", path.display()),
                }
            }
            // 依檔名排序，確保每次執行的文章編號一致
            names.sort();
            listed.extend(names);
        }

        Ok(listed)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
