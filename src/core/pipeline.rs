use crate::core::assembler::{merge_into, AssemblerSettings, RecordAssembler};
use crate::core::front_matter;
use crate::core::{ConfigProvider, GhostRecords, Pipeline, SourceDocument, Storage};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Octopress → Ghost pipeline: posts come from `storage`, the Ghost export
/// named by the config is read at load time.
pub struct GhostPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GhostPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn assembler_settings(&self) -> AssemblerSettings {
        AssemblerSettings {
            author_id: self.config.author_id(),
            language: self.config.language().to_string(),
            max_title_length: self.config.max_title_length(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GhostPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceDocument>> {
        let files = self.storage.list_files(self.config.extensions()).await?;
        tracing::debug!(
            "Found {} files in {}",
            files.len(),
            self.config.input_folder()
        );

        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            let bytes = self.storage.read_file(&file).await?;
            let content = String::from_utf8(bytes).map_err(|e| {
                ConvertError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("{} is not valid UTF-8: {}", file, e),
                ))
            })?;

            let document = front_matter::parse(&file, &content)?;
            tracing::debug!(
                "Parsed {}: {} metadata fields, {} body lines",
                file,
                document.metadata.len(),
                document.body.len()
            );
            documents.push(document);
        }

        Ok(documents)
    }

    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<GhostRecords> {
        let mut assembler = RecordAssembler::new(self.assembler_settings());
        for document in &documents {
            assembler.add_document(document)?;
        }
        Ok(assembler.finish())
    }

    async fn load(&self, records: GhostRecords) -> Result<String> {
        let target_path = self.config.target_path();
        tracing::debug!("Reading Ghost export from {}", target_path);

        let raw = std::fs::read_to_string(target_path)?;
        let mut document: Value = serde_json::from_str(&raw)?;
        merge_into(&mut document, &records)?;

        let output = if self.config.pretty() {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(output)
    }
}
