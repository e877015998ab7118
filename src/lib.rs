#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, toml_config::Settings, CliConfig};

pub use crate::core::{
    assembler::{merge_into, AssemblerSettings, RecordAssembler},
    etl::EtlEngine,
    pipeline::GhostPipeline,
};
pub use domain::model::{GhostRecords, Post, PostTag, SourceDocument, Tag};
pub use utils::error::{ConvertError, Result};
