pub mod assembler;
pub mod etl;
pub mod fields;
pub mod front_matter;
pub mod pipeline;
pub mod slug;

pub use crate::domain::model::{GhostRecords, Post, PostTag, SourceDocument, Tag};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
