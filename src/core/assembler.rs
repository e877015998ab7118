use crate::core::fields;
use crate::core::slug::slugify;
use crate::domain::model::{GhostRecords, Post, PostTag, SourceDocument, Tag, STATUS_PUBLISHED};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AssemblerSettings {
    pub author_id: u64,
    pub language: String,
    pub max_title_length: usize,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            author_id: 1,
            language: "en_US".to_string(),
            max_title_length: fields::DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

/// Monotonic 1-based id sequence.
#[derive(Debug, Clone)]
struct IdCounter(u64);

impl IdCounter {
    fn new() -> Self {
        Self(1)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// Builds Ghost posts, tags and post-tag links from parsed Octopress files.
///
/// Ids are handed out in the order documents are added; a category label keeps
/// the tag id it received on first sighting.
#[derive(Debug)]
pub struct RecordAssembler {
    settings: AssemblerSettings,
    post_ids: IdCounter,
    tag_ids: IdCounter,
    post_tag_ids: IdCounter,
    categories: HashMap<String, u64>,
    records: GhostRecords,
}

impl RecordAssembler {
    pub fn new(settings: AssemblerSettings) -> Self {
        Self {
            settings,
            post_ids: IdCounter::new(),
            tag_ids: IdCounter::new(),
            post_tag_ids: IdCounter::new(),
            categories: HashMap::new(),
            records: GhostRecords::default(),
        }
    }

    /// Converts one document into a post and returns the post id.
    pub fn add_document(&mut self, document: &SourceDocument) -> Result<u64> {
        let post_id = self.post_ids.next_id();
        let author_id = self.settings.author_id;

        let mut post = Post {
            id: post_id,
            uuid: Uuid::new_v4().to_string(),
            title: None,
            slug: None,
            status: STATUS_PUBLISHED.to_string(),
            created_at: None,
            updated_at: None,
            published_at: None,
            markdown: String::new(),
            created_by: author_id,
            updated_by: author_id,
            published_by: author_id,
            language: self.settings.language.clone(),
        };
        let mut explicit_slug = None;

        for (field, value) in &document.metadata {
            match field.as_str() {
                "title" => {
                    let title = fields::clean_title(value);
                    post.slug = Some(slugify(&title));
                    post.title = Some(fields::truncate_title(&title, self.settings.max_title_length));
                }
                "slug" => explicit_slug = Some(value.clone()),
                "published" => post.status = fields::status_from_published(value).to_string(),
                "date" => {
                    let timestamp = fields::parse_timestamp(&document.path, value)?;
                    post.created_at = Some(timestamp);
                    post.updated_at = Some(timestamp);
                    post.published_at = Some(timestamp);
                }
                "categories" => {
                    for label in fields::category_labels(value) {
                        self.link_category(post_id, label);
                    }
                }
                _ => {}
            }
        }

        if explicit_slug.is_some() {
            post.slug = explicit_slug;
        }
        post.markdown = fields::rewrite_codeblocks(&document.body.join("\n"));

        tracing::debug!(
            "Post {} from {}: slug={:?}, status={}",
            post_id,
            document.path,
            post.slug,
            post.status
        );
        self.records.posts.push(post);
        Ok(post_id)
    }

    fn link_category(&mut self, post_id: u64, label: &str) {
        let tag_id = match self.categories.get(label) {
            Some(&tag_id) => tag_id,
            None => {
                let tag_id = self.tag_ids.next_id();
                self.categories.insert(label.to_string(), tag_id);
                self.records.tags.push(Tag {
                    id: tag_id,
                    slug: slugify(label),
                    name: fields::tag_display_name(label),
                    uuid: Uuid::new_v4().to_string(),
                });
                tracing::debug!("New tag {} for category {:?}", tag_id, label);
                tag_id
            }
        };

        self.records.posts_tags.push(PostTag {
            id: self.post_tag_ids.next_id(),
            post_id,
            tag_id,
        });
    }

    pub fn records(&self) -> &GhostRecords {
        &self.records
    }

    pub fn finish(self) -> GhostRecords {
        self.records
    }
}

/// Replaces `db[0].data.{posts,tags,posts_tags}` in a Ghost export, leaving
/// every other key untouched.
pub fn merge_into(document: &mut Value, records: &GhostRecords) -> Result<()> {
    let data = document
        .get_mut("db")
        .and_then(|db| db.get_mut(0))
        .and_then(|entry| entry.get_mut("data"))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| ConvertError::InvalidTargetDocument {
            message: "expected an object at db[0].data".to_string(),
        })?;

    data.insert("posts".to_string(), serde_json::to_value(&records.posts)?);
    data.insert("tags".to_string(), serde_json::to_value(&records.tags)?);
    data.insert(
        "posts_tags".to_string(),
        serde_json::to_value(&records.posts_tags)?,
    );
    Ok(())
}
