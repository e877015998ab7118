use serde::{Deserialize, Serialize};

pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_DRAFT: &str = "draft";

/// 一個 markdown 檔案解析後的結果：front matter 欄位（保留原順序）與內文行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: String,
    pub metadata: Vec<(String, String)>,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<i64>,
    pub markdown: String,
    pub created_by: u64,
    pub updated_by: u64,
    pub published_by: u64,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTag {
    pub id: u64,
    pub post_id: u64,
    pub tag_id: u64,
}

/// transform 階段的輸出，load 階段會把三個集合寫回 Ghost 匯出檔
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GhostRecords {
    pub posts: Vec<Post>,
    pub tags: Vec<Tag>,
    pub posts_tags: Vec<PostTag>,
}
