use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a link submitted to the forum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub link: String,
    pub user_id: i32,
    pub post_date: DateTime<Utc>,
    /// Username of the author, filled in by listing queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub link: String,
    pub user_id: i32,
}

impl NewPost {
    pub fn new(title: impl Into<String>, link: impl Into<String>, user_id: i32) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            user_id,
        }
    }
}
