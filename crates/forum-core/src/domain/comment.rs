use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a top-level response to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub text: String,
    pub user_id: i32,
    pub comment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i32,
    pub text: String,
    pub user_id: i32,
}

impl NewComment {
    pub fn new(post_id: i32, text: impl Into<String>, user_id: i32) -> Self {
        Self {
            post_id,
            text: text.into(),
            user_id,
        }
    }
}
