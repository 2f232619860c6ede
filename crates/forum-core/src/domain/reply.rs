use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply entity - a response to a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i32,
    pub comment_id: i32,
    pub text: String,
    pub user_id: i32,
    pub reply_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub comment_id: i32,
    pub text: String,
    pub user_id: i32,
}

impl NewReply {
    pub fn new(comment_id: i32, text: impl Into<String>, user_id: i32) -> Self {
        Self {
            comment_id,
            text: text.into(),
            user_id,
        }
    }
}
