//! Data Transfer Objects - request bodies accepted by the API.
//!
//! Every field defaults when absent so that a missing field reaches the
//! validator as an empty value and is reported by name.

use serde::{Deserialize, Serialize};

/// Request to submit a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub link: String,
    pub user_id: i32,
}

/// Request to register a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(alias = "name")]
    pub username: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub text: String,
    pub user_id: i32,
}

/// Request to reply to a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateReplyRequest {
    pub text: String,
    pub user_id: i32,
}

/// Request to replace the text of a comment or reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTextRequest {
    pub text: String,
}
