//! # Forum Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;

pub use dto::{
    CreateCommentRequest, CreatePostRequest, CreateReplyRequest, CreateUserRequest,
    UpdateTextRequest,
};
