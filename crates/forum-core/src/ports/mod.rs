//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that persistence gateways must implement.

mod repository;

pub use repository::{
    BaseRepository, CommentRepository, PostRepository, ReplyRepository, UserRepository,
};
