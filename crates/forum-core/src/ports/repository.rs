use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, NewReply, NewUser, Post, Reply, User};
use crate::error::RepoError;

/// Generic repository trait defining the operations every collection supports.
///
/// `T` is the stored entity, `N` the candidate inserted to create one.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a candidate, returning the entity with its assigned ID and timestamp.
    async fn insert(&self, candidate: N) -> Result<T, RepoError>;
}

/// User repository.
pub trait UserRepository: BaseRepository<User, NewUser, i32> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    /// All posts in store order, with the author's username when known.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Hard-delete a post together with its comments and their replies.
    /// Returns the number of posts removed; deleting a missing post is not an error.
    async fn delete(&self, id: i32) -> Result<u64, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, i32> {
    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    /// Replace the text of a comment. Returns `None` if it does not exist.
    async fn update_text(&self, id: i32, text: String) -> Result<Option<Comment>, RepoError>;
}

/// Reply repository.
#[async_trait]
pub trait ReplyRepository: BaseRepository<Reply, NewReply, i32> {
    async fn list_by_comment(&self, comment_id: i32) -> Result<Vec<Reply>, RepoError>;

    /// Replace the text of a reply. Returns `None` if it does not exist.
    async fn update_text(&self, id: i32, text: String) -> Result<Option<Reply>, RepoError>;
}
