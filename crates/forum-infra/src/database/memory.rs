//! In-memory persistence gateway - used when no database is configured.
//!
//! Each collection is an ordered list with a monotonically increasing ID
//! counter; lookups are linear scans. Referential integrity and the
//! username uniqueness constraint are checked on insert, and deleting a post
//! removes its comments and replies the way the foreign keys cascade.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use forum_core::domain::{
    Comment, NewComment, NewPost, NewReply, NewUser, Post, Reply, User,
};
use forum_core::error::RepoError;
use forum_core::ports::{
    BaseRepository, CommentRepository, PostRepository, ReplyRepository, UserRepository,
};

struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory store backing all four repositories.
///
/// Locks are always taken in the order users, posts, comments, replies.
pub struct InMemoryStore {
    users: RwLock<Table<User>>,
    posts: RwLock<Table<Post>>,
    comments: RwLock<Table<Comment>>,
    replies: RwLock<Table<Reply>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Table::new()),
            posts: RwLock::new(Table::new()),
            comments: RwLock::new(Table::new()),
            replies: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(entity: &str, id: i32) -> RepoError {
    RepoError::MissingReference(format!("{entity} with ID {id} does not exist"))
}

#[async_trait]
impl BaseRepository<User, NewUser, i32> for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, candidate: NewUser) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        if users.rows.iter().any(|u| u.username == candidate.username) {
            return Err(RepoError::Constraint(format!(
                "username '{}' already exists",
                candidate.username
            )));
        }

        let user = User {
            id: users.next_id(),
            username: candidate.username,
            date_created: Utc::now(),
            karma: 0,
        };
        users.rows.push(user.clone());
        Ok(user)
    }
}

impl UserRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<Post, NewPost, i32> for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, candidate: NewPost) -> Result<Post, RepoError> {
        let users = self.users.read().await;
        if !users.rows.iter().any(|u| u.id == candidate.user_id) {
            return Err(missing("user", candidate.user_id));
        }

        let mut posts = self.posts.write().await;
        let post = Post {
            id: posts.next_id(),
            title: candidate.title,
            link: candidate.link,
            user_id: candidate.user_id,
            post_date: Utc::now(),
            author: None,
        };
        posts.rows.push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let users = self.users.read().await;
        let posts = self.posts.read().await;

        Ok(posts
            .rows
            .iter()
            .map(|post| {
                let mut post = post.clone();
                post.author = users
                    .rows
                    .iter()
                    .find(|u| u.id == post.user_id)
                    .map(|u| u.username.clone());
                post
            })
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let mut comments = self.comments.write().await;
        let mut replies = self.replies.write().await;

        let before = posts.rows.len();
        posts.rows.retain(|p| p.id != id);
        let removed = (before - posts.rows.len()) as u64;

        let orphaned: Vec<i32> = comments
            .rows
            .iter()
            .filter(|c| c.post_id == id)
            .map(|c| c.id)
            .collect();
        comments.rows.retain(|c| c.post_id != id);
        replies.rows.retain(|r| !orphaned.contains(&r.comment_id));

        Ok(removed)
    }
}

#[async_trait]
impl BaseRepository<Comment, NewComment, i32> for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, candidate: NewComment) -> Result<Comment, RepoError> {
        let users = self.users.read().await;
        if !users.rows.iter().any(|u| u.id == candidate.user_id) {
            return Err(missing("user", candidate.user_id));
        }
        let posts = self.posts.read().await;
        if !posts.rows.iter().any(|p| p.id == candidate.post_id) {
            return Err(missing("post", candidate.post_id));
        }

        let mut comments = self.comments.write().await;
        let comment = Comment {
            id: comments.next_id(),
            post_id: candidate.post_id,
            text: candidate.text,
            user_id: candidate.user_id,
            comment_date: Utc::now(),
        };
        comments.rows.push(comment.clone());
        Ok(comment)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments
            .rows
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn update_text(&self, id: i32, text: String) -> Result<Option<Comment>, RepoError> {
        let mut comments = self.comments.write().await;
        Ok(comments.rows.iter_mut().find(|c| c.id == id).map(|comment| {
            comment.text = text;
            comment.clone()
        }))
    }
}

#[async_trait]
impl BaseRepository<Reply, NewReply, i32> for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Reply>, RepoError> {
        let replies = self.replies.read().await;
        Ok(replies.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, candidate: NewReply) -> Result<Reply, RepoError> {
        let users = self.users.read().await;
        if !users.rows.iter().any(|u| u.id == candidate.user_id) {
            return Err(missing("user", candidate.user_id));
        }
        let comments = self.comments.read().await;
        if !comments.rows.iter().any(|c| c.id == candidate.comment_id) {
            return Err(missing("comment", candidate.comment_id));
        }

        let mut replies = self.replies.write().await;
        let reply = Reply {
            id: replies.next_id(),
            comment_id: candidate.comment_id,
            text: candidate.text,
            user_id: candidate.user_id,
            reply_date: Utc::now(),
        };
        replies.rows.push(reply.clone());
        Ok(reply)
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStore {
    async fn list_by_comment(&self, comment_id: i32) -> Result<Vec<Reply>, RepoError> {
        let replies = self.replies.read().await;
        Ok(replies
            .rows
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .cloned()
            .collect())
    }

    async fn update_text(&self, id: i32, text: String) -> Result<Option<Reply>, RepoError> {
        let mut replies = self.replies.write().await;
        Ok(replies.rows.iter_mut().find(|r| r.id == id).map(|reply| {
            reply.text = text;
            reply.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryStore, User, Post) {
        let store = InMemoryStore::new();
        let users: &dyn UserRepository = &store;
        let user = users.insert(NewUser::new("alice")).await.unwrap();
        let posts: &dyn PostRepository = &store;
        let post = posts
            .insert(NewPost::new("Hello", "http://x", user.id))
            .await
            .unwrap();
        (store, user, post)
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let (store, user, first) = seeded().await;
        let posts: &dyn PostRepository = &store;
        let second = posts
            .insert(NewPost::new("Again", "http://y", user.id))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(posts.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_list_fills_author() {
        let (store, _, _) = seeded().await;
        let posts: &dyn PostRepository = &store;

        let listed = posts.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_post_requires_existing_user() {
        let store = InMemoryStore::new();
        let posts: &dyn PostRepository = &store;

        let result = posts.insert(NewPost::new("Hello", "http://x", 9)).await;
        assert!(matches!(result, Err(RepoError::MissingReference(_))));
        assert!(posts.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let (store, _, _) = seeded().await;
        let users: &dyn UserRepository = &store;

        let result = users.insert(NewUser::new("alice")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_delete_cascades_and_is_idempotent() {
        let (store, user, post) = seeded().await;
        let comments: &dyn CommentRepository = &store;
        let replies: &dyn ReplyRepository = &store;
        let posts: &dyn PostRepository = &store;

        let comment = comments
            .insert(NewComment::new(post.id, "first", user.id))
            .await
            .unwrap();
        replies
            .insert(NewReply::new(comment.id, "second", user.id))
            .await
            .unwrap();

        assert_eq!(posts.delete(post.id).await.unwrap(), 1);
        assert_eq!(posts.find_by_id(post.id).await.unwrap(), None);
        assert!(comments.list_by_post(post.id).await.unwrap().is_empty());
        assert!(replies.list_by_comment(comment.id).await.unwrap().is_empty());

        assert_eq!(posts.delete(post.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_text() {
        let (store, user, post) = seeded().await;
        let comments: &dyn CommentRepository = &store;

        let comment = comments
            .insert(NewComment::new(post.id, "draft", user.id))
            .await
            .unwrap();
        let updated = comments
            .update_text(comment.id, "final".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.text, "final");
        assert_eq!(updated.comment_date, comment.comment_date);
        assert!(comments.update_text(99, "x".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reply_requires_existing_comment() {
        let (store, user, _) = seeded().await;
        let replies: &dyn ReplyRepository = &store;

        let result = replies.insert(NewReply::new(5, "hi", user.id)).await;
        assert!(matches!(result, Err(RepoError::MissingReference(_))));
    }
}
