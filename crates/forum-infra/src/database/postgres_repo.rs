//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use forum_core::domain::{Comment, Post, Reply};
use forum_core::error::RepoError;
use forum_core::ports::{CommentRepository, PostRepository, ReplyRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::reply::{self, Entity as ReplyEntity};
use super::entity::user::Entity as UserEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL reply repository.
pub type PostgresReplyRepository = PostgresBaseRepository<ReplyEntity>;

impl UserRepository for PostgresUserRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(model, author)| {
                let mut post = Post::from(model);
                post.author = author.map(|user| user.username);
                post
            })
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepoError> {
        // Comments and replies go with the post through ON DELETE CASCADE.
        let result = PostEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = id, rows = result.rows_affected, "Deleted post");
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_text(&self, id: i32, text: String) -> Result<Option<Comment>, RepoError> {
        // Single UPDATE ... RETURNING; a row deleted concurrently yields no rows.
        let updated = CommentEntity::update_many()
            .col_expr(comment::Column::Text, Expr::value(text))
            .filter(comment::Column::Id.eq(id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}

#[async_trait]
impl ReplyRepository for PostgresReplyRepository {
    async fn list_by_comment(&self, comment_id: i32) -> Result<Vec<Reply>, RepoError> {
        let result = ReplyEntity::find()
            .filter(reply::Column::CommentId.eq(comment_id))
            .order_by_asc(reply::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_text(&self, id: i32, text: String) -> Result<Option<Reply>, RepoError> {
        let updated = ReplyEntity::update_many()
            .col_expr(reply::Column::Text, Expr::value(text))
            .filter(reply::Column::Id.eq(id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}
