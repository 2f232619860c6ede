use std::sync::Arc;

use forum_core::domain::{Comment, NewPost, Post};
use forum_core::error::RepoError;
use forum_core::ports::{BaseRepository, CommentRepository, PostRepository, ReplyRepository};
use sea_orm::{DatabaseBackend, DbConn, DbErr, MockDatabase, MockExecResult, Transaction};

use super::entity::{comment, post, reply};
use super::postgres_base::map_db_err;
use super::postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, PostgresReplyRepository,
};

/// Drain the statements a mock connection received. Every repository built on it must be dropped.
fn transaction_log(db: Arc<DbConn>) -> Vec<Transaction> {
    match Arc::try_unwrap(db) {
        Ok(db) => db.into_transaction_log(),
        Err(_) => panic!("mock connection is still shared"),
    }
}

fn post_model(id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        user_id: 1,
        link: "http://x".to_owned(),
        post_date: chrono::Utc::now().into(),
    }
}

fn comment_model(id: i32, text: &str) -> comment::Model {
    comment::Model {
        id,
        post_id: 1,
        text: text.to_owned(),
        user_id: 2,
        comment_date: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(7, "Test Post")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 7);
    assert_eq!(post.author, None);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_post_returns_assigned_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(1, "Hello")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(db.clone());

    let created: Post = repo
        .insert(NewPost::new("Hello", "http://x", 1))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Hello");

    drop(repo);
    let log = transaction_log(db);
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("INSERT INTO"));
    assert!(statement.contains("posts"));
    assert!(statement.contains("Hello"));
}

#[tokio::test]
async fn test_delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.delete(3).await.unwrap(), 1);
    assert_eq!(repo.delete(3).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_comments_for_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![comment_model(1, "first"), comment_model(2, "second")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresCommentRepository::new(db);

    let comments: Vec<Comment> = repo.list_by_post(1).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].text, "second");
}

#[tokio::test]
async fn test_update_comment_text() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![comment_model(4, "final")]])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresCommentRepository::new(db.clone());

    let updated = repo
        .update_text(4, "final".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, 4);
    assert_eq!(updated.text, "final");

    drop(repo);
    let log = transaction_log(db);
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("UPDATE"));
    assert!(statement.contains("RETURNING"));
}

#[tokio::test]
async fn test_update_missing_comment() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<comment::Model>::new()])
        .into_connection();
    let db = Arc::new(db);

    let repo = PostgresCommentRepository::new(db.clone());

    let updated = repo.update_text(4, "final".to_string()).await.unwrap();
    assert!(updated.is_none());

    drop(repo);
    assert_eq!(transaction_log(db).len(), 1);
}

#[tokio::test]
async fn test_update_reply_removed_concurrently() {
    // The row is gone by the time the UPDATE runs: no rows come back.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<reply::Model>::new()])
        .into_connection();

    let repo = PostgresReplyRepository::new(Arc::new(db));

    let updated = repo.update_text(9, "late edit".to_string()).await.unwrap();
    assert!(updated.is_none());
}

#[test]
fn test_error_classification() {
    let err = map_db_err(DbErr::Custom(
        "insert on table \"posts\" violates foreign key constraint \"fk_posts_user\"".to_string(),
    ));
    assert!(matches!(err, RepoError::MissingReference(_)));

    let err = map_db_err(DbErr::Custom(
        "duplicate key value violates unique constraint \"users_username_key\"".to_string(),
    ));
    assert!(matches!(err, RepoError::Constraint(_)));

    let err = map_db_err(DbErr::Custom("syntax error".to_string()));
    assert!(matches!(err, RepoError::Query(_)));
}
