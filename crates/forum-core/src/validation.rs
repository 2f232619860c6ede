//! Payload validation - pure checks run before anything reaches a repository.

use url::Url;

use crate::domain::{NewComment, NewPost, NewReply, NewUser};
use crate::error::DomainError;

/// Parse a path segment into an entity ID.
pub fn parse_id(raw: &str) -> Result<i32, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::InvalidId("missing ID in path".to_string()));
    }
    raw.parse::<i32>()
        .map_err(|_| DomainError::InvalidId(raw.to_string()))
}

pub fn validate_new_post(post: &NewPost) -> Result<(), DomainError> {
    require_text("Title", &post.title)?;
    require_text("Link", &post.link)?;
    require_link(&post.link)?;
    require_reference("user_id", post.user_id)
}

pub fn validate_new_user(user: &NewUser) -> Result<(), DomainError> {
    require_text("Username", &user.username)
}

pub fn validate_new_comment(comment: &NewComment) -> Result<(), DomainError> {
    require_reference("post_id", comment.post_id)?;
    validate_text(&comment.text)?;
    require_reference("user_id", comment.user_id)
}

pub fn validate_new_reply(reply: &NewReply) -> Result<(), DomainError> {
    require_reference("comment_id", reply.comment_id)?;
    validate_text(&reply.text)?;
    require_reference("user_id", reply.user_id)
}

/// Validate replacement text for a comment or reply edit.
pub fn validate_text(text: &str) -> Result<(), DomainError> {
    require_text("Text", text)
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_reference(field: &str, id: i32) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_link(link: &str) -> Result<(), DomainError> {
    match Url::parse(link.trim()) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(DomainError::Validation(format!(
            "Link must be an absolute URL: {link}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: DomainError) -> String {
        err.to_string()
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(DomainError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(parse_id("1.5"), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn test_valid_post() {
        assert!(validate_new_post(&NewPost::new("Hello", "http://x", 1)).is_ok());
    }

    #[test]
    fn test_post_missing_fields() {
        let err = validate_new_post(&NewPost::new("", "http://x", 1)).unwrap_err();
        assert_eq!(message(err), "Title cannot be empty");

        let err = validate_new_post(&NewPost::new("Hello", "  ", 1)).unwrap_err();
        assert_eq!(message(err), "Link cannot be empty");

        let err = validate_new_post(&NewPost::new("Hello", "http://x", 0)).unwrap_err();
        assert_eq!(message(err), "user_id cannot be empty");
    }

    #[test]
    fn test_post_link_must_be_url() {
        let err = validate_new_post(&NewPost::new("Hello", "not a link", 1)).unwrap_err();
        assert!(message(err).starts_with("Link must be an absolute URL"));
    }

    #[test]
    fn test_comment_and_reply() {
        assert!(validate_new_comment(&NewComment::new(1, "nice", 2)).is_ok());
        assert!(validate_new_comment(&NewComment::new(1, "", 2)).is_err());
        assert!(validate_new_comment(&NewComment::new(0, "nice", 2)).is_err());

        assert!(validate_new_reply(&NewReply::new(3, "agreed", 2)).is_ok());
        assert!(validate_new_reply(&NewReply::new(3, "agreed", 0)).is_err());
    }

    #[test]
    fn test_user() {
        assert!(validate_new_user(&NewUser::new("Test User")).is_ok());
        let err = validate_new_user(&NewUser::new("")).unwrap_err();
        assert_eq!(message(err), "Username cannot be empty");
    }
}
