//! Domain entities - the core forum objects.

mod comment;
mod post;
mod reply;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use reply::{NewReply, Reply};
pub use user::{NewUser, User};
