//! SeaORM entities, one per forum table.

use sea_orm::EntityTrait;

pub mod comment;
pub mod post;
pub mod reply;
pub mod user;

/// Ties a table to the domain entity it stores and the candidate that creates a row.
pub trait DomainEntity: EntityTrait {
    type Domain: From<Self::Model> + Send + Sync + 'static;
    type Candidate: Into<Self::ActiveModel> + Send + Sync + 'static;
}
