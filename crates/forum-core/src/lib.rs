//! # Forum Core
//!
//! The domain layer of the forum API: entities, validation rules and the
//! repository ports that persistence gateways implement.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
