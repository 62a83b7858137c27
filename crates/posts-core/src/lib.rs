//! # Posts Core
//!
//! The domain layer of the posts API.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError, StoreOperation};
pub use services::PostService;
