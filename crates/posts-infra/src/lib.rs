//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `mysql` (default) - MySQL repository via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlPostRepository};
