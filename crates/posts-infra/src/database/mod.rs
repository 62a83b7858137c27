//! Post storage: connection pool, SeaORM repository and in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "mysql")]
mod mysql_base;
#[cfg(feature = "mysql")]
pub mod mysql_repo;

#[cfg(feature = "mysql")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mysql")]
pub use connections::DatabasePool;
#[cfg(feature = "mysql")]
pub use mysql_repo::MySqlPostRepository;
