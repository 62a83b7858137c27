//! Application services - the operations exposed over HTTP.

mod post;

pub use post::PostService;
