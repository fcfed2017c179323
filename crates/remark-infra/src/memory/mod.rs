//! In-memory stores - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

mod comment;
mod post;

pub use comment::InMemoryCommentRepository;
pub use post::InMemoryPostRepository;
