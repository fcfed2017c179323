//! # Remark Infrastructure
//!
//! Concrete implementations of the ports defined in `remark-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM; without it
//!   only the in-memory stores are built

pub mod auth;
pub mod database;
pub mod memory;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::DatabaseConnections;
pub use memory::{InMemoryCommentRepository, InMemoryPostRepository};
