//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use remark_core::CommentService;
use remark_core::domain::Post;
use remark_core::ports::{CommentRepository, PostRepository};
use remark_infra::database::DatabaseConnections;
use remark_infra::{InMemoryCommentRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use remark_infra::database::{PostgresCommentRepository, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub comments: CommentService,
    pub db: Option<Arc<DatabaseConnections>>,
}

type Repositories = (Arc<dyn PostRepository>, Arc<dyn CommentRepository>);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (db, (posts, comments)): (Option<Arc<DatabaseConnections>>, Repositories) = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repos: Repositories = (
                            Arc::new(PostgresPostRepository::new(Arc::clone(&conn.main))),
                            Arc::new(PostgresCommentRepository::new(Arc::clone(&conn.main))),
                        );
                        (Some(conn), repos)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, in_memory(&config.seed_post_ids))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, in_memory(&config.seed_post_ids))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, (posts, comments)): (Option<Arc<DatabaseConnections>>, Repositories) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            (None, in_memory(&config.seed_post_ids))
        };

        tracing::info!("Application state initialized");

        Self {
            comments: CommentService::new(posts, comments),
            db,
        }
    }

    /// Assemble state around existing repositories, without a database.
    pub fn with_repositories(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            comments: CommentService::new(posts, comments),
            db: None,
        }
    }

    /// Name of the active storage backend.
    pub fn storage(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }
}

fn in_memory(seed_post_ids: &[String]) -> Repositories {
    if !seed_post_ids.is_empty() {
        tracing::info!(count = seed_post_ids.len(), "Seeding in-memory post store");
    }

    // Seeded posts have no known author; the nil UUID marks them as such.
    let posts = seed_post_ids.iter().map(|id| Post {
        id: id.clone(),
        user_id: Uuid::nil(),
        text: String::new(),
        created_at: Utc::now(),
    });

    (
        Arc::new(InMemoryPostRepository::with_posts(posts)),
        Arc::new(InMemoryCommentRepository::new()),
    )
}
