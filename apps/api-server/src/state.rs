//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::feed::FeedService;
use quill_core::ports::{GroupRepository, PostRepository, UserRepository};
use quill_infra::database::DbConn;
use quill_infra::{SeaOrmGroupRepository, SeaOrmPostRepository, SeaOrmUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub users: Arc<dyn UserRepository>,
    pub feed: FeedService,
}

impl AppState {
    /// Wire the repositories and the listing engine over one connection
    /// pool.
    pub fn new(db: DbConn, posts_per_page: usize) -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(SeaOrmPostRepository::new(db.clone()));
        let groups: Arc<dyn GroupRepository> = Arc::new(SeaOrmGroupRepository::new(db.clone()));
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db));
        let feed = FeedService::new(posts.clone(), groups.clone(), users.clone(), posts_per_page);

        tracing::info!("Application state initialized");

        Self {
            posts,
            groups,
            users,
            feed,
        }
    }
}
