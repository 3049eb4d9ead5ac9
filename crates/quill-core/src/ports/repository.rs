//! Repository ports for the three stored entities.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Group, Post, User};
use crate::error::RepoError;

/// Narrows a post listing to one feed context. The empty filter is the
/// global feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub author_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
}

impl PostFilter {
    /// Every post, no narrowing.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_author(author_id: Uuid) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    pub fn by_group(group_id: Uuid) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::default()
        }
    }
}

/// Post storage port.
///
/// Listings come back fully ordered: newest `pub_date` first, id as the
/// tie-break, so the same data always pages the same way.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post exactly as constructed.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite the two mutable fields of an existing post. The stored
    /// `author_id` and `pub_date` are not part of the statement at all.
    async fn update_content(
        &self,
        id: Uuid,
        text: String,
        group_id: Option<Uuid>,
    ) -> Result<Post, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// All posts matching the filter, newest first.
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    /// How many posts match the filter, independent of any page size.
    async fn count(&self, filter: PostFilter) -> Result<u64, RepoError>;
}

/// Group catalog port. Groups are created out of band; the application
/// only reads them.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Resolve a group by its slug, the key group URLs carry.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, RepoError>;

    /// Batch lookup for feed enrichment. Unknown ids are simply absent
    /// from the result.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Group>, RepoError>;

    /// Every group, for the post form's choice list.
    async fn list(&self) -> Result<Vec<Group>, RepoError>;
}

/// User storage port.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Batch lookup for feed enrichment.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
