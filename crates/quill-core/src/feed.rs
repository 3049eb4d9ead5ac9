//! Listing engine - builds the result set and metadata each view needs.
//!
//! Four contexts: the global feed, a group's feed, an author's profile and
//! a single post's detail. Every read goes through an explicit repository
//! call; the author and group references feed items carry are resolved in
//! batch, for the served page only.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Group, Post, User};
use crate::error::{DomainError, RepoError};
use crate::pagination::{Page, paginate};
use crate::ports::{GroupRepository, PostFilter, PostRepository, UserRepository};

/// A post enriched with the display references the feed views render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub post: Post,
    pub author_username: String,
    pub group: Option<GroupRef>,
}

/// The group tag a feed item renders, when the post has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub slug: String,
    pub title: String,
}

impl GroupRef {
    pub fn of(group: &Group) -> Self {
        Self {
            slug: group.slug.clone(),
            title: group.title.clone(),
        }
    }
}

/// Context for a group's feed: the group metadata plus its page of posts.
#[derive(Debug, Clone)]
pub struct GroupFeed {
    pub group: Group,
    pub page: Page<FeedItem>,
}

/// Context for an author's profile.
#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub author: User,
    /// Total number of posts by this author, independent of the page size.
    pub posts_count: u64,
    pub page: Page<FeedItem>,
}

/// Context for a single post's detail view.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub item: FeedItem,
    /// Total number of posts by the post's author.
    pub author_posts_count: u64,
}

/// Builds filtered, paginated, newest-first views of the post store.
#[derive(Clone)]
pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    groups: Arc<dyn GroupRepository>,
    users: Arc<dyn UserRepository>,
    page_size: usize,
}

impl FeedService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        groups: Arc<dyn GroupRepository>,
        users: Arc<dyn UserRepository>,
        page_size: usize,
    ) -> Self {
        Self {
            posts,
            groups,
            users,
            page_size,
        }
    }

    /// Global feed: every post, newest first.
    pub async fn global_feed(&self, requested_page: u64) -> Result<Page<FeedItem>, DomainError> {
        let posts = self.posts.list(PostFilter::all()).await?;
        self.page_of(posts, requested_page).await
    }

    /// Feed of the group with this slug.
    pub async fn group_feed(
        &self,
        slug: &str,
        requested_page: u64,
    ) -> Result<GroupFeed, DomainError> {
        let group = self
            .groups
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("group", slug))?;

        let posts = self.posts.list(PostFilter::by_group(group.id)).await?;
        let page = self.page_of(posts, requested_page).await?;

        Ok(GroupFeed { group, page })
    }

    /// Profile of the author with this username.
    pub async fn author_profile(
        &self,
        username: &str,
        requested_page: u64,
    ) -> Result<AuthorProfile, DomainError> {
        let author = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found("user", username))?;

        let filter = PostFilter::by_author(author.id);
        let posts_count = self.posts.count(filter).await?;
        let posts = self.posts.list(filter).await?;
        let page = self.page_of(posts, requested_page).await?;

        Ok(AuthorProfile {
            author,
            posts_count,
            page,
        })
    }

    /// Detail of a single post, with its author's total post count.
    pub async fn post_detail(&self, id: Uuid) -> Result<PostDetail, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", id.to_string()))?;

        let author_posts_count = self.posts.count(PostFilter::by_author(post.author_id)).await?;

        let mut items = self.enrich(vec![post]).await?;
        let item = items
            .pop()
            .ok_or_else(|| DomainError::not_found("post", id.to_string()))?;

        Ok(PostDetail {
            item,
            author_posts_count,
        })
    }

    /// Paginate first, then resolve display references for the served page.
    async fn page_of(
        &self,
        posts: Vec<Post>,
        requested_page: u64,
    ) -> Result<Page<FeedItem>, DomainError> {
        let page = paginate(posts, self.page_size, requested_page);
        let items = self.enrich(page.items).await?;

        Ok(Page {
            items,
            number: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
        })
    }

    /// Resolve author usernames and group tags in batch.
    async fn enrich(&self, posts: Vec<Post>) -> Result<Vec<FeedItem>, RepoError> {
        let mut author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let mut group_ids: Vec<Uuid> = posts.iter().filter_map(|p| p.group_id).collect();
        group_ids.sort_unstable();
        group_ids.dedup();

        let authors: HashMap<Uuid, User> = self
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let groups: HashMap<Uuid, Group> = self
            .groups
            .find_by_ids(&group_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let items = posts
            .into_iter()
            .filter_map(|post| {
                let Some(author) = authors.get(&post.author_id) else {
                    // Author row gone mid-read; the cascade takes the post
                    // with it by the next listing.
                    tracing::warn!(post_id = %post.id, "dropping post with missing author");
                    return None;
                };
                let group = post.group_id.and_then(|id| groups.get(&id)).map(GroupRef::of);
                Some(FeedItem {
                    author_username: author.username.clone(),
                    group,
                    post,
                })
            })
            .collect();

        Ok(items)
    }
}
