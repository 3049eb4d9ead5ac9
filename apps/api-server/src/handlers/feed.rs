//! Read-only listing handlers: the global feed, group feeds and author
//! profiles. All of them are public and paginated the same way.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::User;
use quill_core::feed::FeedItem;
use quill_core::pagination::Page;
use quill_shared::dto::{
    GroupFeedResponse, GroupResponse, PageResponse, PostGroupResponse, PostResponse,
    ProfileResponse, UserResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Page selector from the query string. Anything non-numeric falls back to
/// the first page; the paginator clamps the rest.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn requested(&self) -> u64 {
        self.page.as_deref().and_then(|p| p.parse().ok()).unwrap_or(1)
    }
}

pub(super) fn post_response(item: FeedItem) -> PostResponse {
    PostResponse {
        id: item.post.id,
        text: item.post.text,
        pub_date: item.post.pub_date,
        author_username: item.author_username,
        group: item.group.map(|g| PostGroupResponse {
            slug: g.slug,
            title: g.title,
        }),
    }
}

pub(super) fn page_response(page: Page<FeedItem>) -> PageResponse<PostResponse> {
    PageResponse {
        items: page.items.into_iter().map(post_response).collect(),
        number: page.number,
        total_pages: page.total_pages,
        total_items: page.total_items,
    }
}

pub(super) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }
}

/// GET /api/feed - the global feed, newest first.
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.feed.global_feed(query.requested()).await?;

    Ok(HttpResponse::Ok().json(page_response(page)))
}

/// GET /api/groups/{slug} - one group's feed plus the group metadata.
pub async fn group_posts(
    state: web::Data<AppState>,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let feed = state.feed.group_feed(&slug, query.requested()).await?;

    Ok(HttpResponse::Ok().json(GroupFeedResponse {
        group: GroupResponse {
            id: feed.group.id,
            title: feed.group.title,
            slug: feed.group.slug,
            description: feed.group.description,
        },
        page: page_response(feed.page),
    }))
}

/// GET /api/profiles/{username} - an author's page of posts plus their
/// total post count.
pub async fn profile(
    state: web::Data<AppState>,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let profile = state.feed.author_profile(&username, query.requested()).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        author: user_response(profile.author),
        posts_count: profile.posts_count,
        page: page_response(profile.page),
    }))
}
