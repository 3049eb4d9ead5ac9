//! Data Transfer Objects - request and response bodies for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A user's public identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// The post form as submitted. Create and edit share it; neither carries an
/// author, that always comes from the authenticated identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFormBody {
    pub text: String,
    /// Group choice by id; empty or absent leaves the post ungrouped.
    #[serde(default)]
    pub group: Option<String>,
}

/// The group tag a post renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostGroupResponse {
    pub slug: String,
    pub title: String,
}

/// A post as the feeds and the detail view render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_username: String,
    pub group: Option<PostGroupResponse>,
}

/// One page of items plus the paging metadata the views render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Group metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// A group's feed: the group itself plus its page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupFeedResponse {
    pub group: GroupResponse,
    pub page: PageResponse<PostResponse>,
}

/// An author's profile: identity, total post count, page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub author: UserResponse,
    pub posts_count: u64,
    pub page: PageResponse<PostResponse>,
}

/// A single post plus its author's total post count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub author_posts_count: u64,
}

/// A selectable group choice on the post form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupChoiceResponse {
    pub id: Uuid,
    pub title: String,
}

/// Context for rendering the post form, shared by create and edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFormContextResponse {
    pub is_edit: bool,
    /// Current field values: empty for create, the stored post for edit.
    pub values: PostFormBody,
    pub choices: Vec<GroupChoiceResponse>,
    /// Present when editing: the post the form is bound to.
    pub post: Option<PostResponse>,
}

/// Field-level validation messages for the post form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFormErrorsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Body of a rejected form submission: the annotations plus the submitted
/// values, handed back for re-presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRejectedResponse {
    pub errors: PostFormErrorsResponse,
    pub values: PostFormBody,
}
