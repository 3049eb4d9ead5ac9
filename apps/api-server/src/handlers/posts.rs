//! Post detail and the create/edit flows.
//!
//! Mutations answer with redirects to the canonical views: create lands on
//! the author's profile, edit lands on the post's detail page. A non-author
//! asking to edit is routed to that same detail page with nothing written
//! and nothing surfaced.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::access::{self, CreateAccess, EditAccess, Requester};
use quill_core::domain::Post;
use quill_core::feed::{FeedItem, GroupRef};
use quill_core::form::{FormError, PostInput, validate_post_input};
use quill_shared::dto::{
    GroupChoiceResponse, PostDetailResponse, PostFormBody, PostFormContextResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::feed::post_response;

/// Characters of post text carried in log lines.
const LOG_PREVIEW_CHARS: usize = 15;

fn redirect_to(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn detail_path(id: Uuid) -> String {
    format!("/api/posts/{}", id)
}

fn profile_path(username: &str) -> String {
    format!("/api/profiles/{}", username)
}

/// Malformed ids read the same as unknown ones: no such post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("post {} not found", raw)))
}

async fn load_post(state: &AppState, id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {} not found", id)))
}

async fn form_choices(state: &AppState) -> AppResult<Vec<GroupChoiceResponse>> {
    let groups = state.groups.list().await?;

    Ok(groups
        .into_iter()
        .map(|g| GroupChoiceResponse {
            id: g.id,
            title: g.title,
        })
        .collect())
}

/// GET /api/posts/{id} - a single post plus its author's total post count.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let detail = state.feed.post_detail(id).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post_response(detail.item),
        author_posts_count: detail.author_posts_count,
    }))
}

/// GET /api/posts/create - the empty post form.
pub async fn create_form(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    // The extractor has already bounced anonymous requesters to login
    let CreateAccess::Granted { .. } = access::create_access(Requester::Authenticated(identity.user_id))
    else {
        return Err(AppError::Unauthorized);
    };

    Ok(HttpResponse::Ok().json(PostFormContextResponse {
        is_edit: false,
        values: PostFormBody::default(),
        choices: form_choices(&state).await?,
        post: None,
    }))
}

/// POST /api/posts/create - validate and publish a new post.
pub async fn create_submit(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostFormBody>,
) -> AppResult<HttpResponse> {
    let author_id = match access::create_access(Requester::Authenticated(identity.user_id)) {
        CreateAccess::LoginRequired => return Err(AppError::Unauthorized),
        CreateAccess::Granted { author_id } => author_id,
    };

    let body = body.into_inner();
    let input = PostInput {
        text: body.text.clone(),
        group: body.group.clone(),
    };

    let draft = match validate_post_input(&input, state.groups.as_ref()).await {
        Ok(draft) => draft,
        Err(FormError::Invalid(errors)) => {
            return Err(AppError::FormRejected {
                errors,
                values: body,
            });
        }
        Err(FormError::Repo(e)) => return Err(e.into()),
    };

    let group_id = draft.group_id();
    let post = Post::new(author_id, draft.text, group_id);
    let post = state.posts.insert(post).await?;

    tracing::info!(
        post_id = %post.id,
        author = %identity.username,
        preview = post.preview(LOG_PREVIEW_CHARS),
        "Post created"
    );

    Ok(redirect_to(profile_path(&identity.username)))
}

/// GET /api/posts/{id}/edit - the edit form, bound to the stored post.
///
/// Non-authors never see the form; they land on the detail page instead.
pub async fn edit_form(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = load_post(&state, id).await?;

    match access::edit_access(Requester::Authenticated(identity.user_id), &post) {
        EditAccess::LoginRequired => return Err(AppError::Unauthorized),
        EditAccess::RedirectToPost(post_id) => {
            tracing::debug!(post_id = %post_id, requester = %identity.username, "Non-author edit request, routing to detail");
            return Ok(redirect_to(detail_path(post_id)));
        }
        EditAccess::Granted => {}
    }

    let values = PostFormBody {
        text: post.text.clone(),
        group: post.group_id.map(|g| g.to_string()),
    };
    let group = match post.group_id {
        Some(group_id) => state.groups.find_by_id(group_id).await?.map(|g| GroupRef::of(&g)),
        None => None,
    };
    let item = FeedItem {
        post,
        author_username: identity.username.clone(),
        group,
    };

    Ok(HttpResponse::Ok().json(PostFormContextResponse {
        is_edit: true,
        values,
        choices: form_choices(&state).await?,
        post: Some(post_response(item)),
    }))
}

/// POST /api/posts/{id}/edit - apply an edit.
///
/// Only `text` and `group` ever change. A non-author's submission writes
/// nothing and lands on the detail page exactly like the form request.
pub async fn edit_submit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<PostFormBody>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = load_post(&state, id).await?;

    match access::edit_access(Requester::Authenticated(identity.user_id), &post) {
        EditAccess::LoginRequired => return Err(AppError::Unauthorized),
        EditAccess::RedirectToPost(post_id) => {
            tracing::debug!(post_id = %post_id, requester = %identity.username, "Non-author edit submission dropped");
            return Ok(redirect_to(detail_path(post_id)));
        }
        EditAccess::Granted => {}
    }

    let body = body.into_inner();
    let input = PostInput {
        text: body.text.clone(),
        group: body.group.clone(),
    };

    let draft = match validate_post_input(&input, state.groups.as_ref()).await {
        Ok(draft) => draft,
        Err(FormError::Invalid(errors)) => {
            return Err(AppError::FormRejected {
                errors,
                values: body,
            });
        }
        Err(FormError::Repo(e)) => return Err(e.into()),
    };

    let group_id = draft.group_id();
    let updated = state
        .posts
        .update_content(post.id, draft.text, group_id)
        .await?;

    tracing::info!(
        post_id = %updated.id,
        author = %identity.username,
        preview = updated.preview(LOG_PREVIEW_CHARS),
        "Post updated"
    );

    Ok(redirect_to(detail_path(updated.id)))
}
