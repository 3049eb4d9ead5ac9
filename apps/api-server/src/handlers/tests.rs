//! Handler tests over an in-memory database with the real migrations,
//! routes and extractors.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{DateTime, Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveModelTrait;
use uuid::Uuid;

use quill_core::domain::{Group, Post, User};
use quill_core::ports::{PasswordService, PostFilter, PostRepository, TokenService, UserRepository};
use quill_infra::database::entity::group as group_entity;
use quill_infra::{Argon2PasswordService, DatabaseConfig, JwtConfig, JwtTokenService};
use quill_shared::dto::{
    FormRejectedResponse, GroupFeedResponse, PageResponse, PostDetailResponse,
    PostFormContextResponse, PostResponse, ProfileResponse, UserResponse,
};

use crate::state::AppState;

const PAGE_SIZE: usize = 10;

struct TestApp {
    db: quill_infra::database::DbConn,
    state: AppState,
    token_service: Arc<dyn TokenService>,
    password_service: Arc<dyn PasswordService>,
}

impl TestApp {
    async fn spawn() -> Self {
        let db = quill_infra::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .expect("in-memory database");
        Migrator::up(&db, None).await.expect("migrations");

        let state = AppState::new(db.clone(), PAGE_SIZE);
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "quill-test".to_string(),
        }));
        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        Self {
            db,
            state,
            token_service,
            password_service,
        }
    }

    async fn insert_user(&self, username: &str) -> User {
        self.state
            .users
            .insert(User::new(
                username.to_string(),
                format!("{username}@example.com"),
                "unused-hash".to_string(),
            ))
            .await
            .unwrap()
    }

    fn token_for(&self, user: &User) -> String {
        self.token_service
            .generate_token(user.id, &user.username)
            .unwrap()
    }

    async fn insert_group(&self, title: &str, slug: &str) -> Group {
        let group = Group::new(title.to_string(), slug.to_string(), format!("About {title}"));
        group_entity::ActiveModel::from(group.clone())
            .insert(&self.db)
            .await
            .unwrap();
        group
    }

    async fn insert_post(&self, author: &User, group: Option<&Group>, text: &str, minute: i64) -> Post {
        self.state
            .posts
            .insert(Post {
                id: Uuid::new_v4(),
                author_id: author.id,
                group_id: group.map(|g| g.id),
                text: text.to_string(),
                pub_date: base_date() + Duration::minutes(minute),
            })
            .await
            .unwrap()
    }

    async fn post_count(&self) -> u64 {
        self.state.posts.count(PostFilter::all()).await.unwrap()
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.state.clone()))
                .app_data(web::Data::new($ctx.token_service.clone()))
                .app_data(web::Data::new($ctx.password_service.clone()))
                .configure(super::configure_routes),
        )
        .await
    };
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

fn location(resp: &actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn health_reports_ok() {
    let ctx = TestApp::spawn().await;
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn global_feed_pages_newest_first() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    for i in 0..13 {
        ctx.insert_post(&author, None, &format!("post {i}"), i).await;
    }
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let first: PageResponse<PostResponse> = test::read_body_json(resp).await;

    assert_eq!(first.items.len(), 10);
    assert_eq!(first.number, 1);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.total_items, 13);
    assert_eq!(first.items[0].text, "post 12");
    assert_eq!(first.items[9].text, "post 3");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/feed?page=2").to_request(),
    )
    .await;
    let second: PageResponse<PostResponse> = test::read_body_json(resp).await;

    assert_eq!(second.number, 2);
    assert_eq!(second.items.len(), 3);
    assert_eq!(second.items[2].text, "post 0");
}

#[actix_web::test]
async fn feed_items_carry_author_and_group_references() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    ctx.insert_post(&author, Some(&travel), "grouped", 1).await;
    ctx.insert_post(&author, None, "ungrouped", 0).await;
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
    let page: PageResponse<PostResponse> = test::read_body_json(resp).await;

    let grouped = &page.items[0];
    assert_eq!(grouped.text, "grouped");
    assert_eq!(grouped.author_username, "leo");
    assert_eq!(grouped.pub_date, base_date() + Duration::minutes(1));
    let tag = grouped.group.as_ref().expect("group tag");
    assert_eq!(tag.slug, "travel");
    assert_eq!(tag.title, "Travel");

    assert!(page.items[1].group.is_none());
}

#[actix_web::test]
async fn page_requests_clamp_to_the_nearest_page() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    for i in 0..13 {
        ctx.insert_post(&author, None, &format!("post {i}"), i).await;
    }
    let app = init_app!(ctx);

    for (query, expected_number, expected_len) in [
        ("?page=0", 1, 10),
        ("?page=99", 2, 3),
        ("?page=abc", 1, 10),
        ("", 1, 10),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/feed{query}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let page: PageResponse<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(page.number, expected_number, "query {query:?}");
        assert_eq!(page.items.len(), expected_len, "query {query:?}");
    }
}

#[actix_web::test]
async fn group_feed_scopes_posts_to_the_slug() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let cooking = ctx.insert_group("Cooking", "cooking").await;
    ctx.insert_post(&author, Some(&travel), "on the road", 0).await;
    ctx.insert_post(&author, Some(&cooking), "in the kitchen", 1).await;
    ctx.insert_post(&author, None, "nowhere special", 2).await;
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/groups/travel").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let feed: GroupFeedResponse = test::read_body_json(resp).await;

    assert_eq!(feed.group.slug, "travel");
    assert_eq!(feed.group.title, "Travel");
    assert_eq!(feed.group.description, "About Travel");
    assert_eq!(feed.page.total_items, 1);
    assert_eq!(feed.page.items[0].text, "on the road");
}

#[actix_web::test]
async fn empty_group_feed_is_a_valid_page() {
    let ctx = TestApp::spawn().await;
    ctx.insert_group("Quiet", "quiet").await;
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/groups/quiet").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let feed: GroupFeedResponse = test::read_body_json(resp).await;

    assert_eq!(feed.page.total_items, 0);
    assert_eq!(feed.page.total_pages, 1);
    assert!(feed.page.items.is_empty());
}

#[actix_web::test]
async fn pagination_applies_to_group_and_profile_feeds() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    for i in 0..13 {
        ctx.insert_post(&author, Some(&travel), &format!("post {i}"), i).await;
    }
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/groups/travel?page=2")
            .to_request(),
    )
    .await;
    let feed: GroupFeedResponse = test::read_body_json(resp).await;
    assert_eq!(feed.page.items.len(), 3);
    assert_eq!(feed.page.number, 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profiles/leo?page=2")
            .to_request(),
    )
    .await;
    let profile: ProfileResponse = test::read_body_json(resp).await;
    assert_eq!(profile.page.items.len(), 3);
    assert_eq!(profile.page.number, 2);
}

#[actix_web::test]
async fn profile_counts_every_post_not_just_the_page() {
    let ctx = TestApp::spawn().await;
    let leo = ctx.insert_user("leo").await;
    let ada = ctx.insert_user("ada").await;
    for i in 0..13 {
        ctx.insert_post(&leo, None, &format!("post {i}"), i).await;
    }
    ctx.insert_post(&ada, None, "not leo's", 20).await;
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profiles/leo?page=2")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: ProfileResponse = test::read_body_json(resp).await;

    assert_eq!(profile.author.username, "leo");
    assert_eq!(profile.posts_count, 13);
    assert_eq!(profile.page.items.len(), 3);
    assert!(profile.page.items.iter().all(|p| p.author_username == "leo"));
}

#[actix_web::test]
async fn post_detail_includes_author_post_count() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let shown = ctx.insert_post(&author, Some(&travel), "first", 0).await;
    ctx.insert_post(&author, None, "second", 1).await;
    ctx.insert_post(&author, None, "third", 2).await;
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", shown.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: PostDetailResponse = test::read_body_json(resp).await;

    assert_eq!(detail.post.id, shown.id);
    assert_eq!(detail.post.text, "first");
    assert_eq!(detail.post.author_username, "leo");
    assert_eq!(detail.post.group.as_ref().unwrap().slug, "travel");
    assert_eq!(detail.author_posts_count, 3);
}

#[actix_web::test]
async fn unknown_resources_are_not_found() {
    let ctx = TestApp::spawn().await;
    let app = init_app!(ctx);

    for uri in [
        "/api/groups/missing".to_string(),
        "/api/profiles/nobody".to_string(),
        format!("/api/posts/{}", Uuid::new_v4()),
        "/api/posts/not-a-uuid".to_string(),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {uri}");
    }
}

#[actix_web::test]
async fn anonymous_posting_is_bounced_to_login() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let post = ctx.insert_post(&author, None, "original", 0).await;
    let app = init_app!(ctx);

    let form = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/posts/create").to_request(),
    )
    .await;
    assert_eq!(form.status(), StatusCode::FOUND);
    assert_eq!(location(&form), "/api/auth/login?next=/api/posts/create");

    let submit = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts/create")
            .set_json(serde_json::json!({ "text": "sneaky" }))
            .to_request(),
    )
    .await;
    assert_eq!(submit.status(), StatusCode::FOUND);
    assert_eq!(location(&submit), "/api/auth/login?next=/api/posts/create");

    let edit = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(edit.status(), StatusCode::FOUND);
    assert_eq!(
        location(&edit),
        format!("/api/auth/login?next=/api/posts/{}/edit", post.id)
    );

    assert_eq!(ctx.post_count().await, 1);
}

#[actix_web::test]
async fn create_form_lists_group_choices() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    ctx.insert_group("Travel", "travel").await;
    ctx.insert_group("Cooking", "cooking").await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/posts/create")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let form: PostFormContextResponse = test::read_body_json(resp).await;

    assert!(!form.is_edit);
    assert!(form.post.is_none());
    assert_eq!(form.values.text, "");
    let titles: Vec<&str> = form.choices.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Cooking", "Travel"]);
}

#[actix_web::test]
async fn create_redirects_to_profile_and_forces_the_author() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    // The author field in the payload is noise; identity wins.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts/create")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({
                "text": "A brand new post",
                "group": travel.id,
                "author": Uuid::new_v4()
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/api/profiles/leo");

    let stored = ctx.state.posts.list(PostFilter::all()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "A brand new post");
    assert_eq!(stored[0].author_id, user.id);
    assert_eq!(stored[0].group_id, Some(travel.id));
}

#[actix_web::test]
async fn create_without_group_stays_ungrouped() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts/create")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "text": "no group here", "group": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let stored = ctx.state.posts.list(PostFilter::all()).await.unwrap();
    assert_eq!(stored[0].group_id, None);
}

#[actix_web::test]
async fn blank_text_is_rejected_and_values_echoed() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts/create")
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "text": "   ", "group": travel.id }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let rejected: FormRejectedResponse = test::read_body_json(resp).await;

    assert_eq!(rejected.errors.text.as_deref(), Some("This field cannot be blank."));
    assert!(rejected.errors.group.is_none());
    assert_eq!(rejected.values.text, "   ");
    assert_eq!(rejected.values.group.as_deref(), Some(travel.id.to_string().as_str()));

    assert_eq!(ctx.post_count().await, 0);
}

#[actix_web::test]
async fn unknown_group_choice_is_rejected() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    for group in [Uuid::new_v4().to_string(), "gibberish".to_string()] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/posts/create")
                .insert_header(bearer(&token))
                .set_json(serde_json::json!({ "text": "fine text", "group": group }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let rejected: FormRejectedResponse = test::read_body_json(resp).await;
        assert_eq!(rejected.errors.group.as_deref(), Some("Select a valid group."));
        assert!(rejected.errors.text.is_none());
    }

    assert_eq!(ctx.post_count().await, 0);
}

#[actix_web::test]
async fn edit_form_binds_the_stored_post() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let post = ctx.insert_post(&user, Some(&travel), "as written", 0).await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let form: PostFormContextResponse = test::read_body_json(resp).await;

    assert!(form.is_edit);
    assert_eq!(form.values.text, "as written");
    assert_eq!(form.values.group.as_deref(), Some(travel.id.to_string().as_str()));
    assert_eq!(form.post.as_ref().map(|p| p.id), Some(post.id));
}

#[actix_web::test]
async fn author_edit_updates_only_text_and_group() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let travel = ctx.insert_group("Travel", "travel").await;
    let post = ctx.insert_post(&user, Some(&travel), "as written", 0).await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "text": "now revised" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/api/posts/{}", post.id));

    let stored = ctx.state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "now revised");
    assert_eq!(stored.group_id, None);
    assert_eq!(stored.author_id, post.author_id);
    assert_eq!(stored.pub_date, post.pub_date);
}

#[actix_web::test]
async fn blank_edit_is_rejected_and_changes_nothing() {
    let ctx = TestApp::spawn().await;
    let user = ctx.insert_user("leo").await;
    let post = ctx.insert_post(&user, None, "as written", 0).await;
    let token = ctx.token_for(&user);
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "text": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let rejected: FormRejectedResponse = test::read_body_json(resp).await;
    assert_eq!(rejected.errors.text.as_deref(), Some("This field cannot be blank."));

    let stored = ctx.state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "as written");
}

#[actix_web::test]
async fn non_author_edit_is_silently_routed_to_detail() {
    let ctx = TestApp::spawn().await;
    let author = ctx.insert_user("leo").await;
    let visitor = ctx.insert_user("ada").await;
    let post = ctx.insert_post(&author, None, "leo's words", 0).await;
    let token = ctx.token_for(&visitor);
    let app = init_app!(ctx);

    let form = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert_eq!(form.status(), StatusCode::FOUND);
    assert_eq!(location(&form), format!("/api/posts/{}", post.id));

    let submit = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/posts/{}/edit", post.id))
            .insert_header(bearer(&token))
            .set_json(serde_json::json!({ "text": "ada's takeover" }))
            .to_request(),
    )
    .await;
    assert_eq!(submit.status(), StatusCode::FOUND);
    assert_eq!(location(&submit), format!("/api/posts/{}", post.id));

    let stored = ctx.state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.text, "leo's words");
    assert_eq!(stored.author_id, author.id);
}

#[actix_web::test]
async fn register_login_me_roundtrip() {
    let ctx = TestApp::spawn().await;
    let app = init_app!(ctx);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "username": "leo",
                "email": "leo@example.com",
                "password": "correct horse battery"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let dup = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "username": "leo",
                "email": "other@example.com",
                "password": "correct horse battery"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(dup.status(), StatusCode::CONFLICT);

    let wrong = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "username": "leo", "password": "nope nope nope" }))
            .to_request(),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "username": "leo", "password": "correct horse battery" }))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let auth: quill_shared::dto::AuthResponse = test::read_body_json(login).await;
    assert_eq!(auth.token_type, "Bearer");

    let me = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&auth.access_token))
            .to_request(),
    )
    .await;
    assert_eq!(me.status(), StatusCode::OK);
    let user: UserResponse = test::read_body_json(me).await;
    assert_eq!(user.username, "leo");

    let expected = ctx
        .state
        .users
        .find_by_username("leo")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, expected.id);
}

#[actix_web::test]
async fn register_rejects_bad_input() {
    let ctx = TestApp::spawn().await;
    let app = init_app!(ctx);

    for body in [
        serde_json::json!({ "username": "bad name!", "email": "a@b.c", "password": "long enough" }),
        serde_json::json!({ "username": "fine", "email": "not-an-email", "password": "long enough" }),
        serde_json::json!({ "username": "fine", "email": "a@b.c", "password": "short" }),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
