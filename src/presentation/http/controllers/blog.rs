// src/presentation/http/controllers/blog.rs
use crate::application::dto::BlogPostDto;
use crate::domain::blog::{BlogPostDraft, BlogPostFilter, BlogPostPatch};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    #[serde(default)]
    pub include_drafts: bool,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/blog",
    params(
        ("include_drafts" = bool, Query, description = "Include unpublished posts."),
        ("category" = Option<String>, Query, description = "Only posts in this category.")
    ),
    responses((status = 200, description = "Blog posts, newest first.", body = [BlogPostDto])),
    tag = "Blog"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<Vec<BlogPostDto>>> {
    let filter = BlogPostFilter {
        include_drafts: params.include_drafts,
        category: params.category,
    };
    let posts = state.services.blog.list(filter).await.into_http()?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/{id}",
    responses(
        (status = 200, description = "Post by id.", body = BlogPostDto),
        (status = 404, description = "No post with this id.")
    ),
    tag = "Blog"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog
        .get(id)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/slug/{slug}",
    responses(
        (status = 200, description = "Post by slug.", body = BlogPostDto),
        (status = 404, description = "No post with this slug.")
    ),
    tag = "Blog"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog
        .get_by_slug(&slug)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 200, description = "Post created.", body = BlogPostDto),
        (status = 400, description = "Title is empty or produces no slug."),
        (status = 409, description = "Another post already uses this title.")
    ),
    tag = "Blog"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateBlogPostRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let draft = BlogPostDraft {
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        category: payload.category,
        tags: payload.tags,
        publish: payload.publish,
    };
    state
        .services
        .blog
        .create(payload.title, draft)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/blog/{id}",
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated.", body = BlogPostDto),
        (status = 404, description = "No post with this id."),
        (status = 409, description = "Another post already uses this title.")
    ),
    tag = "Blog"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let patch = BlogPostPatch {
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        category: payload.category,
        tags: payload.tags,
        publish: payload.publish,
    };
    state
        .services
        .blog
        .update(id, patch)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/blog/{id}/publish",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Publish state changed.", body = BlogPostDto),
        (status = 404, description = "No post with this id.")
    ),
    tag = "Blog"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let patch = BlogPostPatch {
        publish: Some(payload.publish),
        ..BlogPostPatch::default()
    };
    state
        .services
        .blog
        .update(id, patch)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/blog/{id}",
    responses(
        (status = 200, description = "Post deleted; its slug is free for reuse."),
        (status = 404, description = "No post with this id.")
    ),
    tag = "Blog"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state.services.blog.delete(id).await.into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
