// src/presentation/http/controllers/faculty.rs
use crate::application::dto::FacultyMemberDto;
use crate::domain::faculty::{FacultyFilter, FacultyMemberDraft, FacultyMemberPatch};
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
pub struct FacultyListParams {
    #[serde(default)]
    pub include_inactive: bool,
    pub department_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub designation: String,
    pub qualification: String,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFacultyRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

fn default_active() -> bool {
    true
}

#[utoipa::path(
    get,
    path = "/api/v1/faculty",
    params(
        ("include_inactive" = bool, Query, description = "Include deactivated members."),
        ("department_id" = Option<i64>, Query, description = "Only members of this department.")
    ),
    responses((status = 200, description = "All faculty members.", body = [FacultyMemberDto])),
    tag = "Faculty"
)]
pub async fn list_faculty(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FacultyListParams>,
) -> HttpResult<Json<Vec<FacultyMemberDto>>> {
    let filter = FacultyFilter {
        include_inactive: params.include_inactive,
        department_id: params.department_id,
    };
    let members = state.services.faculty.list(filter).await.into_http()?;
    Ok(Json(members.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/faculty/{id}",
    responses(
        (status = 200, description = "Faculty member by id.", body = FacultyMemberDto),
        (status = 404, description = "No faculty member with this id.")
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_member(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FacultyMemberDto>> {
    state
        .services
        .faculty
        .get(id)
        .await
        .into_http()
        .map(|m| Json(m.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/faculty/slug/{slug}",
    responses(
        (status = 200, description = "Faculty member by slug.", body = FacultyMemberDto),
        (status = 404, description = "No faculty member with this slug.")
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_member_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<FacultyMemberDto>> {
    state
        .services
        .faculty
        .get_by_slug(&slug)
        .await
        .into_http()
        .map(|m| Json(m.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/faculty",
    request_body = CreateFacultyRequest,
    responses(
        (status = 200, description = "Faculty member created.", body = FacultyMemberDto),
        (status = 400, description = "Name is empty or produces no slug."),
        (status = 409, description = "Another member already uses this name.")
    ),
    tag = "Faculty"
)]
pub async fn create_faculty_member(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateFacultyRequest>,
) -> HttpResult<Json<FacultyMemberDto>> {
    let draft = FacultyMemberDraft {
        designation: payload.designation,
        qualification: payload.qualification,
        department_id: payload.department_id,
        email: payload.email,
        specialization: payload.specialization,
        bio: payload.bio,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .faculty
        .create(payload.name, draft)
        .await
        .into_http()
        .map(|m| Json(m.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/faculty/{id}",
    request_body = UpdateFacultyRequest,
    responses(
        (status = 200, description = "Faculty member updated.", body = FacultyMemberDto),
        (status = 404, description = "No faculty member with this id."),
        (status = 409, description = "Another member already uses this name.")
    ),
    tag = "Faculty"
)]
pub async fn update_faculty_member(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFacultyRequest>,
) -> HttpResult<Json<FacultyMemberDto>> {
    let patch = FacultyMemberPatch {
        name: payload.name,
        designation: payload.designation,
        qualification: payload.qualification,
        department_id: payload.department_id,
        email: payload.email,
        specialization: payload.specialization,
        bio: payload.bio,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .faculty
        .update(id, patch)
        .await
        .into_http()
        .map(|m| Json(m.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/faculty/{id}",
    responses(
        (status = 200, description = "Faculty member deleted; the slug is free for reuse."),
        (status = 404, description = "No faculty member with this id.")
    ),
    tag = "Faculty"
)]
pub async fn delete_faculty_member(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state.services.faculty.delete(id).await.into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
