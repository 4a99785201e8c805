// src/presentation/http/controllers/programs.rs
use crate::application::dto::AcademicProgramDto;
use crate::domain::program::{
    AcademicProgramDraft, AcademicProgramFilter, AcademicProgramPatch, ProgramType,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct ProgramListParams {
    #[serde(default)]
    pub include_inactive: bool,
    #[serde(rename = "type")]
    pub program_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProgramRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProgramRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub program_type: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}

fn parse_type(value: &str) -> HttpResult<ProgramType> {
    ProgramType::parse(value)
        .map_err(crate::application::error::ApplicationError::from)
        .map_err(HttpError::from_error)
}

#[utoipa::path(
    get,
    path = "/api/v1/programs",
    params(
        ("include_inactive" = bool, Query, description = "Include deactivated programs."),
        ("type" = Option<String>, Query, description = "bds | mds | internship | certificate")
    ),
    responses((status = 200, description = "All academic programs.", body = [AcademicProgramDto])),
    tag = "Programs"
)]
pub async fn list_programs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProgramListParams>,
) -> HttpResult<Json<Vec<AcademicProgramDto>>> {
    let program_type = params
        .program_type
        .as_deref()
        .map(parse_type)
        .transpose()?;
    let filter = AcademicProgramFilter {
        include_inactive: params.include_inactive,
        program_type,
    };
    let programs = state.services.programs.list(filter).await.into_http()?;
    Ok(Json(programs.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/programs/{id}",
    responses(
        (status = 200, description = "Program by id.", body = AcademicProgramDto),
        (status = 404, description = "No program with this id.")
    ),
    tag = "Programs"
)]
pub async fn get_program(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<AcademicProgramDto>> {
    state
        .services
        .programs
        .get(id)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/programs/slug/{slug}",
    responses(
        (status = 200, description = "Program by slug.", body = AcademicProgramDto),
        (status = 404, description = "No program with this slug.")
    ),
    tag = "Programs"
)]
pub async fn get_program_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<AcademicProgramDto>> {
    state
        .services
        .programs
        .get_by_slug(&slug)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/programs",
    request_body = CreateProgramRequest,
    responses(
        (status = 200, description = "Program created.", body = AcademicProgramDto),
        (status = 400, description = "Name is empty, produces no slug, or the type is unknown."),
        (status = 409, description = "Another program already uses this name.")
    ),
    tag = "Programs"
)]
pub async fn create_program(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateProgramRequest>,
) -> HttpResult<Json<AcademicProgramDto>> {
    let draft = AcademicProgramDraft {
        program_type: parse_type(&payload.program_type)?,
        duration: payload.duration,
        description: payload.description,
        eligibility: payload.eligibility,
        curriculum: payload.curriculum,
        fees: payload.fees,
        seats: payload.seats,
        is_active: payload.is_active,
    };
    state
        .services
        .programs
        .create(payload.name, draft)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/programs/{id}",
    request_body = UpdateProgramRequest,
    responses(
        (status = 200, description = "Program updated.", body = AcademicProgramDto),
        (status = 404, description = "No program with this id."),
        (status = 409, description = "Another program already uses this name.")
    ),
    tag = "Programs"
)]
pub async fn update_program(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProgramRequest>,
) -> HttpResult<Json<AcademicProgramDto>> {
    let program_type = payload
        .program_type
        .as_deref()
        .map(parse_type)
        .transpose()?;
    let patch = AcademicProgramPatch {
        name: payload.name,
        program_type,
        duration: payload.duration,
        description: payload.description,
        eligibility: payload.eligibility,
        curriculum: payload.curriculum,
        fees: payload.fees,
        seats: payload.seats,
        is_active: payload.is_active,
    };
    state
        .services
        .programs
        .update(id, patch)
        .await
        .into_http()
        .map(|p| Json(p.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/programs/{id}",
    responses(
        (status = 200, description = "Program deleted; its slug is free for reuse."),
        (status = 404, description = "No program with this id.")
    ),
    tag = "Programs"
)]
pub async fn delete_program(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state.services.programs.delete(id).await.into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
