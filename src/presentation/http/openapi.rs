// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    AcademicProgramDto, BlogPostDto, ClinicServiceDto, DepartmentDto, FacultyMemberDto,
};
use crate::presentation::http::controllers::{blog, departments, faculty, programs, services};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        departments::list_departments,
        departments::get_department,
        departments::get_department_by_slug,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        services::list_services,
        services::get_service,
        services::get_service_by_slug,
        services::create_service,
        services::update_service,
        services::delete_service,
        programs::list_programs,
        programs::get_program,
        programs::get_program_by_slug,
        programs::create_program,
        programs::update_program,
        programs::delete_program,
        blog::list_posts,
        blog::get_post,
        blog::get_post_by_slug,
        blog::create_post,
        blog::update_post,
        blog::set_publish_state,
        blog::delete_post,
        faculty::list_faculty,
        faculty::get_faculty_member,
        faculty::get_faculty_member_by_slug,
        faculty::create_faculty_member,
        faculty::update_faculty_member,
        faculty::delete_faculty_member,
    ),
    components(schemas(
        StatusResponse,
        DepartmentDto,
        ClinicServiceDto,
        AcademicProgramDto,
        BlogPostDto,
        FacultyMemberDto,
    )),
    info(
        title = "Clinic Content API",
        description = "Slug-addressed content entities for the clinic website."
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
