// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::content::ContentService;
use crate::domain::{
    blog::BlogPosts, department::Departments, faculty::FacultyMembers,
    program::AcademicPrograms, service::ClinicServices,
};

/// One `ContentService` instantiation per content entity, handed to the HTTP
/// state as a bundle.
pub struct ApplicationServices {
    pub departments: Arc<ContentService<Departments>>,
    pub clinic_services: Arc<ContentService<ClinicServices>>,
    pub programs: Arc<ContentService<AcademicPrograms>>,
    pub blog: Arc<ContentService<BlogPosts>>,
    pub faculty: Arc<ContentService<FacultyMembers>>,
}

impl ApplicationServices {
    pub fn new(
        departments: Arc<ContentService<Departments>>,
        clinic_services: Arc<ContentService<ClinicServices>>,
        programs: Arc<ContentService<AcademicPrograms>>,
        blog: Arc<ContentService<BlogPosts>>,
        faculty: Arc<ContentService<FacultyMembers>>,
    ) -> Self {
        Self {
            departments,
            clinic_services,
            programs,
            blog,
            faculty,
        }
    }
}
