// src/domain/service.rs
use crate::domain::content::{ContentKind, ContentName, ContentPatch, RecordId, SluggedRecord};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// A treatment offered by the clinic ("Teeth Whitening", "Root Canal").
/// Optionally attached to a department.
#[derive(Debug, Clone)]
pub struct ClinicService {
    pub id: RecordId,
    pub name: ContentName,
    pub slug: Slug,
    pub short_description: String,
    pub description: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord for ClinicService {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClinicServiceDraft {
    pub short_description: String,
    pub description: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ClinicServicePatch {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl ContentPatch for ClinicServicePatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicServiceFilter {
    pub include_inactive: bool,
    pub department_id: Option<i64>,
}

pub struct ClinicServices;

impl ContentKind for ClinicServices {
    type Record = ClinicService;
    type Draft = ClinicServiceDraft;
    type Patch = ClinicServicePatch;
    type Filter = ClinicServiceFilter;

    const LABEL: &'static str = "service";
}
