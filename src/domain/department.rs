// src/domain/department.rs
use crate::domain::content::{ContentKind, ContentName, ContentPatch, RecordId, SluggedRecord};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Clinical department ("Orthodontics", "Oral & Maxillofacial Surgery").
/// Services and faculty hang off departments.
#[derive(Debug, Clone)]
pub struct Department {
    pub id: RecordId,
    pub name: ContentName,
    pub slug: Slug,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord for Department {
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
pub struct DepartmentDraft {
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl ContentPatch for DepartmentPatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentFilter {
    pub include_inactive: bool,
}

pub struct Departments;

impl ContentKind for Departments {
    type Record = Department;
    type Draft = DepartmentDraft;
    type Patch = DepartmentPatch;
    type Filter = DepartmentFilter;

    const LABEL: &'static str = "department";
}
