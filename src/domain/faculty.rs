// src/domain/faculty.rs
use crate::domain::content::{ContentKind, ContentName, ContentPatch, RecordId, SluggedRecord};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Teaching and clinical staff member.
#[derive(Debug, Clone)]
pub struct FacultyMember {
    pub id: RecordId,
    pub name: ContentName,
    pub slug: Slug,
    pub designation: String,
    pub qualification: String,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord for FacultyMember {
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
pub struct FacultyMemberDraft {
    pub designation: String,
    pub qualification: String,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct FacultyMemberPatch {
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

impl ContentPatch for FacultyMemberPatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FacultyFilter {
    pub include_inactive: bool,
    pub department_id: Option<i64>,
}

pub struct FacultyMembers;

impl ContentKind for FacultyMembers {
    type Record = FacultyMember;
    type Draft = FacultyMemberDraft;
    type Patch = FacultyMemberPatch;
    type Filter = FacultyFilter;

    const LABEL: &'static str = "faculty member";
}
