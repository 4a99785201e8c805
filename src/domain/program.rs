// src/domain/program.rs
use crate::domain::content::{ContentKind, ContentName, ContentPatch, RecordId, SluggedRecord};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramType {
    Bds,
    Mds,
    Internship,
    Certificate,
}

impl ProgramType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bds => "bds",
            Self::Mds => "mds",
            Self::Internship => "internship",
            Self::Certificate => "certificate",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "bds" => Ok(Self::Bds),
            "mds" => Ok(Self::Mds),
            "internship" => Ok(Self::Internship),
            "certificate" => Ok(Self::Certificate),
            other => Err(DomainError::Validation(format!(
                "unknown program type: {other}"
            ))),
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic program run by the teaching wing (BDS, MDS, internships).
#[derive(Debug, Clone)]
pub struct AcademicProgram {
    pub id: RecordId,
    pub name: ContentName,
    pub slug: Slug,
    pub program_type: ProgramType,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord for AcademicProgram {
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

#[derive(Debug, Clone)]
pub struct AcademicProgramDraft {
    pub program_type: ProgramType,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AcademicProgramPatch {
    pub name: Option<String>,
    pub program_type: Option<ProgramType>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub is_active: Option<bool>,
}

impl ContentPatch for AcademicProgramPatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcademicProgramFilter {
    pub include_inactive: bool,
    pub program_type: Option<ProgramType>,
}

pub struct AcademicPrograms;

impl ContentKind for AcademicPrograms {
    type Record = AcademicProgram;
    type Draft = AcademicProgramDraft;
    type Patch = AcademicProgramPatch;
    type Filter = AcademicProgramFilter;

    const LABEL: &'static str = "program";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_type_round_trips_through_text() {
        for t in [
            ProgramType::Bds,
            ProgramType::Mds,
            ProgramType::Internship,
            ProgramType::Certificate,
        ] {
            assert_eq!(ProgramType::parse(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn program_type_rejects_unknown_values() {
        assert!(ProgramType::parse("phd").is_err());
    }
}
