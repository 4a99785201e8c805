// src/domain/content/mod.rs
//
// Shared vocabulary for slug-addressed content entities. Every entity table
// (departments, services, programs, blog posts, faculty) binds its own
// record/draft/patch/filter types to this vocabulary through a `ContentKind`
// marker, so the create/rename/delete protocol exists exactly once.
pub mod registry;

pub use registry::SlugRegistry;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// Display name (or title) of a content record. Non-empty; the slug is
/// derived from it on create and on rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentName(String);

impl ContentName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentName> for String {
    fn from(value: ContentName) -> Self {
        value.0
    }
}

/// A persisted row participating in the slug protocol.
pub trait SluggedRecord {
    fn id(&self) -> RecordId;
    fn name(&self) -> &str;
    fn slug(&self) -> &Slug;
}

/// Entity-specific patch payload. The protocol only needs to know whether the
/// patch renames the record; the store applies the remaining fields.
pub trait ContentPatch {
    fn new_name(&self) -> Option<&str>;
}

/// Marker binding one entity family to the generic protocol.
pub trait ContentKind: Send + Sync + 'static {
    type Record: SluggedRecord + Clone + Send + Sync;
    type Draft: Send;
    type Patch: ContentPatch + Send;
    type Filter: Send;

    /// Lowercase label used in error messages ("department", "blog post").
    const LABEL: &'static str;
}

pub struct NewContent<K: ContentKind> {
    pub name: ContentName,
    pub slug: Slug,
    pub draft: K::Draft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Rename {
    pub name: ContentName,
    pub slug: Slug,
}

/// One row write: optional rename plus the entity-specific patch, stamped
/// with the new `updated_at`. Stores must apply this as a single statement so
/// a cancelled request never leaves the slug changed and the rest not.
pub struct ContentUpdate<K: ContentKind> {
    pub id: RecordId,
    pub rename: Option<Rename>,
    pub patch: K::Patch,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ContentReadStore<K: ContentKind>: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<K::Record>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<K::Record>>;
    async fn list(&self, filter: K::Filter) -> DomainResult<Vec<K::Record>>;
}

#[async_trait]
pub trait ContentWriteStore<K: ContentKind>: Send + Sync {
    async fn insert(&self, new: NewContent<K>) -> DomainResult<K::Record>;
    async fn update(&self, update: ContentUpdate<K>) -> DomainResult<K::Record>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_must_be_positive() {
        assert!(RecordId::new(0).is_err());
        assert!(RecordId::new(-3).is_err());
        assert_eq!(i64::from(RecordId::new(7).unwrap()), 7);
    }

    #[test]
    fn content_name_rejects_blank_input() {
        assert!(ContentName::new("").is_err());
        assert!(ContentName::new("  \t ").is_err());
        assert_eq!(ContentName::new("Endodontics").unwrap().as_str(), "Endodontics");
    }
}
