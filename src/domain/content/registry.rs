// src/domain/content/registry.rs
use std::sync::Arc;

use crate::domain::content::{ContentKind, ContentName, ContentReadStore, Rename, SluggedRecord};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;

/// Domain service guarding slug uniqueness for one entity table.
///
/// The lookup here is the fast path; the table's unique constraint on `slug`
/// remains the final authority when two writers race the same name, and the
/// store maps that violation to the same `DuplicateName` error.
pub struct SlugRegistry<K: ContentKind> {
    read: Arc<dyn ContentReadStore<K>>,
}

impl<K: ContentKind> SlugRegistry<K> {
    pub fn new(read: Arc<dyn ContentReadStore<K>>) -> Self {
        Self { read }
    }

    /// Claim a slug for a new record: derive from the name and fail if any
    /// live row already holds it.
    pub async fn claim_for_create(&self, name: &ContentName) -> DomainResult<Slug> {
        let slug = Slug::derive(name.as_str())?;
        if self.read.find_by_slug(&slug).await?.is_some() {
            return Err(DomainError::DuplicateName(format!(
                "{} with this name already exists",
                K::LABEL
            )));
        }
        Ok(slug)
    }

    /// Claim a slug for a rename. Returns `None` when the proposed name is
    /// string-equal to the stored one: the slug must not be recomputed, even
    /// on repeated calls. A row may always reclaim its own slug (a rename
    /// whose derivation lands on the current value).
    pub async fn claim_for_rename(
        &self,
        current: &K::Record,
        proposed: &str,
    ) -> DomainResult<Option<Rename>> {
        if proposed == current.name() {
            return Ok(None);
        }

        let name = ContentName::new(proposed)?;
        let slug = Slug::derive(name.as_str())?;

        if let Some(existing) = self.read.find_by_slug(&slug).await? {
            if existing.id() != current.id() {
                return Err(DomainError::DuplicateName(format!(
                    "{} with this name already exists",
                    K::LABEL
                )));
            }
        }

        Ok(Some(Rename { name, slug }))
    }
}
