// tests/support/mod.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use clinica_core::application::ports::time::Clock;
use clinica_core::domain::content::{
    ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use clinica_core::domain::department::{Department, DepartmentFilter, Departments};
use clinica_core::domain::errors::{DomainError, DomainResult};
use clinica_core::domain::slug::Slug;

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory department table. Rejects duplicate slugs on insert and on
/// rename, mirroring what the database unique constraint would do.
pub struct MemoryDepartmentStore {
    rows: Mutex<Vec<Department>>,
    next_id: AtomicI64,
}

impl MemoryDepartmentStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ContentReadStore<Departments> for MemoryDepartmentStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Department>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Department>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|d| d.slug == *slug).cloned())
    }

    async fn list(&self, filter: DepartmentFilter) -> DomainResult<Vec<Department>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|d| filter.include_inactive || d.is_active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContentWriteStore<Departments> for MemoryDepartmentStore {
    async fn insert(&self, new: NewContent<Departments>) -> DomainResult<Department> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|d| d.slug == new.slug) {
            return Err(DomainError::DuplicateName("slug already exists".into()));
        }

        let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let department = Department {
            id,
            name: new.name,
            slug: new.slug,
            description: new.draft.description,
            icon: new.draft.icon,
            image: new.draft.image,
            is_active: new.draft.is_active,
            display_order: new.draft.display_order,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        rows.push(department.clone());
        Ok(department)
    }

    async fn update(&self, update: ContentUpdate<Departments>) -> DomainResult<Department> {
        let mut rows = self.rows.lock().unwrap();

        if let Some(rename) = &update.rename {
            if rows.iter().any(|d| d.slug == rename.slug && d.id != update.id) {
                return Err(DomainError::DuplicateName("slug already exists".into()));
            }
        }

        let row = rows
            .iter_mut()
            .find(|d| d.id == update.id)
            .ok_or_else(|| DomainError::NotFound("department not found".into()))?;

        if let Some(rename) = update.rename {
            row.name = rename.name;
            row.slug = rename.slug;
        }
        let patch = update.patch;
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(icon) = patch.icon {
            row.icon = Some(icon);
        }
        if let Some(image) = patch.image {
            row.image = Some(image);
        }
        if let Some(is_active) = patch.is_active {
            row.is_active = is_active;
        }
        if let Some(display_order) = patch.display_order {
            row.display_order = display_order;
        }
        row.updated_at = update.updated_at;

        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("department not found".into()));
        }
        Ok(())
    }
}
