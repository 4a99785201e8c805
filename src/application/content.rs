// src/application/content.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::content::{
    ContentKind, ContentName, ContentPatch, ContentReadStore, ContentUpdate, ContentWriteStore,
    NewContent, RecordId, SlugRegistry,
};
use crate::domain::slug::Slug;

/// Command/query service for one slug-addressed entity table. Instantiated
/// once per `ContentKind`; the create/rename/delete protocol lives here and
/// in `SlugRegistry`, nowhere else.
pub struct ContentService<K: ContentKind> {
    read: Arc<dyn ContentReadStore<K>>,
    write: Arc<dyn ContentWriteStore<K>>,
    slugs: SlugRegistry<K>,
    clock: Arc<dyn Clock>,
}

impl<K: ContentKind> ContentService<K> {
    pub fn new(
        read: Arc<dyn ContentReadStore<K>>,
        write: Arc<dyn ContentWriteStore<K>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slugs = SlugRegistry::new(Arc::clone(&read));
        Self {
            read,
            write,
            slugs,
            clock,
        }
    }

    /// Convenience constructor for stores implementing both halves.
    pub fn from_store<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: ContentReadStore<K> + ContentWriteStore<K> + 'static,
    {
        let read: Arc<dyn ContentReadStore<K>> = store.clone();
        let write: Arc<dyn ContentWriteStore<K>> = store;
        Self::new(read, write, clock)
    }

    pub async fn create(
        &self,
        name: impl Into<String>,
        draft: K::Draft,
    ) -> ApplicationResult<K::Record> {
        let name = ContentName::new(name)?;
        let slug = self.slugs.claim_for_create(&name).await?;
        let now = self.clock.now();

        let created = self
            .write
            .insert(NewContent {
                name,
                slug,
                draft,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created)
    }

    /// Apply a patch to an existing record. When the patch carries a changed
    /// name, the slug is re-derived and re-checked; otherwise the stored slug
    /// is left untouched. Rename and remaining fields land in one row write.
    pub async fn update(&self, id: i64, patch: K::Patch) -> ApplicationResult<K::Record> {
        let id = RecordId::new(id)?;
        let current = self
            .read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", K::LABEL)))?;

        let rename = match patch.new_name() {
            Some(proposed) => self.slugs.claim_for_rename(&current, proposed).await?,
            None => None,
        };

        let updated = self
            .write
            .update(ContentUpdate {
                id,
                rename,
                patch,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let id = RecordId::new(id)?;
        self.write.delete(id).await?;
        Ok(())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<K::Record> {
        let id = RecordId::new(id)?;
        self.read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", K::LABEL)))
    }

    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<K::Record> {
        let slug = Slug::new(slug)?;
        self.read
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", K::LABEL)))
    }

    pub async fn list(&self, filter: K::Filter) -> ApplicationResult<Vec<K::Record>> {
        Ok(self.read.list(filter).await?)
    }
}
