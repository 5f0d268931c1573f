use super::backend::StorageBackend;
use super::{missing_for_update, unavailable, write_failure, ContentStore};
use crate::error::{FolioError, Result};
use crate::model::{OrderKey, Record, RecordId};
use crate::seed::SampleContent;
use tracing::{debug, info};

/// Content store over a persistent key-value backend.
///
/// Each content type is one serialized list under its storage key. Every
/// mutation reads the list, changes it, and writes the whole list back.
pub struct LocalStore<B: StorageBackend> {
    /// The underlying key-value backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    seed_defaults: bool,
}

impl<B: StorageBackend> LocalStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            seed_defaults: false,
        }
    }

    /// Serve sample content for a type that has never been saved.
    pub fn with_seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.seed_defaults = seed_defaults;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load<T: SampleContent>(&self) -> Result<Vec<T>> {
        let key = T::KIND.storage_key();
        match self.backend.read(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None if self.seed_defaults => {
                debug!(key, "no saved content, serving samples");
                Ok(T::samples())
            }
            None => Ok(Vec::new()),
        }
    }

    fn save<T: SampleContent>(&self, items: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(items)?;
        self.backend.write(T::KIND.storage_key(), &content)
    }
}

impl<B: StorageBackend, T: SampleContent> ContentStore<T> for LocalStore<B> {
    fn fetch_all(&self, order: OrderKey) -> Result<Vec<T>> {
        debug!(key = T::KIND.storage_key(), ?order, "local fetch");
        let mut items = self.load::<T>().map_err(|e| unavailable(T::KIND, e))?;
        order.sort(&mut items);
        Ok(items)
    }

    fn insert(&mut self, draft: &T) -> Result<T> {
        let mut items = self.load::<T>().map_err(|e| write_failure(T::KIND, e))?;

        let id = match items.iter().map(|r| r.id()).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                FolioError::WriteFailure(format!("no ids left for {}", T::KIND.plural()))
            })?,
        };
        let mut record = draft.clone();
        record.set_id(id);
        items.push(record.clone());

        self.save(&items).map_err(|e| write_failure(T::KIND, e))?;
        info!(kind = %T::KIND, id, "inserted");
        Ok(record)
    }

    fn update(&mut self, id: RecordId, record: &T) -> Result<()> {
        let mut items = self.load::<T>().map_err(|e| write_failure(T::KIND, e))?;

        let slot = items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| missing_for_update(T::KIND, id))?;
        let mut replacement = record.clone();
        replacement.set_id(id);
        *slot = replacement;

        self.save(&items).map_err(|e| write_failure(T::KIND, e))?;
        info!(kind = %T::KIND, id, "updated");
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        let mut items = self.load::<T>().map_err(|e| write_failure(T::KIND, e))?;

        let before = items.len();
        items.retain(|r| r.id() != id);
        if items.len() == before {
            debug!(kind = %T::KIND, id, "delete of missing record is a no-op");
            return Ok(());
        }

        self.save(&items).map_err(|e| write_failure(T::KIND, e))?;
        info!(kind = %T::KIND, id, "deleted");
        Ok(())
    }

    fn serves_samples(&self) -> Result<bool> {
        if !self.seed_defaults {
            return Ok(false);
        }
        let stored = self
            .backend
            .read(T::KIND.storage_key())
            .map_err(|e| unavailable(T::KIND, e))?;
        Ok(stored.is_none())
    }
}
