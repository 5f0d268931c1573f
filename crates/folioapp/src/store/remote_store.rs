use super::table::TableApi;
use super::{missing_for_update, unavailable, write_failure, ContentStore};
use crate::error::Result;
use crate::model::{OrderKey, Record, RecordId};
use serde_json::Value;
use tracing::{debug, info};

/// Columns owned by the table service. Never sent on writes.
const SERVER_COLUMNS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Content store over a remote table service.
///
/// Each content type maps to its own table ([`crate::model::ContentKind::table`]).
/// Records cross the wire through [`Record::to_row`] / [`Record::from_row`], so
/// blog posts travel in their `read_time` table shape.
pub struct RemoteStore<A: TableApi> {
    api: A,
}

impl<A: TableApi> RemoteStore<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

fn strip_server_columns(row: &mut Value) {
    if let Value::Object(map) = row {
        for column in SERVER_COLUMNS {
            map.remove(column);
        }
    }
}

impl<A: TableApi, T: Record> ContentStore<T> for RemoteStore<A> {
    fn fetch_all(&self, order: OrderKey) -> Result<Vec<T>> {
        let table = T::KIND.table();
        debug!(table, ?order, "remote fetch");
        let rows = self
            .api
            .select(table, order)
            .map_err(|e| unavailable(T::KIND, e))?;
        rows.into_iter()
            .map(T::from_row)
            .collect::<Result<Vec<T>>>()
            .map_err(|e| unavailable(T::KIND, e))
    }

    fn insert(&mut self, draft: &T) -> Result<T> {
        let table = T::KIND.table();
        let mut row = draft.to_row()?;
        strip_server_columns(&mut row);

        let stored = self
            .api
            .insert(table, row)
            .and_then(T::from_row)
            .map_err(|e| write_failure(T::KIND, e))?;
        info!(table, id = stored.id(), "inserted");
        Ok(stored)
    }

    fn update(&mut self, id: RecordId, record: &T) -> Result<()> {
        let table = T::KIND.table();
        let mut row = record.to_row()?;
        strip_server_columns(&mut row);

        let affected = self
            .api
            .update(table, id, row)
            .map_err(|e| write_failure(T::KIND, e))?;
        if affected.is_empty() {
            return Err(missing_for_update(T::KIND, id));
        }
        info!(table, id, "updated");
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        let table = T::KIND.table();
        self.api
            .delete(table, id)
            .map_err(|e| write_failure(T::KIND, e))?;
        info!(table, id, "deleted");
        Ok(())
    }
}
