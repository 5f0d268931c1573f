use crate::error::Result;
use crate::model::{OrderKey, RecordId};
use serde_json::Value;

/// Request surface of a remote table service.
///
/// Rows are JSON objects in the table's own column naming. The service assigns
/// `id`, `created_at` and `updated_at`; callers never send them on insert.
pub trait TableApi {
    /// All rows of `table`, ordered server-side when `order` names a column.
    fn select(&self, table: &str, order: OrderKey) -> Result<Vec<Value>>;

    /// Insert one row and return it as stored.
    fn insert(&self, table: &str, row: Value) -> Result<Value>;

    /// Update the row where `id` matches. Returns the affected rows, so an empty
    /// result means nothing matched.
    fn update(&self, table: &str, id: RecordId, row: Value) -> Result<Vec<Value>>;

    /// Delete the row where `id` matches.
    fn delete(&self, table: &str, id: RecordId) -> Result<()>;
}
