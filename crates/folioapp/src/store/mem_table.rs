use super::table::TableApi;
use crate::error::{FolioError, Result};
use crate::model::{OrderKey, RecordId};
use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::HashMap;

/// In-memory table service for testing.
///
/// Behaves like the hosted service as far as the stores can tell: serial ids
/// per table starting at 1, server-assigned `created_at`/`updated_at`, and
/// updates that report zero rows when the id does not match. Timestamps come
/// from a clock that advances one second per write so ordering is deterministic.
#[derive(Default)]
pub struct MemTable {
    tables: RefCell<HashMap<String, Vec<Value>>>,
    next_ids: RefCell<HashMap<String, RecordId>>,
    ticks: Cell<i64>,
    offline: Cell<bool>,
    reject_writes: Cell<bool>,
    fail_reads: Cell<bool>,
}

impl MemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every request as an unreachable service would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Answer writes with an error status while reads keep working.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Answer selects with an error status while writes keep working.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Raw rows of a table, in storage order.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.borrow().get(table).cloned().unwrap_or_default()
    }

    fn now(&self) -> String {
        let tick = self.ticks.get() + 1;
        self.ticks.set(tick);
        let epoch: DateTime<Utc> = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default();
        (epoch + Duration::seconds(tick)).to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn check_reachable(&self) -> Result<()> {
        if self.offline.get() {
            return Err(FolioError::Api("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<()> {
        self.check_reachable()?;
        if self.reject_writes.get() {
            return Err(FolioError::Api("HTTP 403: permission denied".to_string()));
        }
        Ok(())
    }
}

fn object(row: Value) -> Result<Map<String, Value>> {
    match row {
        Value::Object(map) => Ok(map),
        other => Err(FolioError::Api(format!("HTTP 400: expected an object, got {}", other))),
    }
}

fn compare_column(a: &Value, b: &Value, column: &str) -> Ordering {
    match (a.get(column), b.get(column)) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Null) | None, Some(Value::Null) | None) => Ordering::Equal,
        (Some(Value::Null) | None, _) => Ordering::Greater,
        (_, Some(Value::Null) | None) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

impl TableApi for MemTable {
    fn select(&self, table: &str, order: OrderKey) -> Result<Vec<Value>> {
        self.check_reachable()?;
        if self.fail_reads.get() {
            return Err(FolioError::Api("HTTP 503: service unavailable".to_string()));
        }
        let mut rows = self.rows(table);
        if let Some((column, descending)) = order.column() {
            rows.sort_by(|a, b| {
                let ord = compare_column(a, b, column);
                if descending {
                    match (a.get(column), b.get(column)) {
                        // Nulls stay last either way.
                        (Some(Value::Null) | None, _) | (_, Some(Value::Null) | None) => ord,
                        _ => ord.reverse(),
                    }
                } else {
                    ord
                }
            });
        }
        Ok(rows)
    }

    fn insert(&self, table: &str, row: Value) -> Result<Value> {
        self.check_writable()?;
        let mut map = object(row)?;

        let id = {
            let mut next_ids = self.next_ids.borrow_mut();
            let next = next_ids.entry(table.to_string()).or_insert(1);
            let id = *next;
            *next += 1;
            id
        };
        let now = self.now();
        map.insert("id".to_string(), Value::from(id));
        map.insert("created_at".to_string(), Value::String(now.clone()));
        map.insert("updated_at".to_string(), Value::String(now));

        let stored = Value::Object(map);
        self.tables
            .borrow_mut()
            .entry(table.to_string())
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    fn update(&self, table: &str, id: RecordId, row: Value) -> Result<Vec<Value>> {
        self.check_writable()?;
        let changes = object(row)?;
        let now = self.now();

        let mut tables = self.tables.borrow_mut();
        let Some(rows) = tables.get_mut(table) else {
            return Ok(Vec::new());
        };
        let mut affected = Vec::new();
        for existing in rows.iter_mut() {
            if existing.get("id").and_then(Value::as_u64) != Some(id) {
                continue;
            }
            if let Value::Object(map) = existing {
                for (column, value) in &changes {
                    if column != "id" && column != "created_at" {
                        map.insert(column.clone(), value.clone());
                    }
                }
                map.insert("updated_at".to_string(), Value::String(now.clone()));
            }
            affected.push(existing.clone());
        }
        Ok(affected)
    }

    fn delete(&self, table: &str, id: RecordId) -> Result<()> {
        self.check_writable()?;
        if let Some(rows) = self.tables.borrow_mut().get_mut(table) {
            rows.retain(|row| row.get("id").and_then(Value::as_u64) != Some(id));
        }
        Ok(())
    }
}
