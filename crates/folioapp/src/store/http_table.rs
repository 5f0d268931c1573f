use super::table::TableApi;
use crate::error::{FolioError, Result};
use crate::model::{OrderKey, RecordId};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// PostgREST-style table client.
///
/// Tables live under `{base_url}/rest/v1/{table}`; rows are filtered with
/// `id=eq.{id}` and ordered with `order={column}.{asc|desc}`. Writes ask for
/// `return=representation` so the stored rows come back in the response.
pub struct HttpTableApi {
    client: Client,
    base_url: String,
}

impl HttpTableApi {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let headers = build_auth_headers(api_key)?;
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text()?;
        Err(FolioError::Api(format!("HTTP {}: {}", status.as_u16(), text)))
    }

    fn select_request(&self, table: &str, order: OrderKey) -> RequestBuilder {
        let mut request = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")]);
        if let Some((column, descending)) = order.column() {
            let direction = if descending { "desc" } else { "asc" };
            request = request.query(&[("order", format!("{}.{}", column, direction))]);
        }
        request
    }

    fn insert_request(&self, table: &str, row: &Value) -> RequestBuilder {
        self.client
            .post(self.table_url(table))
            .header(PREFER, RETURN_REPRESENTATION)
            .json(row)
    }

    fn update_request(&self, table: &str, id: RecordId, row: &Value) -> RequestBuilder {
        self.client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(row)
    }

    fn delete_request(&self, table: &str, id: RecordId) -> RequestBuilder {
        self.client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
    }
}

impl TableApi for HttpTableApi {
    fn select(&self, table: &str, order: OrderKey) -> Result<Vec<Value>> {
        debug!(table, ?order, "select");
        Ok(self.send(self.select_request(table, order))?.json()?)
    }

    fn insert(&self, table: &str, row: Value) -> Result<Value> {
        debug!(table, "insert");
        let rows: Vec<Value> = self.send(self.insert_request(table, &row))?.json()?;
        rows.into_iter()
            .next()
            .ok_or_else(|| FolioError::Api(format!("insert into {} returned no rows", table)))
    }

    fn update(&self, table: &str, id: RecordId, row: Value) -> Result<Vec<Value>> {
        debug!(table, id, "update");
        Ok(self.send(self.update_request(table, id, &row))?.json()?)
    }

    fn delete(&self, table: &str, id: RecordId) -> Result<()> {
        debug!(table, id, "delete");
        self.send(self.delete_request(table, id))?;
        Ok(())
    }
}

fn build_auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "apikey",
        HeaderValue::from_str(api_key).map_err(|e| FolioError::Config(e.to_string()))?,
    );
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| FolioError::Config(e.to_string()))?,
    );
    Ok(headers)
}
