//! Google Sheets v4 REST client
//!
//! Implements [`SheetStore`] over the `spreadsheets.values` endpoints. Every call
//! is a single round trip: no retries, no polling.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::limiter::RequestLimiter;
use super::store::{CellUpdate, Grid, SheetStore, StoreError};

pub const DEFAULT_API_URL: &str = "https://sheets.googleapis.com";

/// Values are written as if typed into the sheet UI (dates, numbers get parsed)
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Connection settings for one spreadsheet document
#[derive(Debug, Clone)]
pub struct SheetsClientConfig {
    pub spreadsheet_id: String,
    pub api_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
    /// Cap on in-flight requests
    pub max_concurrent_requests: usize,
}

impl SheetsClientConfig {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
            max_concurrent_requests: 4,
        }
    }
}

/// Response body of `values.get`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateBody<'a> {
    value_input_option: &'a str,
    data: Vec<BatchUpdateEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct BatchUpdateEntry<'a> {
    range: &'a str,
    values: [[&'a str; 1]; 1],
}

/// Sheets API client bound to a single spreadsheet
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsClientConfig,
    limiter: RequestLimiter,
}

impl SheetsClient {
    pub fn new(config: SheetsClientConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let limiter = RequestLimiter::new(config.max_concurrent_requests);
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    fn values_url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.spreadsheet_id,
            suffix
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and turn non-2xx statuses into [`StoreError::Status`]
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        range: &str,
    ) -> Result<reqwest::Response, StoreError> {
        let _permit = self.limiter.acquire().await?;
        let started = Instant::now();
        let response = self.authorize(request).send().await?;
        let status = response.status();
        debug!(
            "Sheets API {} '{}' in {:.1}ms",
            status,
            range,
            started.elapsed().as_secs_f64() * 1000.0
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                range: range.to_string(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Grid, StoreError> {
        let url = self.values_url(&format!("/{}", urlencoding::encode(range)));
        let request = self
            .http
            .get(url)
            .query(&[("valueRenderOption", "FORMATTED_VALUE")]);
        let response = self.send(request, range).await?;
        let body = response.text().await?;
        let value_range: ValueRange = serde_json::from_str(&body)?;
        Ok(values_to_grid(value_range.values))
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<(), StoreError> {
        let url = self.values_url(&format!("/{}:append", urlencoding::encode(range)));
        let request = self
            .http
            .post(url)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .json(&json!({ "values": rows }));
        self.send(request, range).await?;
        Ok(())
    }

    async fn batch_update_cells(&self, updates: &[CellUpdate]) -> Result<(), StoreError> {
        let label = updates
            .iter()
            .map(|u| u.range.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let request = self
            .http
            .post(self.values_url(":batchUpdate"))
            .json(&batch_update_body(updates));
        self.send(request, &label).await?;
        Ok(())
    }
}

fn batch_update_body(updates: &[CellUpdate]) -> BatchUpdateBody<'_> {
    BatchUpdateBody {
        value_input_option: VALUE_INPUT_OPTION,
        data: updates
            .iter()
            .map(|u| BatchUpdateEntry {
                range: &u.range,
                values: [[u.value.as_str()]],
            })
            .collect(),
    }
}

/// Flatten API scalars into display strings
fn values_to_grid(values: Vec<Vec<Value>>) -> Grid {
    values
        .into_iter()
        .map(|row| row.into_iter().map(scalar_to_string).collect())
        .collect()
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_without_values_is_empty_grid() {
        let parsed: ValueRange = serde_json::from_str(r#"{"range":"11!A9:F12"}"#).unwrap();
        assert!(values_to_grid(parsed.values).is_empty());
    }

    #[test]
    fn test_scalars_become_strings() {
        let parsed: ValueRange = serde_json::from_str(
            r#"{"range":"11!A9:C10","values":[["Bob", 3, true],[null]]}"#,
        )
        .unwrap();
        let grid = values_to_grid(parsed.values);
        assert_eq!(grid[0], vec!["Bob", "3", "TRUE"]);
        assert_eq!(grid[1], vec![""]);
    }

    #[test]
    fn test_batch_update_body_shape() {
        let updates = vec![
            CellUpdate::new("11!B10", "Alice"),
            CellUpdate::new("11!C11", "Bob"),
        ];
        let body = serde_json::to_value(batch_update_body(&updates)).unwrap();
        assert_eq!(
            body,
            json!({
                "valueInputOption": "USER_ENTERED",
                "data": [
                    {"range": "11!B10", "values": [["Alice"]]},
                    {"range": "11!C11", "values": [["Bob"]]}
                ]
            })
        );
    }

    #[test]
    fn test_values_url_joins_base_and_spreadsheet() {
        let mut config = SheetsClientConfig::new("sheet-123");
        config.api_url = "http://localhost:9000/".to_string();
        let client = SheetsClient::new(config).unwrap();
        assert_eq!(
            client.values_url(":batchUpdate"),
            "http://localhost:9000/v4/spreadsheets/sheet-123/values:batchUpdate"
        );
    }
}
