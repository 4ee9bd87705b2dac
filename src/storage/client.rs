//! Supabase REST client
//!
//! A thin wrapper over the PostgREST API: every operation is a single
//! request/response round trip with no caching and no retries beyond what
//! reqwest provides. Filters are passed as PostgREST query parameters, e.g.
//! `("telegram_user_id", "eq.42")` or `("order", "created_at.desc")`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BotError, BotResult};

/// Query parameter list for a store request
pub type Params<'a> = &'a [(&'a str, String)];

/// Client for the Supabase PostgREST endpoint
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client for the given project URL and API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
    }

    async fn check(
        &self,
        table: &str,
        response: reqwest::Response,
    ) -> BotResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BotError::Store(format!("{table}: {status}: {body}")))
    }

    /// Select rows matching the filters
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: Params<'_>,
    ) -> BotResult<Vec<T>> {
        let response = self
            .authed(self.http.get(self.table_url(table)).query(params))
            .send()
            .await?;
        let response = self.check(table, response).await?;
        Ok(response.json().await?)
    }

    /// Select at most one row matching the filters
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        params: Params<'_>,
    ) -> BotResult<Option<T>> {
        let mut params = params.to_vec();
        params.push(("limit", "1".to_string()));
        let mut rows = self.select(table, &params).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert a row and return the stored representation
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> BotResult<T> {
        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let response = self.check(table, response).await?;
        let mut rows: Vec<T> = response.json().await?;
        if rows.is_empty() {
            return Err(BotError::Store(format!(
                "{table}: insert returned no representation"
            )));
        }
        Ok(rows.swap_remove(0))
    }

    /// Patch rows matching the filters, returning the first updated row
    ///
    /// Returns `None` when the filters matched nothing (e.g. the row was
    /// deleted by another session).
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        params: Params<'_>,
        body: &B,
    ) -> BotResult<Option<T>> {
        let response = self
            .authed(self.http.patch(self.table_url(table)).query(params))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let response = self.check(table, response).await?;
        let mut rows: Vec<T> = response.json().await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Delete rows matching the filters
    pub async fn delete(&self, table: &str, params: Params<'_>) -> BotResult<()> {
        let response = self
            .authed(self.http.delete(self.table_url(table)).query(params))
            .send()
            .await?;
        self.check(table, response).await?;
        Ok(())
    }

    /// Count rows matching the filters via the Content-Range header
    pub async fn count(&self, table: &str, params: Params<'_>) -> BotResult<u64> {
        let mut params = params.to_vec();
        params.push(("select", "id".to_string()));
        params.push(("limit", "1".to_string()));

        let response = self
            .authed(self.http.get(self.table_url(table)).query(&params))
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = self.check(table, response).await?;

        let header = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        parse_content_range_total(&header)
            .ok_or_else(|| BotError::Store(format!("{table}: unparseable Content-Range {header}")))
    }
}

/// Extract the total from a PostgREST Content-Range header
///
/// The header looks like `0-4/27` (items 0-4 of 27) or `*/0` for an empty
/// result set.
fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit('/').next()?.parse().ok()
}
