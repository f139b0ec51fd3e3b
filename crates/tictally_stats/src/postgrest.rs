//! Supabase table client over the PostgREST HTTP interface.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Url};
use tracing::{debug, info, instrument};

use crate::{Counter, RemoteEndpoint, StatsBackend, StatsError, StatsMap, StatsRow};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const COLUMNS: &str = "name,wins,draws";

/// Stats backend talking to `{url}/rest/v1/{table}`.
#[derive(Debug, Clone)]
pub struct PostgrestBackend {
    client: reqwest::Client,
    endpoint: RemoteEndpoint,
}

impl PostgrestBackend {
    /// Creates a client for the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the URL is invalid or the HTTP client
    /// cannot be built.
    #[instrument(skip(endpoint), fields(url = %endpoint.url(), table = %endpoint.table()))]
    pub fn new(endpoint: RemoteEndpoint) -> Result<Self, StatsError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let backend = Self { client, endpoint };
        backend.table_url()?;
        info!("Created PostgREST stats backend");
        Ok(backend)
    }

    /// Returns the endpoint.
    pub fn endpoint(&self) -> &RemoteEndpoint {
        &self.endpoint
    }

    fn table_url(&self) -> Result<Url, StatsError> {
        let base = self.endpoint.url().trim_end_matches('/');
        let raw = format!("{}/rest/v1/{}", base, self.endpoint.table());
        Url::parse(&raw).map_err(|e| StatsError::new(format!("Invalid stats URL '{}': {}", raw, e)))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", self.endpoint.key())
            .bearer_auth(self.endpoint.key())
    }

    async fn fetch_rows(&self, filter: &str) -> Result<Vec<StatsRow>, StatsError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", COLUMNS)
            .append_pair("name", filter);

        let rows = self
            .request(Method::GET, url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<StatsRow>>()
            .await?;
        Ok(rows)
    }
}

/// PostgREST `eq` filter for a single name.
fn eq_filter(name: &str) -> String {
    format!("eq.{}", name)
}

/// PostgREST `in` filter, quoting each name so commas and parentheses survive.
fn in_filter(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|n| format!("\"{}\"", n.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}

#[async_trait]
impl StatsBackend for PostgrestBackend {
    #[instrument(skip(self))]
    async fn insert_missing(&self, names: &[String]) -> Result<(), StatsError> {
        let rows: Vec<StatsRow> = names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(StatsRow::zero)
            .collect();
        if rows.is_empty() {
            return Ok(());
        }

        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("on_conflict", "name");

        self.request(Method::POST, url)
            .header("Prefer", "resolution=ignore-duplicates,return=minimal")
            .json(&rows)
            .send()
            .await?
            .error_for_status()?;

        debug!(count = rows.len(), "Ensured stats rows");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn select(&self, names: &[String]) -> Result<StatsMap, StatsError> {
        if names.is_empty() {
            return Ok(StatsMap::new());
        }
        let rows = self.fetch_rows(&in_filter(names)).await?;
        debug!(count = rows.len(), "Fetched stats rows");
        Ok(rows.into_iter().map(|r| (r.name.clone(), r.stats())).collect())
    }

    #[instrument(skip(self))]
    async fn read(&self, name: &str, counter: Counter) -> Result<u32, StatsError> {
        let rows = self.fetch_rows(&eq_filter(name)).await?;
        let row = rows
            .first()
            .ok_or_else(|| StatsError::new(format!("No stats row for '{}'", name)))?;
        Ok(row.stats().get(counter))
    }

    #[instrument(skip(self))]
    async fn write(&self, name: &str, counter: Counter, value: u32) -> Result<(), StatsError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("name", &eq_filter(name));

        let mut body = serde_json::Map::new();
        body.insert(counter.column().to_string(), value.into());

        self.request(Method::PATCH, url)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        debug!(column = counter.column(), value, "Wrote stats counter");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_filter_quotes_names() {
        let names = vec!["Alice".to_string(), "Bob, Jr.".to_string(), "Say \"hi\"".to_string()];
        assert_eq!(in_filter(&names), r#"in.("Alice","Bob, Jr.","Say \"hi\"")"#);
    }

    #[test]
    fn test_table_url_joins_path() {
        let backend = PostgrestBackend::new(RemoteEndpoint::new("https://abc.supabase.co/", "k"))
            .expect("valid endpoint");
        assert_eq!(
            backend.table_url().expect("valid url").as_str(),
            "https://abc.supabase.co/rest/v1/player_stats"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(PostgrestBackend::new(RemoteEndpoint::new("not a url", "k")).is_err());
    }
}
