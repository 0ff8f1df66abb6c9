//! HTTP access to the NewsData `latest` endpoint and the paging loop.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::header;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, info};

use super::types::{Category, FetchRequest, NewsDataPage, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
use crate::article::ArticleRecord;
use crate::TARGET_WEB_REQUEST;

/// Anything that can hand out pages of the `latest` feed.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetches one page; `page` is the `nextPage` token of the previous one.
    async fn fetch_page(&self, request: &FetchRequest, page: Option<&str>) -> Result<NewsDataPage>;
}

pub struct NewsDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsDataClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/latest", self.base_url)
    }
}

impl PageSource for NewsDataClient {
    async fn fetch_page(&self, request: &FetchRequest, page: Option<&str>) -> Result<NewsDataPage> {
        let mut query: Vec<(&str, &str)> = vec![
            ("apikey", self.api_key.as_str()),
            ("language", request.language.as_str()),
        ];
        if let Some(category) = request.category.and_then(Category::as_filter) {
            query.push(("category", category.as_str()));
        }
        if let Some(token) = page {
            query.push(("page", token));
        }

        let url = self.endpoint();
        debug!(target: TARGET_WEB_REQUEST, "Requesting {} (page token: {:?})", url, page);

        let response = timeout(
            REQUEST_TIMEOUT,
            self.http
                .get(&url)
                .header(header::ACCEPT, "application/json")
                .query(&query)
                .send(),
        )
        .await
        .map_err(|_| {
            anyhow!(
                "Request to {} timed out after {} seconds",
                url,
                REQUEST_TIMEOUT.as_secs()
            )
        })?
        .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("HTTP {} from {}: {}", status, url, body);
        }

        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to decode JSON from {}", url))?;
        parse_page(body)
    }
}

/// Validates the envelope of a `latest` response and decodes it.
pub fn parse_page(body: Value) -> Result<NewsDataPage> {
    if body.get("status").and_then(Value::as_str) != Some("success") {
        bail!("NewsData returned an error: {}", body);
    }
    serde_json::from_value(body).context("Unexpected NewsData response shape")
}

/// Collects up to `request.count` articles, following `nextPage` tokens for at
/// most `request.max_calls` requests.
pub async fn fetch_top_n<S: PageSource>(
    source: &S,
    request: &FetchRequest,
) -> Result<Vec<ArticleRecord>> {
    let mut items: Vec<ArticleRecord> = Vec::new();
    let mut page_token: Option<String> = None;

    for call in 1..=request.max_calls {
        let page = source.fetch_page(request, page_token.as_deref()).await?;
        let received = page.results.as_ref().map(Vec::len).unwrap_or(0);
        items.extend(page.results.unwrap_or_default());
        debug!(
            target: TARGET_WEB_REQUEST,
            "Page {} returned {} articles ({} total)", call, received, items.len()
        );

        if items.len() >= request.count {
            break;
        }
        match page.next_page {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    items.truncate(request.count);
    info!(target: TARGET_WEB_REQUEST, "Fetched {} articles", items.len());
    Ok(items)
}
