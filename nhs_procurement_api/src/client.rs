//! HTTP client for the NHS procurement search API.

use std::path::Path;

use chrono::{Days, Local, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    query::{ExportRequest, SearchFilter},
    types::{ExportFormat, ExportPayload, NoticeStatus, NoticeType, SearchResult},
    Error,
};

/// Header carrying the API key, when one is configured.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Look-back window of [`Client::search_recent_default`].
pub const DEFAULT_RECENT_DAYS: u32 = 7;

const USER_AGENT: &str = concat!("nhs-procurement-api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the procurement search and export endpoints.
///
/// Holds one pooled `reqwest::Client` built at construction time. The
/// `Content-Type` and `x-api-key` headers are installed as default headers
/// then and never change, so a single `Client` can be shared across tasks.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL without trailing slash.
    base_api_url: String,
}

impl Client {
    /// Creates a client for `base_url`, sending `api_key` with every request
    /// when one is given.
    ///
    /// The base URL is validated here rather than on first request; no network
    /// I/O happens.
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, Error> {
        let mut config = ClientConfig::new(base_url)?;
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = config.api_key() {
            let mut value = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e)
            })?;

        Ok(Self {
            http,
            base_api_url: config.base_url().to_string(),
        })
    }

    /// Base URL requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_api_url, path)
    }

    /// Sends a JSON `POST` and returns the response if its status is 2xx.
    async fn post<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path);
        let resp = self.http.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url, e);
            Error::RequestFailed(e)
        })?;

        let status = resp.status();
        tracing::debug!("POST {} -> {}", url, status);
        if !status.is_success() {
            let body = resp.text().await.map_err(|e| {
                tracing::error!("Failed to read response body: {}", e);
                Error::RequestFailed(e)
            })?;
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn read_bytes(resp: reqwest::Response) -> Result<Vec<u8>, Error> {
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e)
        })?;
        Ok(bytes.to_vec())
    }

    fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
        serde_json::from_slice::<T>(body).map_err(|e| {
            let text = String::from_utf8_lossy(body);
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&text));
            Error::ParseFailed(e)
        })
    }

    /// Searches for notices matching `filter`.
    ///
    /// Only the fields set on the filter are sent; an empty filter is sent as
    /// `{}` and left for the server to interpret.
    pub async fn search(&self, filter: &SearchFilter) -> Result<SearchResult, Error> {
        let resp = self.post("/api/search", filter).await?;
        let body = Self::read_bytes(resp).await?;
        Self::parse(&body)
    }

    /// Searches for open contracts matching `keywords`.
    pub async fn search_open_contracts(&self, keywords: &[String]) -> Result<SearchResult, Error> {
        let filter = SearchFilter::default()
            .with_keywords(keywords)
            .with_type(NoticeType::Contract)
            .with_status(NoticeStatus::Open);
        self.search(&filter).await
    }

    /// Searches for notices dated within the last `days` calendar days,
    /// up to and including today (local time).
    pub async fn search_recent(&self, days: u32) -> Result<SearchResult, Error> {
        self.search_recent_from(Local::now().date_naive(), days).await
    }

    /// [`Client::search_recent`] over the last [`DEFAULT_RECENT_DAYS`] days.
    pub async fn search_recent_default(&self) -> Result<SearchResult, Error> {
        self.search_recent(DEFAULT_RECENT_DAYS).await
    }

    /// Like [`Client::search_recent`], counting back from `today` instead of
    /// the current date. `days == 0` searches `today` only.
    pub async fn search_recent_from(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<SearchResult, Error> {
        let filter = recent_window(today, days)?;
        self.search(&filter).await
    }

    /// Exports `items` in the given format.
    ///
    /// [`ExportFormat::Json`] responses are decoded; every other format is
    /// returned as the raw response bytes.
    pub async fn export<T: Serialize>(
        &self,
        items: &[T],
        format: ExportFormat,
    ) -> Result<ExportPayload, Error> {
        let request = ExportRequest::new(items, format);
        let resp = self.post("/api/export", &request).await?;
        let body = Self::read_bytes(resp).await?;
        match format {
            ExportFormat::Json => Ok(ExportPayload::Json(Self::parse(&body)?)),
            ExportFormat::Excel | ExportFormat::Csv => Ok(ExportPayload::Binary(body)),
        }
    }

    /// Exports `items` and writes the result to `path`.
    ///
    /// See [`ExportPayload::save`] for how each format is written.
    pub async fn save_export<T: Serialize>(
        &self,
        items: &[T],
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<(), Error> {
        let payload = self.export(items, format).await?;
        payload.save(path).await
    }
}

fn recent_window(today: NaiveDate, days: u32) -> Result<SearchFilter, Error> {
    let date_from = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or(Error::InvalidDateWindow(days))?;
    Ok(SearchFilter::default().with_date_range(date_from, today))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
