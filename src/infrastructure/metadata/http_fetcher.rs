//! HTTP implementation of [`MetadataFetcher`].

use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::{Client, header, redirect};
use url::Url;

use super::html::extract_metadata;
use crate::domain::entities::LinkMetadata;
use crate::domain::metadata_fetcher::{FetchError, MetadataFetcher};

const MAX_REDIRECTS: usize = 5;

/// Tunables for outbound preview requests.
#[derive(Debug, Clone)]
pub struct FetcherSettings {
    pub timeout: Duration,
    pub user_agent: String,
    /// Bytes of the response body that are read; the rest is discarded.
    pub max_body_bytes: usize,
}

/// Downloads linked pages and extracts their preview metadata.
pub struct HttpMetadataFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpMetadataFetcher {
    /// Builds the fetcher and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(settings: FetcherSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            max_body_bytes: settings.max_body_bytes,
        })
    }

    async fn read_body(&self, mut response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?
        {
            let remaining = self.max_body_bytes.saturating_sub(body.len());
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

/// Turns a stored post link into a fetchable URL.
///
/// Links were accepted without a scheme, so scheme-less links are fetched over
/// HTTPS.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if the result is not a valid HTTP(S) URL.
pub fn resolve_target(link: &str) -> Result<Url, FetchError> {
    let link = link.trim();
    let lower = link.to_ascii_lowercase();

    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    };

    let url = Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme '{other}'"))),
    }
}

/// Decodes a page body using the charset of its `Content-Type`.
///
/// Missing or unknown charsets fall back to UTF-8. A byte order mark wins over
/// the header.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<LinkMetadata, FetchError> {
        let target = resolve_target(url)?;

        let response = self
            .client
            .get(target.clone())
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: target.to_string(),
            });
        }

        let page_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = self.read_body(response).await?;
        let html = decode_body(&body, content_type.as_deref());

        tracing::debug!(url = %page_url, bytes = body.len(), "Fetched link preview");

        Ok(extract_metadata(&html, &page_url))
    }
}
