use std::time::Duration;

use crate::wire::{self, ListingEntry};
use crate::{EngineEvent, FailureKind, FetchError, PageEntry, PageProgress, Stage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one listing page and enriches every entry in it.
    ///
    /// An empty `Ok` means the listing is exhausted; no detail lookups are
    /// performed for it. Any single failed lookup fails the whole page.
    async fn fetch_page(
        &self,
        offset: u32,
        limit: u32,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<PageEntry>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn listing_url(&self, offset: u32, limit: u32) -> Result<url::Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut listing = url::Url::parse(&format!("{base}/pokemon"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        listing
            .query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(listing)
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_page(
        &self,
        offset: u32,
        limit: u32,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<PageEntry>, FetchError> {
        let client = self.build_client()?;

        sink.emit(EngineEvent::Progress(PageProgress {
            offset,
            stage: Stage::Listing,
            entry_count: None,
        }));

        let listing_url = self.listing_url(offset, limit)?;
        let bytes = get_bytes(&client, listing_url).await?;
        let listing = wire::parse_listing(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;

        // Exhausted listing: report the empty page without detail work.
        if listing.results.is_empty() {
            return Ok(Vec::new());
        }

        sink.emit(EngineEvent::Progress(PageProgress {
            offset,
            stage: Stage::Enriching,
            entry_count: Some(listing.results.len()),
        }));

        // One detail lookup per entry, all in flight at once, joined with
        // fail-fast semantics: a single failure drops the whole page.
        let lookups = listing
            .results
            .into_iter()
            .map(|entry| enrich_entry(&client, entry));
        let entries = futures_util::future::try_join_all(lookups).await?;

        sink.emit(EngineEvent::Progress(PageProgress {
            offset,
            stage: Stage::Done,
            entry_count: Some(entries.len()),
        }));

        Ok(entries)
    }
}

async fn enrich_entry(
    client: &reqwest::Client,
    listing: ListingEntry,
) -> Result<PageEntry, FetchError> {
    let detail_url = url::Url::parse(&listing.url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let bytes = get_bytes(client, detail_url).await?;
    let detail = wire::parse_detail(&bytes)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    Ok(wire::merge_detail(listing, detail))
}

async fn get_bytes(client: &reqwest::Client, url: url::Url) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await.map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    Ok(bytes.to_vec())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
