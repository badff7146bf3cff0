//! Series screen

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{SeriesCreate, SeriesDetail, SeriesPage, SeriesPageRequest};
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the series page snapshot
pub const SERIES_PAGE_KEY: &str = "seriesPage";

/// Series list + edit screen
pub struct SeriesScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    filter: SeriesPageRequest,
    snapshot: Option<SeriesPage>,
}

impl<C: HttpClient> SeriesScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            filter: SeriesPageRequest::new(1, 10),
            snapshot: None,
        }
    }

    /// Current page filter, mutated by the toolbar
    pub fn filter_mut(&mut self) -> &mut SeriesPageRequest {
        &mut self.filter
    }

    /// Loaded page, if any
    pub fn snapshot(&self) -> Option<&SeriesPage> {
        self.snapshot.as_ref()
    }

    /// Fetch the current page and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&SeriesPage> {
        let page = self.client.series().page(&self.filter).await?;
        self.cache.put(SERIES_PAGE_KEY, serde_json::to_value(&page)?);
        Ok(self.snapshot.insert(page))
    }

    /// Detail fetch for the edit drawer
    pub async fn detail(&self, series_id: &str) -> EditorResult<SeriesDetail> {
        Ok(self.client.series().get(series_id).await?)
    }

    /// Create a series and reload the page
    pub async fn create(&mut self, series: &SeriesCreate) -> EditorResult<()> {
        series.validate()?;
        self.client.series().create(series).await?;
        self.reload().await
    }

    /// Update a series and reload the page
    pub async fn update(&mut self, series_id: &str, series: &SeriesCreate) -> EditorResult<()> {
        series.validate()?;
        self.client.series().update(series_id, series).await?;
        self.reload().await
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(SERIES_PAGE_KEY);
        self.load().await?;
        Ok(())
    }
}
