//! Homepage carousel screen

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{CarouselCreate, CarouselSlot};
use shared::request::PageRequest;
use shared::response::PageResponse;
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the carousel page snapshot
pub const CAROUSEL_PAGE_KEY: &str = "carouselPage";

/// Carousel slot management screen
pub struct CarouselScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    filter: PageRequest,
    snapshot: Option<PageResponse<CarouselSlot>>,
}

impl<C: HttpClient> CarouselScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            // slots render in position order
            filter: PageRequest::new(1, 10).sort_by("position", true),
            snapshot: None,
        }
    }

    pub fn snapshot(&self) -> Option<&PageResponse<CarouselSlot>> {
        self.snapshot.as_ref()
    }

    /// Fetch the current page and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&PageResponse<CarouselSlot>> {
        let page = self.client.homepage().page(&self.filter).await?;
        self.cache.put(CAROUSEL_PAGE_KEY, serde_json::to_value(&page)?);
        Ok(self.snapshot.insert(page))
    }

    /// Create a slot and reload
    pub async fn create(&mut self, slot: &CarouselCreate) -> EditorResult<()> {
        slot.validate()?;
        self.client.homepage().create(slot).await?;
        self.reload().await
    }

    /// Replace a slot and reload
    pub async fn update(&mut self, slot: &CarouselSlot) -> EditorResult<()> {
        self.client.homepage().update(slot).await?;
        self.reload().await
    }

    /// Delete a slot and reload
    pub async fn delete(&mut self, carousel_id: &str) -> EditorResult<()> {
        self.client.homepage().delete(carousel_id).await?;
        self.reload().await
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(CAROUSEL_PAGE_KEY);
        self.load().await?;
        Ok(())
    }
}
