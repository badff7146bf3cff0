//! Homepage carousel endpoints (`/api/admin/homepage/...`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{CarouselCreate, CarouselSlot};
use shared::request::PageRequest;
use shared::response::{ApiResponse, PageResponse};

/// Homepage carousel API
pub struct HomepageApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> HomepageApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of carousel slots, position-sorted by default
    pub async fn page(&self, request: &PageRequest) -> ClientResult<PageResponse<CarouselSlot>> {
        let resp: ApiResponse<PageResponse<CarouselSlot>> = self
            .transport
            .post("/api/admin/homepage/page", request)
            .await?;
        take_data(resp)
    }

    /// Create a carousel slot
    pub async fn create(&self, slot: &CarouselCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/homepage", slot).await?;
        expect_ok(resp)
    }

    /// Replace a carousel slot
    pub async fn update(&self, slot: &CarouselSlot) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(&format!("/api/admin/homepage/{}", slot.carousel_id), slot)
            .await?;
        expect_ok(resp)
    }

    /// Delete a carousel slot
    pub async fn delete(&self, carousel_id: &str) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete(&format!("/api/admin/homepage/{}", carousel_id))
            .await?;
        expect_ok(resp)
    }
}
