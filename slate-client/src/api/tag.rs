//! Tag endpoints (`/api/admin/tags`, `/api/admin/short-tags`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{SeriesTagMapping, SeriesTagRef, Tag, TagCreate, TagUpdate};
use shared::response::ApiResponse;

/// Tag API
pub struct TagApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> TagApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// All tags
    pub async fn list(&self) -> ClientResult<Vec<Tag>> {
        let resp: ApiResponse<Vec<Tag>> = self.transport.get("/api/admin/tags/list").await?;
        take_data(resp)
    }

    /// Single tag detail
    pub async fn get(&self, tag_id: &str) -> ClientResult<Tag> {
        let resp: ApiResponse<Tag> = self
            .transport
            .get(&format!("/api/admin/tags/{}", tag_id))
            .await?;
        take_data(resp)
    }

    /// Create a tag
    pub async fn create(&self, tag: &TagCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/tags", tag).await?;
        expect_ok(resp)
    }

    /// Update a tag
    pub async fn update(&self, tag: &TagUpdate) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(&format!("/api/admin/tags/{}", tag.tag_id), tag)
            .await?;
        expect_ok(resp)
    }

    /// Delete a tag
    pub async fn delete(&self, tag_id: &str) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete(&format!("/api/admin/tags/{}", tag_id))
            .await?;
        expect_ok(resp)
    }

    // ==================== Series/tag mappings ====================

    /// Tags attached to a series
    pub async fn for_series(&self, series_id: &str) -> ClientResult<Vec<SeriesTagMapping>> {
        let resp: ApiResponse<Vec<SeriesTagMapping>> = self
            .transport
            .get(&format!("/api/admin/short-tags/series/{}/tags", series_id))
            .await?;
        take_data(resp)
    }

    /// Attach a tag to a series
    pub async fn add_to_series(&self, mapping: &SeriesTagRef) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post("/api/admin/short-tags/add", mapping)
            .await?;
        expect_ok(resp)
    }

    /// Detach a tag from a series
    ///
    /// The backend takes the mapping in a DELETE body.
    pub async fn remove_from_series(&self, mapping: &SeriesTagRef) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete_with_body("/api/admin/short-tags/remove", mapping)
            .await?;
        expect_ok(resp)
    }
}
