//! Series endpoints (`/api/admin/series/...`)

use super::{take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{SeriesCreate, SeriesDetail, SeriesPage, SeriesPageRequest};
use shared::response::ApiResponse;

/// Series API
pub struct SeriesApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> SeriesApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of series
    pub async fn page(&self, request: &SeriesPageRequest) -> ClientResult<SeriesPage> {
        let resp: ApiResponse<SeriesPage> = self
            .transport
            .post("/api/admin/series/page", request)
            .await?;
        take_data(resp)
    }

    /// Fetch a single series with detail fields
    pub async fn get(&self, series_id: &str) -> ClientResult<SeriesDetail> {
        let resp: ApiResponse<SeriesDetail> = self
            .transport
            .get(&format!("/api/admin/series/{}", series_id))
            .await?;
        take_data(resp)
    }

    /// Create a series
    pub async fn create(&self, series: &SeriesCreate) -> ClientResult<SeriesDetail> {
        let resp: ApiResponse<SeriesDetail> =
            self.transport.post("/api/admin/series", series).await?;
        take_data(resp)
    }

    /// Replace a series' editable fields
    pub async fn update(&self, series_id: &str, series: &SeriesCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(&format!("/api/admin/series/{}", series_id), series)
            .await?;
        super::expect_ok(resp)
    }
}

