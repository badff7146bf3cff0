//! Episode endpoints (`/api/admin/episode/...`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{Episode, EpisodeCreate, EpisodeFreeUpdate, EpisodePageRequest, EpisodeUpdate};
use shared::response::{ApiResponse, PageResponse};

/// Episode API
pub struct EpisodeApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> EpisodeApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of a series' episodes
    pub async fn page(&self, request: &EpisodePageRequest) -> ClientResult<PageResponse<Episode>> {
        let resp: ApiResponse<PageResponse<Episode>> = self
            .transport
            .post("/api/admin/episode/page", request)
            .await?;
        take_data(resp)
    }

    /// Create an episode shell (video gets attached later)
    pub async fn create(&self, episode: &EpisodeCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/episode", episode).await?;
        expect_ok(resp)
    }

    /// Patch an episode
    pub async fn update(&self, episode_id: &str, update: &EpisodeUpdate) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(&format!("/api/admin/episode/{}", episode_id), update)
            .await?;
        expect_ok(resp)
    }

    /// Toggle the free flag
    pub async fn set_free(&self, update: &EpisodeFreeUpdate) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(
                &format!("/api/admin/episode/{}/free", update.episode_id),
                update,
            )
            .await?;
        expect_ok(resp)
    }
}
