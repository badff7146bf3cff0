//! Episode screen (per-series episode list)

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{Episode, EpisodeCreate, EpisodeFreeUpdate, EpisodePageRequest, EpisodeUpdate};
use shared::response::PageResponse;
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the episode page snapshot
pub const EPISODE_PAGE_KEY: &str = "episodePage";

/// Episode configuration screen, scoped to one series
pub struct EpisodeScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    filter: EpisodePageRequest,
    snapshot: Option<PageResponse<Episode>>,
}

impl<C: HttpClient> EpisodeScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>, series_id: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            filter: EpisodePageRequest {
                series_id: series_id.into(),
                page_num: 1,
                page_size: 10,
            },
            snapshot: None,
        }
    }

    pub fn filter_mut(&mut self) -> &mut EpisodePageRequest {
        &mut self.filter
    }

    pub fn snapshot(&self) -> Option<&PageResponse<Episode>> {
        self.snapshot.as_ref()
    }

    /// Fetch the current page and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&PageResponse<Episode>> {
        let page = self.client.episodes().page(&self.filter).await?;
        self.cache.put(EPISODE_PAGE_KEY, serde_json::to_value(&page)?);
        Ok(self.snapshot.insert(page))
    }

    /// Create an episode shell and reload
    pub async fn create(&mut self, episode: &EpisodeCreate) -> EditorResult<()> {
        episode.validate()?;
        self.client.episodes().create(episode).await?;
        self.reload().await
    }

    /// Patch an episode and reload
    pub async fn update(&mut self, episode_id: &str, update: &EpisodeUpdate) -> EditorResult<()> {
        self.client.episodes().update(episode_id, update).await?;
        self.reload().await
    }

    /// Toggle an episode's free flag and reload
    pub async fn set_free(&mut self, episode_id: &str, is_free: bool) -> EditorResult<()> {
        let update = EpisodeFreeUpdate {
            episode_id: episode_id.to_string(),
            series_id: self.filter.series_id.clone(),
            is_free,
        };
        self.client.episodes().set_free(&update).await?;
        self.reload().await
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(EPISODE_PAGE_KEY);
        self.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, FakeTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_set_free_carries_series_scope() {
        let transport = FakeTransport::new();
        transport.on(
            "PUT",
            "/api/admin/episode/e-1/free",
            ok_envelope(json!(null)),
        );
        transport.on(
            "POST",
            "/api/admin/episode/page",
            ok_envelope(json!({
                "records": [],
                "pagination": {"current": "1", "size": "10", "total": "0", "pages": "0"}
            })),
        );

        let mut screen = EpisodeScreen::new(
            SlateClient::new(transport),
            Arc::new(QueryCache::new()),
            "s-9",
        );
        screen.set_free("e-1", true).await.unwrap();

        let calls = screen.client.transport().calls();
        assert_eq!(
            calls[0].body.as_ref().unwrap(),
            &json!({"episodeId": "e-1", "seriesId": "s-9", "isFree": true})
        );
    }
}
