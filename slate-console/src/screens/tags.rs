//! Tag screens (tag catalog + per-series tagging)

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{SeriesTagMapping, SeriesTagRef, Tag, TagCreate, TagUpdate};
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the tag catalog
pub const TAG_LIST_KEY: &str = "tagList";

/// Tag management screen
pub struct TagScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    snapshot: Vec<Tag>,
}

impl<C: HttpClient> TagScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            snapshot: Vec::new(),
        }
    }

    /// Loaded catalog
    pub fn tags(&self) -> &[Tag] {
        &self.snapshot
    }

    /// Fetch the catalog and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&[Tag]> {
        let tags = self.client.tags().list().await?;
        self.cache.put(TAG_LIST_KEY, serde_json::to_value(&tags)?);
        self.snapshot = tags;
        Ok(&self.snapshot)
    }

    /// Create a tag and reload
    pub async fn create(&mut self, tag: &TagCreate) -> EditorResult<()> {
        tag.validate()?;
        self.client.tags().create(tag).await?;
        self.reload().await
    }

    /// Update a tag and reload
    pub async fn update(&mut self, tag: &TagUpdate) -> EditorResult<()> {
        tag.validate()?;
        self.client.tags().update(tag).await?;
        self.reload().await
    }

    /// Delete a tag and reload
    pub async fn delete(&mut self, tag_id: &str) -> EditorResult<()> {
        self.client.tags().delete(tag_id).await?;
        self.reload().await
    }

    // ==================== Per-series tagging ====================

    /// Tags attached to one series
    pub async fn series_tags(&self, series_id: &str) -> EditorResult<Vec<SeriesTagMapping>> {
        Ok(self.client.tags().for_series(series_id).await?)
    }

    /// Attach a tag to a series
    pub async fn attach(&self, series_id: &str, tag_id: &str) -> EditorResult<()> {
        let mapping = SeriesTagRef {
            series_id: series_id.to_string(),
            tag_id: tag_id.to_string(),
        };
        Ok(self.client.tags().add_to_series(&mapping).await?)
    }

    /// Detach a tag from a series
    pub async fn detach(&self, series_id: &str, tag_id: &str) -> EditorResult<()> {
        let mapping = SeriesTagRef {
            series_id: series_id.to_string(),
            tag_id: tag_id.to_string(),
        };
        Ok(self.client.tags().remove_from_series(&mapping).await?)
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(TAG_LIST_KEY);
        self.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_envelope, FakeTransport};
    use serde_json::json;

    fn tag_json(id: &str, name: &str) -> serde_json::Value {
        json!({"tagId": id, "tagName": name, "tagDescription": null})
    }

    #[tokio::test]
    async fn test_load_populates_snapshot_and_cache() {
        let transport = FakeTransport::new();
        transport.on(
            "GET",
            "/api/admin/tags/list",
            ok_envelope(json!([tag_json("t-1", "hot"), tag_json("t-2", "new")])),
        );

        let cache = Arc::new(QueryCache::new());
        let mut screen = TagScreen::new(SlateClient::new(transport), cache.clone());
        screen.load().await.unwrap();

        assert_eq!(screen.tags().len(), 2);
        assert!(cache.get_raw(TAG_LIST_KEY).is_some());
    }

    #[tokio::test]
    async fn test_create_validates_before_submit() {
        let transport = FakeTransport::new();
        let mut screen = TagScreen::new(
            SlateClient::new(transport),
            Arc::new(QueryCache::new()),
        );

        let bad = TagCreate {
            tag_name: "".into(),
            ..Default::default()
        };
        assert!(screen.create(&bad).await.is_err());
        // nothing reached the wire
        assert!(screen.client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_invalidates_and_reloads() {
        let transport = FakeTransport::new();
        transport.on("POST", "/api/admin/tags", ok_envelope(json!(null)));
        transport.on(
            "GET",
            "/api/admin/tags/list",
            ok_envelope(json!([tag_json("t-1", "hot")])),
        );

        let mut screen = TagScreen::new(
            SlateClient::new(transport),
            Arc::new(QueryCache::new()),
        );
        let tag = TagCreate {
            tag_name: "hot".into(),
            ..Default::default()
        };
        screen.create(&tag).await.unwrap();

        assert_eq!(screen.tags().len(), 1);
        let calls = screen.client.transport().calls();
        assert_eq!(calls[0].path, "/api/admin/tags");
        assert_eq!(calls[1].path, "/api/admin/tags/list");
    }
}
