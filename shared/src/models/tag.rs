//! Tag Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tag entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_id: String,
    pub tag_name: String,
    pub tag_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// System tags ("hot", "new", ...) cannot be deleted or renamed
    #[serde(default)]
    pub is_system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_displayed_on_home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Create tag payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TagCreate {
    #[validate(length(min = 1, max = 32))]
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_displayed_on_home: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_section: Option<String>,
}

/// Update tag payload (create fields plus the id)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TagUpdate {
    pub tag_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: TagCreate,
}

/// Series/tag association payload (add and remove share the shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTagRef {
    pub series_id: String,
    pub tag_id: String,
}

/// Joined series/tag row (`GET /api/admin/short-tags/series/{seriesId}/tags`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTagMapping {
    pub series_id: String,
    pub title: String,
    pub tag_id: String,
    pub tag_name: String,
    pub tag_description: String,
    pub color: String,
    pub priority: i32,
    pub is_system: bool,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_minimal_wire_format() {
        let json = r#"{"tagId":"t-1","tagName":"hot","tagDescription":null}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.tag_name, "hot");
        assert!(tag.tag_description.is_none());
        assert!(!tag.is_system);
    }

    #[test]
    fn test_update_flattens_fields() {
        let update = TagUpdate {
            tag_id: "t-1".into(),
            fields: TagCreate {
                tag_name: "hot".into(),
                color: Some("#ff0000".into()),
                ..Default::default()
            },
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"tagId\":\"t-1\""));
        assert!(json.contains("\"tagName\":\"hot\""));
        assert!(json.contains("\"color\":\"#ff0000\""));
    }
}
