//! Series Model
//!
//! Short-video series (a show with numbered episodes).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Series list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_id: String,
    pub title: String,
    pub description: String,
    pub cover_image_url: String,
    pub is_active: bool,
    pub genre: String,
    pub language: String,
    pub release_date: String,
    pub create_time: String,
    pub update_time: String,
}

/// Series detail (`GET /api/admin/series/{seriesId}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetail {
    #[serde(flatten)]
    pub series: Series,
    pub price: Decimal,
    pub age_restriction: i32,
    /// Comma-separated tag names as the backend stores them
    pub tags: String,
    pub release_status: String,
    pub subtitle_languages: String,
    pub director: String,
    pub main_cast: String,
    pub region: String,
    /// Total runtime in minutes
    pub duration: i64,
    pub country: String,
    pub access_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
}

/// Create/update series payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCreate {
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    pub genre: String,
    pub language: String,
    pub cover_image_url: String,
    pub is_active: bool,
    pub is_free: bool,
    pub release_date: String,
    pub price: Decimal,
    #[validate(range(min = 0, max = 21))]
    pub age_restriction: i32,
    pub tags: String,
    pub release_status: String,
    pub subtitle_languages: String,
    pub director: String,
    pub main_cast: String,
    pub region: String,
    #[validate(range(min = 0))]
    pub duration: i64,
    pub country: String,
    pub access_level: String,
}

/// Series page filter (`POST /api/admin/series/page`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPageRequest {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub sort_field: String,
    pub sort_mode: bool,
}

impl SeriesPageRequest {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            title: None,
            is_free: None,
            is_active: None,
            sort_field: "createTime".to_string(),
            sort_mode: false,
        }
    }
}

/// Series page payload
///
/// The series endpoint does not use the standard pagination block; it
/// returns a flat cursor-style shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPage {
    pub records: Vec<Series>,
    pub total: u64,
    pub current: u32,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_flattens_summary() {
        let json = r#"{
            "seriesId": "s-1", "title": "Night Shift", "description": "d",
            "coverImageUrl": "http://img", "isActive": true, "genre": "thriller",
            "language": "en", "releaseDate": "2025-01-01",
            "createTime": "2025-01-01 00:00:00", "updateTime": "2025-01-02 00:00:00",
            "price": 5.0, "ageRestriction": 16, "tags": "hot,new",
            "releaseStatus": "published", "subtitleLanguages": "en,es",
            "director": "A. Doe", "mainCast": "B. Roe", "region": "US",
            "duration": 120, "country": "US", "accessLevel": "vip"
        }"#;
        let detail: SeriesDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.series.series_id, "s-1");
        assert_eq!(detail.age_restriction, 16);
        assert_eq!(detail.price, Decimal::from(5));
        assert!(detail.is_free.is_none());
    }

    #[test]
    fn test_page_request_omits_unset_filters() {
        let req = SeriesPageRequest::new(1, 10);
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("title"));
        assert!(!json.contains("isFree"));
        assert!(json.contains("\"sortField\":\"createTime\""));
    }
}
