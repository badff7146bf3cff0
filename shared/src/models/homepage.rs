//! Homepage Carousel Model
//!
//! Carousel slots shown on the platform homepage, ordered by `position`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Carousel slot entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlot {
    pub carousel_id: String,
    pub series_id: String,
    pub position: i32,
    pub is_active: bool,
    pub description: String,
    pub title: String,
    pub image_url: String,
    pub display_start_time: String,
    pub display_end_time: String,
}

/// Create carousel slot payload (`POST /api/admin/homepage`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarouselCreate {
    pub series_id: String,
    #[validate(range(min = 0))]
    pub position: i32,
    pub is_active: bool,
    pub description: String,
    #[validate(length(min = 1, max = 128))]
    pub title: String,
    pub image_url: String,
    pub display_start_time: String,
    pub display_end_time: String,
}
