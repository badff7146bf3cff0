//! Request types shared by the paginated admin endpoints

use serde::{Deserialize, Serialize};

/// Base pagination request
///
/// List endpoints take page parameters in the request body
/// (`POST .../page`), with an optional sort field and direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (1-based)
    pub page_num: u32,
    /// Items per page
    pub page_size: u32,
    /// Field to sort by (backend default: createTime)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    /// Sort direction: true = ascending, false = descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_mode: Option<bool>,
}

impl PageRequest {
    /// First page with the given size
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            sort_field: None,
            sort_mode: None,
        }
    }

    /// Sort by the given field
    pub fn sort_by(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_field = Some(field.into());
        self.sort_mode = Some(ascending);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}
