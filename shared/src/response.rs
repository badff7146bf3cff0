//! API response envelopes
//!
//! Every admin endpoint wraps its payload in [`ApiResponse`]; paginated
//! list endpoints put a [`PageResponse`] in `data`.

use serde::{Deserialize, Serialize};

/// Code carried by a successful [`ApiResponse`]
pub const API_CODE_SUCCESS: i32 = 0;

/// Unified API response structure
///
/// All admin API responses follow this format:
/// ```json
/// {
///     "code": 0,
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, others = error codes)
    pub code: i32,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response without payload
    pub fn ok_empty() -> Self {
        Self {
            code: API_CODE_SUCCESS,
            message: "Success".to_string(),
            data: None,
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Whether this response carries a success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

impl<T> From<crate::error::AppError> for ApiResponse<T> {
    fn from(err: crate::error::AppError) -> Self {
        Self {
            code: err.code.code() as i32,
            message: err.message,
            data: None,
        }
    }
}

/// Pagination metadata
///
/// The backend serializes every pagination field as a string
/// (`{"current":"1","size":"10","total":"42","pages":"5"}`), so the fields
/// stay `String` here and expose numeric accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub current: String,
    /// Items per page
    pub size: String,
    /// Total number of items
    pub total: String,
    /// Total number of pages
    pub pages: String,
}

impl Pagination {
    /// Create pagination metadata from numeric values
    pub fn new(current: u32, size: u32, total: u64) -> Self {
        let pages = if size == 0 {
            0
        } else {
            total.div_ceil(size as u64)
        };
        Self {
            current: current.to_string(),
            size: size.to_string(),
            total: total.to_string(),
            pages: pages.to_string(),
        }
    }

    /// Total number of items, 0 when the field is malformed
    pub fn total(&self) -> u64 {
        self.total.parse().unwrap_or(0)
    }

    /// Current page number, 1 when the field is malformed
    pub fn current(&self) -> u32 {
        self.current.parse().unwrap_or(1)
    }

    /// Total number of pages, 0 when the field is malformed
    pub fn pages(&self) -> u32 {
        self.pages.parse().unwrap_or(0)
    }
}

/// Paginated list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Records on this page
    pub records: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> PageResponse<T> {
    /// Create a new page payload
    pub fn new(records: Vec<T>, current: u32, size: u32, total: u64) -> Self {
        Self {
            records,
            pagination: Pagination::new(current, size, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_serialize() {
        let resp = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"data\":[1,2,3]"));
    }

    #[test]
    fn test_error_response_has_no_data() {
        let resp: ApiResponse<()> = ApiResponse::error(3001, "Menu entry not found");
        assert!(!resp.is_success());
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_pagination_string_fields() {
        let json = r#"{"current":"2","size":"10","total":"42","pages":"5"}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.current(), 2);
        assert_eq!(p.total(), 42);
        assert_eq!(p.pages(), 5);
    }

    #[test]
    fn test_pagination_page_count() {
        let p = Pagination::new(1, 10, 42);
        assert_eq!(p.pages(), 5);
        let p = Pagination::new(1, 10, 40);
        assert_eq!(p.pages(), 4);
        let p = Pagination::new(1, 0, 40);
        assert_eq!(p.pages(), 0);
    }
}
