//! Role endpoints (`/api/system/role/...`)

use super::take_data;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::Role;
use shared::request::PageRequest;
use shared::response::{ApiResponse, PageResponse};

/// Role API
pub struct RoleApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> RoleApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of roles with their permissions and menus
    pub async fn page(&self, request: &PageRequest) -> ClientResult<PageResponse<Role>> {
        let resp: ApiResponse<PageResponse<Role>> = self
            .transport
            .post("/api/system/role/page", request)
            .await?;
        take_data(resp)
    }
}
