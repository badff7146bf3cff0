//! Permission endpoints (`/api/system/permission/...`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{AssignPermissions, Permission};
use shared::request::PageRequest;
use shared::response::{ApiResponse, PageResponse};

/// Permission API
pub struct PermissionApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> PermissionApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of permissions
    pub async fn page(&self, request: &PageRequest) -> ClientResult<PageResponse<Permission>> {
        let resp: ApiResponse<PageResponse<Permission>> = self
            .transport
            .post("/api/system/permission/page", request)
            .await?;
        take_data(resp)
    }

    /// All permissions, unpaginated
    pub async fn list(&self) -> ClientResult<Vec<Permission>> {
        let resp: ApiResponse<Vec<Permission>> =
            self.transport.get("/api/system/permission/list").await?;
        take_data(resp)
    }

    /// Replace a role's permission assignment
    pub async fn assign_to_role(&self, assign: &AssignPermissions) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post("/api/system/permission/assign-to-role", assign)
            .await?;
        expect_ok(resp)
    }
}
