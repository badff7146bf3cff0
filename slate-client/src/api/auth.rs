//! Auth and router endpoints

use super::take_data;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::client::{LoginRequest, LoginResponse, UserPermission};
use shared::response::ApiResponse;

/// Auth API
pub struct AuthApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Admin login (`POST /api/login/admin`)
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let resp: ApiResponse<LoginResponse> =
            self.transport.post("/api/login/admin", request).await?;
        take_data(resp)
    }

    /// Per-user navigation slices (`GET /api/system/router/user`)
    ///
    /// The sidebar tree is rebuilt from this after every menu mutation.
    pub async fn user_permissions(&self) -> ClientResult<Vec<UserPermission>> {
        let resp: ApiResponse<Vec<UserPermission>> =
            self.transport.get("/api/system/router/user").await?;
        take_data(resp)
    }
}
