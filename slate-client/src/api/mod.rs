//! Typed admin API
//!
//! One module per resource, mirroring the backend's route groups. All
//! methods unwrap the platform envelope in one place and surface business
//! errors as [`ClientError::Api`].

pub mod auth;
pub mod episode;
pub mod homepage;
pub mod menu;
pub mod permission;
pub mod reward;
pub mod role;
pub mod series;
pub mod tag;
pub mod task;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use shared::response::ApiResponse;

pub use auth::AuthApi;
pub use episode::EpisodeApi;
pub use homepage::HomepageApi;
pub use menu::MenuApi;
pub use permission::PermissionApi;
pub use reward::RewardApi;
pub use role::RoleApi;
pub use series::SeriesApi;
pub use tag::TagApi;
pub use task::TaskApi;

/// Unwrap an envelope, requiring a payload
pub(crate) fn take_data<T>(resp: ApiResponse<T>) -> ClientResult<T> {
    if !resp.is_success() {
        return Err(ClientError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse("missing data in response".into()))
}

/// Unwrap an envelope, discarding any payload
pub(crate) fn expect_ok<T>(resp: ApiResponse<T>) -> ClientResult<()> {
    if !resp.is_success() {
        return Err(ClientError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    Ok(())
}

/// Envelope type used for mutations whose payload the console ignores
pub(crate) type AnyEnvelope = ApiResponse<serde_json::Value>;

/// Typed client over any [`HttpClient`] transport
///
/// ```no_run
/// use slate_client::{ClientConfig, NetworkHttpClient, SlateClient};
///
/// # async fn example() -> Result<(), slate_client::ClientError> {
/// let transport = NetworkHttpClient::new(&ClientConfig::from_env())?;
/// let client = SlateClient::new(transport);
/// let tree = client.menus().tree().await?;
/// # Ok(())
/// # }
/// ```
pub struct SlateClient<C: HttpClient> {
    transport: C,
}

impl<C: HttpClient> SlateClient<C> {
    /// Wrap a transport
    pub fn new(transport: C) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// Mutable access, for token management
    pub fn transport_mut(&mut self) -> &mut C {
        &mut self.transport
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.transport)
    }

    pub fn menus(&self) -> MenuApi<'_, C> {
        MenuApi::new(&self.transport)
    }

    pub fn series(&self) -> SeriesApi<'_, C> {
        SeriesApi::new(&self.transport)
    }

    pub fn episodes(&self) -> EpisodeApi<'_, C> {
        EpisodeApi::new(&self.transport)
    }

    pub fn homepage(&self) -> HomepageApi<'_, C> {
        HomepageApi::new(&self.transport)
    }

    pub fn tags(&self) -> TagApi<'_, C> {
        TagApi::new(&self.transport)
    }

    pub fn tasks(&self) -> TaskApi<'_, C> {
        TaskApi::new(&self.transport)
    }

    pub fn rewards(&self) -> RewardApi<'_, C> {
        RewardApi::new(&self.transport)
    }

    pub fn roles(&self) -> RoleApi<'_, C> {
        RoleApi::new(&self.transport)
    }

    pub fn permissions(&self) -> PermissionApi<'_, C> {
        PermissionApi::new(&self.transport)
    }

    /// Log in and keep the returned token on the transport
    pub async fn login(
        &mut self,
        request: &shared::client::LoginRequest,
    ) -> ClientResult<shared::client::LoginResponse> {
        let login = self.auth().login(request).await?;
        self.transport.set_token(Some(login.token.clone()));
        Ok(login)
    }

    /// Drop the stored token
    pub fn logout(&mut self) {
        self.transport.set_token(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_data_success() {
        let resp = ApiResponse::ok(7);
        assert_eq!(take_data(resp).unwrap(), 7);
    }

    #[test]
    fn test_take_data_business_error() {
        let resp: ApiResponse<i32> = ApiResponse::error(3001, "Menu entry not found");
        let err = take_data(resp).unwrap_err();
        assert_eq!(err.api_code(), Some(3001));
    }

    #[test]
    fn test_take_data_missing_payload() {
        let resp: ApiResponse<i32> = ApiResponse::ok_empty();
        assert!(matches!(
            take_data(resp),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_expect_ok_ignores_payload() {
        let resp = ApiResponse::ok(serde_json::json!({"ignored": true}));
        assert!(expect_ok(resp).is_ok());
    }
}
