//! Fake transport for exercising controllers without a server

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use slate_client::{ClientError, ClientResult, HttpClient};
use std::collections::HashMap;
use std::sync::Mutex;

/// One request the fake saw
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned-response transport
///
/// Responses are whole envelopes keyed by (method, path); every request
/// is recorded for assertions.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<HashMap<(String, String), Value>>,
    calls: Mutex<Vec<RecordedCall>>,
    token: Mutex<Option<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the envelope returned for (method, path)
    pub fn on(&self, method: &str, path: &str, envelope: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), envelope);
    }

    /// Everything the fake was asked so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Requests that hit the given path
    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path == path)
            .collect()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });

        let envelope = self
            .responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", method, path)))?;

        serde_json::from_value(envelope).map_err(ClientError::Serialization)
    }

    fn to_value<B: serde::Serialize>(body: &B) -> ClientResult<Value> {
        serde_json::to_value(body).map_err(ClientError::Serialization)
    }
}

#[async_trait]
impl HttpClient for FakeTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = Self::to_value(body)?;
        self.respond("POST", path, Some(body))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("POST", path, None)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = Self::to_value(body)?;
        self.respond("PUT", path, Some(body))
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("PUT", path, None)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("DELETE", path, None)
    }

    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = Self::to_value(body)?;
        self.respond("DELETE", path, Some(body))
    }

    fn set_token(&mut self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

/// Success envelope around a payload
pub(crate) fn ok_envelope(data: Value) -> Value {
    serde_json::json!({ "code": 0, "message": "Success", "data": data })
}

/// Flat menu list entry as the tree endpoint emits it
pub(crate) fn menu_json(menu_id: i64, parent_id: i64) -> Value {
    serde_json::json!({
        "menuId": menu_id,
        "parentId": parent_id,
        "menuName": format!("menu-{}", menu_id),
        "pathUrl": format!("/m/{}", menu_id),
    })
}
