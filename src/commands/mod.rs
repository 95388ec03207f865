//! Clinic API Bindings
//!
//! Frontend bindings to the remote REST backend, organized by concern.

mod collection;
mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;

// Re-export all public items
pub use collection::*;
pub use http::HttpApi;

/// Raw collection-level operations of the backend.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait RemoteApi {
    /// `GET /{collection}`, returning the parsed body as-is
    async fn list(&self, collection: &str) -> ApiResult<Value>;

    /// `POST /{collection}`
    async fn create(&self, collection: &str, body: &Value) -> ApiResult<()>;

    /// `PUT /{collection}/{id}`
    async fn update(&self, collection: &str, id: &str, body: &Value) -> ApiResult<()>;

    /// `DELETE /{collection}/{id}`
    async fn delete(&self, collection: &str, id: &str) -> ApiResult<()>;
}
