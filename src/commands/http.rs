//! HTTP Transport
//!
//! [`RemoteApi`] over `reqwest`, which uses the browser's `fetch` on wasm32.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

use super::RemoteApi;

/// Characters escaped in an id path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    pub fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, utf8_percent_encode(id, SEGMENT))
    }
}

/// Send and reject any non-2xx status.
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl RemoteApi for HttpApi {
    async fn list(&self, collection: &str) -> ApiResult<Value> {
        let response = send(self.client.get(self.collection_url(collection))).await?;
        Ok(response.json::<Value>().await?)
    }

    async fn create(&self, collection: &str, body: &Value) -> ApiResult<()> {
        send(self.client.post(self.collection_url(collection)).json(body)).await?;
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, body: &Value) -> ApiResult<()> {
        send(self.client.put(self.record_url(collection, id)).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> ApiResult<()> {
        send(self.client.delete(self.record_url(collection, id))).await?;
        Ok(())
    }
}
