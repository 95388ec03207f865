//! Typed Collection Commands
//!
//! Entity-level wrappers over [`RemoteApi`].

use crate::envelope::ListEnvelope;
use crate::error::{ApiError, ApiResult};
use crate::models::Entity;

use super::RemoteApi;

/// Write request derived from a submitted draft
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<D> {
    Create(D),
    Update { id: String, draft: D },
}

/// Fetch and decode every record of `E`'s collection.
pub async fn fetch_all<E: Entity>(api: &dyn RemoteApi) -> ApiResult<Vec<E>> {
    let body = api.list(E::COLLECTION).await?;
    let envelope = ListEnvelope::classify(body);
    if envelope == ListEnvelope::Unrecognized {
        log::warn!("Unrecognized list response for /{}, treating as empty", E::COLLECTION);
    }
    envelope
        .into_records()
        .into_iter()
        .map(|record| {
            serde_json::from_value::<E>(record)
                .map_err(|e| ApiError::Decode(format!("{}: {}", E::COLLECTION, e)))
        })
        .collect()
}

pub async fn save<E: Entity>(api: &dyn RemoteApi, mutation: &Mutation<E::Draft>) -> ApiResult<()> {
    match mutation {
        Mutation::Create(draft) => {
            let body = encode(draft)?;
            api.create(E::COLLECTION, &body).await
        }
        Mutation::Update { id, draft } => {
            let body = encode(draft)?;
            api.update(E::COLLECTION, id, &body).await
        }
    }
}

pub async fn delete<E: Entity>(api: &dyn RemoteApi, id: &str) -> ApiResult<()> {
    api.delete(E::COLLECTION, id).await
}

fn encode<D: serde::Serialize>(draft: &D) -> ApiResult<serde_json::Value> {
    serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))
}
