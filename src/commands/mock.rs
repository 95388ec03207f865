//! In-memory [`RemoteApi`] for tests.
//!
//! Serves canned list bodies and records every call in order.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};

use super::RemoteApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(String),
    Create(String, Value),
    Update(String, String, Value),
    Delete(String, String),
}

#[derive(Default)]
pub struct MockApi {
    lists: RefCell<HashMap<String, ApiResult<Value>>>,
    mutation_error: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, collection: &str, body: Value) -> Self {
        self.set_list(collection, body);
        self
    }

    pub fn with_list_error(self, collection: &str, err: ApiError) -> Self {
        self.lists.borrow_mut().insert(collection.to_string(), Err(err));
        self
    }

    pub fn with_failing_mutations(self, err: ApiError) -> Self {
        *self.mutation_error.borrow_mut() = Some(err);
        self
    }

    pub fn set_list(&self, collection: &str, body: Value) {
        self.lists.borrow_mut().insert(collection.to_string(), Ok(body));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self, collection: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::List(name) if name == collection))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation_result(&self) -> ApiResult<()> {
        match self.mutation_error.borrow().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl RemoteApi for MockApi {
    async fn list(&self, collection: &str) -> ApiResult<Value> {
        self.record(Call::List(collection.to_string()));
        self.lists
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or_else(|| Ok(json!([])))
    }

    async fn create(&self, collection: &str, body: &Value) -> ApiResult<()> {
        self.record(Call::Create(collection.to_string(), body.clone()));
        self.mutation_result()
    }

    async fn update(&self, collection: &str, id: &str, body: &Value) -> ApiResult<()> {
        self.record(Call::Update(collection.to_string(), id.to_string(), body.clone()));
        self.mutation_result()
    }

    async fn delete(&self, collection: &str, id: &str) -> ApiResult<()> {
        self.record(Call::Delete(collection.to_string(), id.to_string()));
        self.mutation_result()
    }
}
