//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client, kept on the UI thread
    api: StoredValue<HttpApi, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: StoredValue::new_local(HttpApi::new(config)),
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
