use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::HttpCaller;
use crate::error::FetchError;

/// Canned upstream that remembers every URL it was asked for.
pub(crate) struct StubCaller {
    response: Result<String, FetchError>,
    urls: Mutex<Vec<String>>,
}

impl StubCaller {
    pub(crate) fn ok(body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.into()),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(error: FetchError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpCaller for StubCaller {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}
