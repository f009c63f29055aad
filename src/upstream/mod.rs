use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

mod endpoint;

pub use endpoint::Endpoint;

#[cfg(test)]
pub(crate) mod stub;

const USER_AGENT: &str = concat!("headlines-api/", env!("CARGO_PKG_VERSION"));

/// Performs one GET and hands back the raw body.
#[async_trait]
pub trait HttpCaller: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct ReqwestCaller {
    client: reqwest::Client,
}

impl ReqwestCaller {
    pub fn new(timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpCaller for ReqwestCaller {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!(status = response.status().as_u16(), "upstream responded");
        Ok(response.text().await?)
    }
}

/// Decodes the array stored under `field` in a JSON object body.
///
/// The first element that fails to decode fails the whole list.
pub fn decode_list<T: DeserializeOwned>(body: &str, field: &str) -> Result<Vec<T>, FetchError> {
    let mut root: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let items = match root.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(FetchError::Decode(format!("field `{field}` is not an array")));
        }
        None => return Err(FetchError::Decode(format!("missing field `{field}`"))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| FetchError::Decode(format!("{field}[{i}]: {e}")))
        })
        .collect()
}
