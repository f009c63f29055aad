use std::sync::Arc;

use tracing::debug;

use crate::error::FetchError;
use crate::types::{RequestParams, ResultEnvelope, SourceInfo};
use crate::upstream::{decode_list, Endpoint, HttpCaller};

const SOURCES_FIELD: &str = "sources";

/// Lists the publishers the aggregator knows about.
pub struct SourceCatalog {
    endpoint: Endpoint,
    caller: Arc<dyn HttpCaller>,
}

impl SourceCatalog {
    pub fn new(endpoint: Endpoint, caller: Arc<dyn HttpCaller>) -> Self {
        Self { endpoint, caller }
    }

    #[tracing::instrument(name = "sources", skip_all)]
    pub async fn fetch(&self, params: RequestParams) -> ResultEnvelope {
        match self.try_fetch(params).await {
            Ok(json) => ResultEnvelope::ok(json),
            Err(e) => e.into_envelope("sources"),
        }
    }

    async fn try_fetch(&self, params: RequestParams) -> Result<String, FetchError> {
        let body = self.caller.get(&self.endpoint.url(&params)).await?;
        let sources: Vec<SourceInfo> = decode_list(&body, SOURCES_FIELD)?;
        debug!(count = sources.len(), "decoded sources");

        serde_json::to_string(&sources).map_err(|e| FetchError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    use crate::upstream::stub::StubCaller;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://newsapi.org/v2/sources", "?apiKey=", "k3y")
    }

    #[tokio::test]
    #[traced_test]
    async fn lists_sources_in_upstream_order() {
        let stub = StubCaller::ok(
            r#"{"status":"ok","sources":[
                {"id":"bbc-news","name":"BBC News","description":"d","url":"https://bbc.co.uk","category":"general","language":"en","country":"gb"},
                {"id":null,"name":"Local Paper"}
            ]}"#,
        );
        let catalog = SourceCatalog::new(endpoint(), stub.clone());
        let params: RequestParams = [("language", "en")].into_iter().collect();

        let envelope = catalog.fetch(params).await;

        assert_eq!(envelope.code, 200);
        assert_eq!(
            stub.urls(),
            vec!["https://newsapi.org/v2/sources?apiKey=k3y&language=en"]
        );
        let sources: Vec<SourceInfo> = serde_json::from_str(&envelope.result).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].country.as_deref(), Some("gb"));
        assert_eq!(sources[1].name, "Local Paper");
    }

    #[tokio::test]
    #[traced_test]
    async fn headlines_shaped_body_is_a_500() {
        let catalog = SourceCatalog::new(endpoint(), StubCaller::ok(r#"{"articles":[]}"#));

        let envelope = catalog.fetch(RequestParams::new()).await;

        assert_eq!(envelope.code, 500);
        assert!(envelope.result.contains("missing field `sources`"));
    }
}
