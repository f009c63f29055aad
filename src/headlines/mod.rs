use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::debug;

use crate::error::FetchError;
use crate::types::{Article, Grouping, PageSpec, RequestParams, ResultEnvelope};
use crate::upstream::{decode_list, Endpoint, HttpCaller};


const ARTICLES_FIELD: &str = "articles";

/// Fetches top headlines and returns one page of them grouped by source.
pub struct HeadlineFetcher {
    endpoint: Endpoint,
    default_sources: Option<String>,
    caller: Arc<dyn HttpCaller>,
}

impl HeadlineFetcher {
    pub fn new(endpoint: Endpoint, caller: Arc<dyn HttpCaller>) -> Self {
        Self {
            endpoint,
            default_sources: None,
            caller,
        }
    }

    /// Sources to ask for when a request carries no parameters at all.
    pub fn with_default_sources(mut self, sources: Option<String>) -> Self {
        self.default_sources = sources;
        self
    }

    /// Never fails: errors come back as a 500 envelope.
    #[tracing::instrument(name = "headlines", skip(self, params))]
    pub async fn fetch(
        &self,
        params: RequestParams,
        page_size: NonZeroUsize,
        page: NonZeroUsize,
    ) -> ResultEnvelope {
        match self.try_fetch(params, PageSpec { page, page_size }).await {
            Ok(json) => ResultEnvelope::ok(json),
            Err(e) => e.into_envelope("headlines"),
        }
    }

    async fn try_fetch(&self, params: RequestParams, spec: PageSpec) -> Result<String, FetchError> {
        let params = self.effective_params(params);
        let body = self.caller.get(&self.endpoint.url(&params)).await?;

        let articles: Vec<Article> = decode_list(&body, ARTICLES_FIELD)?;
        debug!(count = articles.len(), "decoded articles");

        let page = paginate(sort_newest_first(articles), spec);
        let grouping = group_by_source(page);
        debug!(sources = grouping.len(), "grouped page");

        serde_json::to_string(&grouping).map_err(|e| FetchError::Encode(e.to_string()))
    }

    fn effective_params(&self, params: RequestParams) -> RequestParams {
        match &self.default_sources {
            Some(sources) if params.is_empty() => {
                [("sources", sources.as_str())].into_iter().collect()
            }
            _ => params,
        }
    }
}

/// Newest first. Articles with equal timestamps keep their upstream order.
pub fn sort_newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles
}

/// Pages past the end are empty, not an error.
pub fn paginate(articles: Vec<Article>, spec: PageSpec) -> Vec<Article> {
    articles
        .into_iter()
        .skip(spec.offset())
        .take(spec.page_size.get())
        .collect()
}

pub fn group_by_source(articles: Vec<Article>) -> Grouping {
    articles.into_iter().collect()
}
