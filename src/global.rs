use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Settings;
use crate::headlines::HeadlineFetcher;
use crate::sources::SourceCatalog;
use crate::upstream::{HttpCaller, ReqwestCaller};

pub struct Global {
    pub config: Settings,
    pub headlines: HeadlineFetcher,
    pub sources: Option<SourceCatalog>,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Settings) -> anyhow::Result<Arc<Self>> {
        let caller = ReqwestCaller::new(config.upstream.timeout_secs).context("http client")?;

        Ok(Self::with_caller(config, Arc::new(caller)))
    }

    pub fn with_caller(config: Settings, caller: Arc<dyn HttpCaller>) -> Arc<Self> {
        let headlines = HeadlineFetcher::new(config.upstream.headlines_endpoint(), caller.clone())
            .with_default_sources(config.upstream.default_sources.clone());

        let sources = config
            .upstream
            .sources_endpoint()
            .map(|endpoint| SourceCatalog::new(endpoint, caller));

        if sources.is_none() {
            tracing::info!("sources_url not configured, /v1/sources disabled");
        }

        Arc::new(Self {
            config,
            headlines,
            sources,
            started_at: std::time::Instant::now(),
        })
    }
}
