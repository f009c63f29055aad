//! Runs one headline fetch against the live upstream and prints the envelope.
//!
//! Uses the same configuration as the server, so `apikey_token` must be set.
//!
//! Run with: cargo run --bin fetch-headlines -- [page] [page_size] [name=value ...]
//! Examples:
//!   cargo run --bin fetch-headlines
//!   cargo run --bin fetch-headlines -- 1 5 sources=bbc-news
//!   cargo run --bin fetch-headlines -- 2 10 country=us category=technology

use std::num::NonZeroUsize;

use anyhow::Context as _;
use headlines_api::config::Settings;
use headlines_api::global::Global;
use headlines_api::types::{Grouping, RequestParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::new("debug"))
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let page = parse_nonzero(args.next(), "page", 1)?;
    let page_size = parse_nonzero(args.next(), "page_size", 20)?;

    let mut params = RequestParams::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("expected name=value, got {arg}"))?;
        params.insert(name, value);
    }

    let config = Settings::new().context("loading configuration")?;
    let global = Global::init(config)?;

    let envelope = global.headlines.fetch(params, page_size, page).await;
    println!("code: {}", envelope.code);

    if !envelope.is_success() {
        println!("{}", envelope.result);
        std::process::exit(1);
    }

    let grouping: Grouping = serde_json::from_str(&envelope.result)?;
    for (source, articles) in grouping.iter() {
        println!("\n{} ({})", source.name, source.id.as_deref().unwrap_or("-"));
        for article in articles {
            println!("  {}  {}", article.published_at.format("%Y-%m-%d %H:%M"), article.title);
        }
    }

    Ok(())
}

fn parse_nonzero(arg: Option<String>, name: &str, default: usize) -> anyhow::Result<NonZeroUsize> {
    let n = match arg {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a positive integer, got {raw}"))?,
        None => default,
    };
    NonZeroUsize::new(n).with_context(|| format!("{name} must be greater than zero"))
}
