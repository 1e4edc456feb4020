use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use scribe_core::gemini::GeminiClient;
use scribe_core::tracing::init_tracing_subscriber;
use scribe_core::yt::innertube::InnerTubeSource;
use scribe_core::yt::strategy::ProxyEndpoint;
use scribe_core::yt::watch_page::WatchPageFallback;
use scribe_core::{TranscriptExtractor, TranscriptExtractorBuilder};

mod routes;

#[derive(Parser)]
#[command(name = "scribe-server", about = "YouTube transcript extraction service")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Gemini API key; summaries fall back to extractive mode when unset
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,

    /// Comma-separated proxy endpoint URLs for caption retrieval
    #[arg(long, env = "PROXY_ENDPOINTS", value_delimiter = ',')]
    proxy_endpoints: Vec<String>,

    /// Route caption retrieval through a configured proxy tier
    #[arg(long, env = "USE_PROXY", action = clap::ArgAction::Set, default_value_t = true)]
    use_proxy: bool,

    /// Path to a Netscape-format cookies file
    #[arg(long, env = "YT_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,
}

/// Shared application state, built once at the composition root and
/// injected into handlers. Nothing here mutates after construction.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<TranscriptExtractor<InnerTubeSource, WatchPageFallback>>,
    pub summarizer: Option<Arc<GeminiClient>>,
    pub use_proxy: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let mut source = InnerTubeSource::new();
    if let Some(path) = cli.cookies_path {
        source = source.with_cookies(path);
    }

    let proxies: Vec<ProxyEndpoint> = cli
        .proxy_endpoints
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(|url| ProxyEndpoint {
            url: url.to_string(),
        })
        .collect();

    let extractor = TranscriptExtractorBuilder::new()
        .caption_source(source)
        .fallback_source(WatchPageFallback::new())
        .proxies(proxies)
        .build();

    let summarizer = cli
        .gemini_api_key
        .filter(|key| !key.trim().is_empty())
        .map(|key| Arc::new(GeminiClient::new(key)));
    if summarizer.is_none() {
        tracing::warn!("no Gemini API key configured, summaries will be extractive only");
    }

    let state = AppState {
        extractor: Arc::new(extractor),
        summarizer,
        use_proxy: cli.use_proxy,
    };

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", cli.port);
    tracing::info!(%addr, "starting scribe server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
