//! WebServer entry point
//!
//! Serves the audit and analysis endpoints the dashboard calls.

use clap::Parser;
use shared::{ComponentId, component_info, logging};

use webserver::{
    ApiKeys, RealOpenAiClient, RealPageSpeedClient, ServerConfig, WebServer, WebServerResult,
    types::{DEFAULT_ANALYSIS_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_PAGESPEED_BASE_URL},
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "PageSpeed audit and AI analysis endpoints for the page insights dashboard")]
struct Args {
    /// Host interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// PageSpeed Insights API origin
    #[arg(long, default_value = DEFAULT_PAGESPEED_BASE_URL)]
    pagespeed_base_url: String,

    /// OpenAI-compatible API base URL
    #[arg(long, default_value = DEFAULT_OPENAI_BASE_URL)]
    openai_base_url: String,

    /// Model used for analysis
    #[arg(long, default_value = DEFAULT_ANALYSIS_MODEL)]
    model: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            pagespeed_base_url: args.pagespeed_base_url,
            openai_base_url: args.openai_base_url,
            model: args.model,
        }
    }
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    ComponentId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ServerConfig::from(args);
    let bind_address = config.bind_address().await?;
    logging::log_startup(ComponentId::current(), &format!("webserver on {bind_address}"));

    // Missing keys are reported per request, not at start-up
    let api_keys = ApiKeys::from_env();

    let audit_provider = RealPageSpeedClient::new(config.pagespeed_base_url.clone(), api_keys.pagespeed);
    let analysis_provider = RealOpenAiClient::new(config.openai_base_url.clone(), api_keys.openai, config.model.clone());
    component_info!(ComponentId::current(), "🤖 Analysis model: {}", analysis_provider.model());

    let webserver = WebServer::new(bind_address, audit_provider, analysis_provider);

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
            Err(err) => {
                // Keep serving; without a signal handler only the process kill stops us
                logging::log_error(ComponentId::current(), "Signal handling", &err);
                std::future::pending::<()>().await;
            }
        }
    };

    webserver.run(shutdown).await?;

    logging::log_success(ComponentId::current(), "WebServer stopped gracefully");
    Ok(())
}
