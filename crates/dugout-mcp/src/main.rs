mod mcp;

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use dugout::catalog::StaticTeamCatalog;
use dugout::index::PlayerTeamIndex;
use dugout::provider::MlbStatsProvider;
use dugout::season::current_season;

use mcp::tools::Toolbox;

/// Dugout — MLB statistics MCP server (stdio)
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Override the MLB Stats API base URL (testing/proxies)
    #[arg(long)]
    base_url: Option<String>,

    /// Skip the startup roster crawl; player-team lookups degrade to "Unknown"
    #[arg(long)]
    skip_index: bool,
}

fn main() {
    let args = Args::parse();

    // stdout is the MCP channel; all diagnostics to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dugout=info,dugout_mcp=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let provider = match &args.base_url {
        Some(base_url) => MlbStatsProvider::with_base_url(base_url.clone()),
        None => MlbStatsProvider::new(),
    };
    let provider = match provider {
        Ok(p) => p,
        Err(e) => {
            error!("failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let catalog = StaticTeamCatalog::new();
    let season = current_season();

    // One crawl over all 30 rosters, before any request is served; the
    // index is read-only after this point
    let index = if args.skip_index {
        info!("skipping player-team index build");
        PlayerTeamIndex::default()
    } else {
        info!(season, "building player-team index from 40-man rosters");
        PlayerTeamIndex::build(&provider, &catalog, season)
    };

    let toolbox = Toolbox {
        provider: Box::new(provider),
        catalog,
        index: Arc::new(index),
    };

    info!("dugout MCP server listening on stdio");
    mcp::server::run(&toolbox);
    info!("stdin closed, shutting down");
}
