// SPDX-License-Identifier: MIT OR Apache-2.0
//! Kev'n Creates site host
//!
//! Mounts the landing page, plays the loading screen sequence and fades the
//! page content in once it completes.
//!
//! ## Usage
//!
//! ```text
//! kevn_site [CONFIG]
//! ```
//!
//! Without an argument the host reads `site.ron` from the working directory
//! and falls back to defaults when it is missing. `RUST_LOG` overrides the
//! default log filter; `log_filter` in the config adds directives on top.

mod app;
mod cli;
mod config;
mod crossfade;
mod frame_loop;
mod mount;

use app::SiteApp;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kevn_site_app=info,kevn_splash=info";

fn main() {
    let cli = Cli::parse();
    let path = cli.config;

    // Config is read before logging so its filter can apply
    let loaded = SiteConfig::load_or_default(&path);

    let mut env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let mut rejected = Vec::new();
    if let Ok(SiteConfig {
        log_filter: Some(filter),
        ..
    }) = &loaded
    {
        for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.parse::<Directive>() {
                Ok(directive) => env_filter = env_filter.add_directive(directive),
                Err(_) => rejected.push(directive.to_string()),
            }
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Kev'n site v{}", env!("CARGO_PKG_VERSION"));
    for directive in rejected {
        tracing::warn!("Ignoring invalid log directive: {directive}");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    match SiteApp::run(&config) {
        Ok(report) if report.settled => {
            tracing::info!("Done in {} frames", report.frames);
        }
        Ok(report) => {
            tracing::warn!("Stopped after {} frames without revealing content", report.frames);
        }
        Err(e) => {
            tracing::error!("Site host failed: {e}");
            std::process::exit(1);
        }
    }
}
