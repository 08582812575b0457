// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site host application.

use crate::config::SiteConfig;
use crate::frame_loop::{self, FrameReport};
use crate::mount::PageMount;
use kevn_splash::{FrameTicker, TimelineError};
use std::sync::Arc;
use thiserror::Error;

/// Site host errors
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Config could not be written
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    /// Config values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Splash sequence rejected
    #[error("Splash sequence error: {0}")]
    Timeline(#[from] TimelineError),

    /// Async runtime failed to start
    #[error("Failed to start runtime: {0}")]
    Runtime(String),
}

/// Result type for the site host
pub type Result<T> = std::result::Result<T, AppError>;

/// The site host
pub struct SiteApp;

impl SiteApp {
    /// Mount the page and drive it until the content is revealed
    pub fn run(config: &SiteConfig) -> Result<FrameReport> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| AppError::Runtime(e.to_string()))?;

        let ticker = Arc::new(FrameTicker::new());
        let mut page = PageMount::mount(config, ticker)?;

        tracing::info!(
            "Playing splash for \"{}\" at {} fps",
            config.splash.title,
            config.frame_rate
        );

        let report = runtime.block_on(frame_loop::run(&mut page, config));
        Ok(report)
    }
}
