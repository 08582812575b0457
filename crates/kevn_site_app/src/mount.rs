// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page mount controller.
//!
//! Shows the loading screen on mount, starts the splash sequence once and
//! swaps to the page content when it completes. The content fade-in is
//! owned here, not by the sequence.

use crate::config::SiteConfig;
use crate::crossfade::CrossFade;
use kevn_splash::{
    parallax_offset, scroll_progress, splash_timeline, Presentation, ProgressState,
    SequenceHandle, SequenceStatus, SplashTargets, Stage, TargetId, Ticker, TimelineError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The page with its loading screen
pub struct PageMount {
    stage: Stage,
    splash: SplashTargets,
    content: TargetId,
    reading_progress: TargetId,
    backdrop: TargetId,
    parallax_speed: f32,
    sequence: SequenceHandle,
    content_visible: Arc<AtomicBool>,
    crossfade: Option<CrossFade>,
    crossfade_duration: f32,
    ticker: Arc<dyn Ticker>,
    mounted: bool,
    settled: bool,
}

impl PageMount {
    /// Mount the page and start the splash sequence
    pub fn mount(config: &SiteConfig, ticker: Arc<dyn Ticker>) -> Result<Self, TimelineError> {
        let mut stage = Stage::new();
        let splash = SplashTargets::mount(&mut stage, &config.splash);
        let content = stage.mount("content", Presentation::hidden(0.0));
        let reading_progress = stage.mount("reading-progress", Presentation::default());
        let backdrop = stage.mount("hero-backdrop", Presentation::default());

        let timeline = splash_timeline(&splash, &config.splash);
        let content_visible = Arc::new(AtomicBool::new(false));
        let flag = content_visible.clone();
        let sequence = kevn_splash::start(&timeline, ticker.clone(), move || {
            flag.store(true, Ordering::SeqCst);
        })?;

        tracing::debug!("Mounted page with {} elements", stage.len());

        Ok(Self {
            stage,
            splash,
            content,
            reading_progress,
            backdrop,
            parallax_speed: config.parallax_speed,
            sequence,
            content_visible,
            crossfade: None,
            crossfade_duration: config.crossfade_duration,
            ticker,
            mounted: true,
            settled: false,
        })
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if !self.mounted {
            return;
        }

        self.sequence.tick(&mut self.stage);

        if !self.is_content_visible() {
            return;
        }

        let now = self.ticker.now();
        if self.crossfade.is_none() {
            self.splash.unmount(&mut self.stage);
            tracing::info!("Revealing page content");
            self.crossfade = Some(CrossFade::begin(now, self.crossfade_duration));
        }

        if let Some(fade) = &self.crossfade {
            let opacity = fade.opacity_at(now);
            if let Some(content) = self.stage.get_mut(self.content) {
                content.presentation.opacity = opacity;
            }
            self.settled = fade.is_finished(now);
        }
    }

    /// Follow a scroll of the page: the reading-progress bar fills and the
    /// hero backdrop drifts
    pub fn on_scroll(&mut self, scroll_top: f32, scroll_height: f32, viewport_height: f32) {
        if !self.mounted {
            return;
        }
        let progress = scroll_progress(scroll_top, scroll_height, viewport_height);
        if let Some(bar) = self.stage.get_mut(self.reading_progress) {
            bar.presentation.fill = progress / 100.0;
        }
        if let Some(layer) = self.stage.get_mut(self.backdrop) {
            layer.presentation.translate_y = parallax_offset(scroll_top, self.parallax_speed);
        }
        tracing::trace!("Scrolled to {progress:.1}%");
    }

    /// Tear the page down, cancelling the splash if it is still running
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.sequence.cancel();
        self.mounted = false;
        tracing::debug!("Unmounted page");
    }

    /// Whether the splash has completed
    pub fn is_content_visible(&self) -> bool {
        self.content_visible.load(Ordering::SeqCst)
    }

    /// Whether the content had fully faded in as of the last tick
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether the page is still mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Splash progress
    pub fn progress(&self) -> ProgressState {
        self.sequence.report_progress()
    }

    /// Splash status
    pub fn status(&self) -> SequenceStatus {
        self.sequence.status()
    }

    /// Current content opacity
    pub fn content_opacity(&self) -> f32 {
        self.stage
            .get(self.content)
            .map_or(0.0, |c| c.presentation.opacity)
    }

    /// The stage
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The splash elements
    pub fn splash(&self) -> &SplashTargets {
        &self.splash
    }
}
