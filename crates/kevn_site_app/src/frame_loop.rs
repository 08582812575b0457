// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame loop driving the page.

use crate::config::SiteConfig;
use crate::mount::PageMount;
use kevn_splash::ProgressPhase;
use tokio::time::MissedTickBehavior;

/// Outcome of a frame loop run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Frames ticked
    pub frames: u64,
    /// Whether the content was fully revealed
    pub settled: bool,
}

/// Tick `page` at the configured frame rate until the content has faded
/// in, or unmount it once `max_frames` have passed.
pub async fn run(page: &mut PageMount, config: &SiteConfig) -> FrameReport {
    let mut interval = tokio::time::interval(config.frame_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frames = 0;
    let mut phase: Option<ProgressPhase> = None;

    loop {
        interval.tick().await;
        frames += 1;
        page.tick();

        let progress = page.progress();
        if phase != Some(progress.label) {
            phase = Some(progress.label);
            tracing::info!("Loading {} - {}", progress.percent_text(), progress.label.label());
        }
        tracing::trace!("Frame {frames}: {:.2}%", progress.value);

        if page.is_settled() {
            tracing::info!("Page content revealed after {frames} frames");
            return FrameReport {
                frames,
                settled: true,
            };
        }

        if frames >= config.max_frames {
            tracing::warn!("Frame limit of {} reached, unmounting page", config.max_frames);
            page.unmount();
            return FrameReport {
                frames,
                settled: false,
            };
        }
    }
}
