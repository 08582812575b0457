// SPDX-License-Identifier: MIT OR Apache-2.0
//! Content fade-in that follows the splash screen.

use kevn_splash::Easing;
use std::time::Duration;

/// Fade from hidden to fully visible, independent of the splash sequence
#[derive(Debug, Clone, Copy)]
pub struct CrossFade {
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl CrossFade {
    /// Begin a fade at `now` lasting `seconds`
    pub fn begin(now: Duration, seconds: f32) -> Self {
        Self {
            started_at: now,
            duration: Duration::try_from_secs_f32(seconds).unwrap_or_default(),
            easing: Easing::Power2Out,
        }
    }

    /// Opacity at `now`
    pub fn opacity_at(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        self.easing
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Whether the fade has finished at `now`
    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}
