// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading progress value and its phase label.

use serde::{Deserialize, Serialize};

/// Highest value reported while a sequence is still running.
///
/// The largest `f32` below 100, so only the completing tick reports 100.
pub const RUNNING_CEILING: f32 = 99.999_99;

/// Phase label derived from the progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ProgressPhase {
    /// [0, 25)
    #[default]
    Initializing,
    /// [25, 50)
    LoadingAssets,
    /// [50, 75)
    Preparing,
    /// [75, 100)
    AlmostReady,
    /// 100
    Ready,
}

impl ProgressPhase {
    /// Bucket a progress value.
    ///
    /// Buckets are closed-open: a value exactly on a boundary belongs to
    /// the higher bucket.
    pub fn for_value(value: f32) -> Self {
        if value >= 100.0 {
            ProgressPhase::Ready
        } else if value >= 75.0 {
            ProgressPhase::AlmostReady
        } else if value >= 50.0 {
            ProgressPhase::Preparing
        } else if value >= 25.0 {
            ProgressPhase::LoadingAssets
        } else {
            ProgressPhase::Initializing
        }
    }

    /// Get the display name
    pub fn label(&self) -> &'static str {
        match self {
            ProgressPhase::Initializing => "Initializing",
            ProgressPhase::LoadingAssets => "Loading assets",
            ProgressPhase::Preparing => "Preparing",
            ProgressPhase::AlmostReady => "Almost ready",
            ProgressPhase::Ready => "Ready",
        }
    }
}

/// Progress of one loading sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Percentage in [0, 100]
    pub value: f32,
    /// Phase label for `value`
    pub label: ProgressPhase,
}

impl ProgressState {
    /// Progress at zero
    pub fn new() -> Self {
        Self::at(0.0)
    }

    /// Progress at `value`, clamped to [0, 100]
    pub fn at(value: f32) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
        Self {
            value,
            label: ProgressPhase::for_value(value),
        }
    }

    /// Move forward to `value` while running.
    ///
    /// Never moves backwards and never reaches 100; use
    /// [`ProgressState::complete`] for that.
    pub fn advance_to(&mut self, value: f32) {
        let value = value.min(RUNNING_CEILING);
        if value > self.value {
            *self = Self::at(value);
        }
    }

    /// Jump to 100
    pub fn complete(&mut self) {
        *self = Self::at(100.0);
    }

    /// Whether progress has reached 100
    pub fn is_complete(&self) -> bool {
        self.value >= 100.0
    }

    /// Percentage text, rounded down so "100%" only shows once complete
    pub fn percent_text(&self) -> String {
        format!("{}%", self.value.floor() as u32)
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_below_hundred() {
        assert!(RUNNING_CEILING < 100.0);
        assert!(RUNNING_CEILING > 99.9999);
    }

    #[test]
    fn test_bucket_boundaries_go_up() {
        assert_eq!(ProgressPhase::for_value(0.0), ProgressPhase::Initializing);
        assert_eq!(ProgressPhase::for_value(24.999), ProgressPhase::Initializing);
        assert_eq!(ProgressPhase::for_value(25.0), ProgressPhase::LoadingAssets);
        assert_eq!(ProgressPhase::for_value(50.0), ProgressPhase::Preparing);
        assert_eq!(ProgressPhase::for_value(75.0), ProgressPhase::AlmostReady);
        assert_eq!(ProgressPhase::for_value(RUNNING_CEILING), ProgressPhase::AlmostReady);
        assert_eq!(ProgressPhase::for_value(100.0), ProgressPhase::Ready);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut progress = ProgressState::new();
        progress.advance_to(40.0);
        progress.advance_to(30.0);
        assert_eq!(progress.value, 40.0);
        assert_eq!(progress.label, ProgressPhase::LoadingAssets);

        progress.advance_to(250.0);
        assert_eq!(progress.value, RUNNING_CEILING);
        assert!(!progress.is_complete());

        progress.complete();
        assert_eq!(progress.value, 100.0);
        assert_eq!(progress.label, ProgressPhase::Ready);
    }

    #[test]
    fn test_percent_text() {
        assert_eq!(ProgressState::at(42.7).percent_text(), "42%");
        assert_eq!(ProgressState::at(RUNNING_CEILING).percent_text(), "99%");
        assert_eq!(ProgressState::at(100.0).percent_text(), "100%");
    }
}
