// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline builder with relative positioning.
//!
//! Positions mirror the GSAP position parameter the site's animations were
//! written with: `"+=0.5"` is `Offset(0.5)`, `"-=0.4"` is `Offset(-0.4)`,
//! `"<"` is `WithPrevious`.

use crate::easing::Easing;
use crate::step::TimelineStep;
use crate::target::TargetId;
use crate::timeline::Timeline;

/// Where a step is placed relative to what is already on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Right after the current end of the timeline
    #[default]
    Sequential,
    /// Relative to the current end; negative values overlap
    Offset(f32),
    /// Same start as the previously inserted step
    WithPrevious,
    /// Absolute time in seconds
    At(f32),
}

/// Builds a [`Timeline`] step by step
#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    timeline: Timeline,
    cursor: f32,
    last_start: f32,
}

impl TimelineBuilder {
    /// Start an empty timeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            timeline: Timeline::new(name),
            cursor: 0.0,
            last_start: 0.0,
        }
    }

    /// Current end of the timeline
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    fn resolve(&self, position: Position) -> f32 {
        let start = match position {
            Position::Sequential => self.cursor,
            Position::Offset(delta) => self.cursor + delta,
            Position::WithPrevious => self.last_start,
            Position::At(time) => time,
        };
        start.max(0.0)
    }

    /// Insert `step` at `position`; its own start offset is replaced
    pub fn add(mut self, position: Position, mut step: TimelineStep) -> Self {
        step.start_offset = self.resolve(position);
        self.last_start = step.start_offset;
        self.cursor = self.cursor.max(step.end());
        self.timeline.add_step(step);
        self
    }

    /// Insert one step per target, each `stagger` seconds after the previous.
    ///
    /// The group starts at `position`; `WithPrevious` on the next insert
    /// refers to the group's first step.
    pub fn add_staggered(
        mut self,
        position: Position,
        targets: &[TargetId],
        stagger: f32,
        make_step: impl Fn(TargetId) -> TimelineStep,
    ) -> Self {
        let first = self.resolve(position);
        let mut end = self.cursor;
        for (i, target) in targets.iter().enumerate() {
            let mut step = make_step(*target);
            step.start_offset = first + stagger * i as f32;
            end = end.max(step.end());
            self.timeline.add_step(step);
        }
        if !targets.is_empty() {
            self.last_start = first;
            self.cursor = end;
        }
        self
    }

    /// Curve for the progress value
    pub fn progress_easing(mut self, easing: Easing) -> Self {
        self.timeline.progress_easing = easing;
        self
    }

    /// Declare the total length
    pub fn length(mut self, length: f32) -> Self {
        self.timeline.length = Some(length);
        self
    }

    /// Finish
    pub fn build(self) -> Timeline {
        self.timeline
    }
}
