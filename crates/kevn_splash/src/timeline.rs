// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline containing ordered steps.

use crate::easing::Easing;
use crate::error::{Result, TimelineError};
use crate::step::TimelineStep;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineId(pub Uuid);

impl TimelineId {
    /// Create a new random timeline ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimelineId {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered schedule of steps sharing one clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// Unique timeline ID
    #[serde(default)]
    pub id: TimelineId,
    /// Timeline name
    pub name: String,
    /// Steps, sorted by start offset
    steps: Vec<TimelineStep>,
    /// Declared length in seconds; no step may end after it
    #[serde(default)]
    pub length: Option<f32>,
    /// Curve mapping elapsed time onto the progress value
    #[serde(default)]
    pub progress_easing: Easing,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TimelineId::new(),
            name: name.into(),
            steps: Vec::new(),
            length: None,
            progress_easing: Easing::Linear,
        }
    }

    /// Create a timeline from a list of steps
    pub fn from_steps(name: impl Into<String>, steps: Vec<TimelineStep>) -> Self {
        let mut timeline = Self::new(name);
        timeline.steps = steps;
        timeline.sort_steps();
        timeline
    }

    /// Declare the total length
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the progress curve
    pub fn with_progress_easing(mut self, easing: Easing) -> Self {
        self.progress_easing = easing;
        self
    }

    /// Add a step
    pub fn add_step(&mut self, step: TimelineStep) {
        self.steps.push(step);
        self.sort_steps();
    }

    /// Sort steps by start offset, keeping insertion order for ties
    fn sort_steps(&mut self) {
        self.steps
            .sort_by(|a, b| a.start_offset.total_cmp(&b.start_offset));
    }

    /// Get all steps
    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// Get step count
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the timeline has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time at which the last step completes
    pub fn end(&self) -> f32 {
        self.steps
            .iter()
            .map(TimelineStep::end)
            .fold(0.0, f32::max)
    }

    /// Scale every offset and duration by `factor`
    pub fn scale_time(&mut self, factor: f32) {
        for step in &mut self.steps {
            step.start_offset *= factor;
            step.duration *= factor;
        }
        if let Some(length) = &mut self.length {
            *length *= factor;
        }
    }

    /// Check the timeline and return its steps in start order.
    ///
    /// Steps are sorted here as well since deserialized timelines bypass
    /// [`Timeline::add_step`].
    pub fn validated_steps(&self) -> Result<Vec<TimelineStep>> {
        if self.steps.is_empty() {
            return Err(TimelineError::EmptyTimeline);
        }

        let mut steps = self.steps.clone();
        steps.sort_by(|a, b| a.start_offset.total_cmp(&b.start_offset));

        for (index, step) in steps.iter().enumerate() {
            if !step.start_offset.is_finite() || step.start_offset < 0.0 {
                return Err(TimelineError::InvalidStep {
                    index,
                    reason: format!("start offset {} is not a non-negative time", step.start_offset),
                });
            }
            if !step.duration.is_finite() || step.duration < 0.0 {
                return Err(TimelineError::InvalidStep {
                    index,
                    reason: format!("duration {} is not a non-negative time", step.duration),
                });
            }
            if let Some(length) = self.length {
                if length.is_nan() || step.end() > length {
                    return Err(TimelineError::StepExceedsTimeline {
                        index,
                        end: step.end(),
                        length,
                    });
                }
            }
        }

        for (first, a) in steps.iter().enumerate() {
            for (offset, b) in steps[first + 1..].iter().enumerate() {
                if a.target == b.target && a.overlaps(b) {
                    return Err(TimelineError::TargetCollision {
                        target: a.target,
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        Ok(steps)
    }

    /// Check the timeline without consuming it
    pub fn validate(&self) -> Result<()> {
        self.validated_steps().map(|_| ())
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> std::result::Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON
    pub fn from_ron(source: &str) -> std::result::Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new("Untitled Timeline")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;
    use crate::target::TargetId;

    #[test]
    fn test_steps_sorted_on_insert() {
        let mut timeline = Timeline::new("test");
        timeline.add_step(TimelineStep::new(TargetId::new(), StepKind::Exit, 3.0, 0.5));
        timeline.add_step(TimelineStep::new(TargetId::new(), StepKind::Appear, 0.0, 1.0));
        timeline.add_step(TimelineStep::new(TargetId::new(), StepKind::ProgressFill, 0.0, 3.0));

        let kinds: Vec<_> = timeline.steps().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [StepKind::Appear, StepKind::ProgressFill, StepKind::Exit]);
        assert_eq!(timeline.end(), 3.5);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Timeline::new("empty").validate(), Err(TimelineError::EmptyTimeline));
    }

    #[test]
    fn test_invalid_step_rejected() {
        let timeline = Timeline::from_steps(
            "bad",
            vec![TimelineStep::new(TargetId::new(), StepKind::Appear, 0.0, -1.0)],
        );
        assert!(matches!(
            timeline.validate(),
            Err(TimelineError::InvalidStep { index: 0, .. })
        ));

        let timeline = Timeline::from_steps(
            "nan",
            vec![TimelineStep::new(TargetId::new(), StepKind::Appear, f32::NAN, 1.0)],
        );
        assert!(matches!(timeline.validate(), Err(TimelineError::InvalidStep { .. })));
    }

    #[test]
    fn test_declared_length_enforced() {
        let timeline = Timeline::from_steps(
            "short",
            vec![TimelineStep::new(TargetId::new(), StepKind::Appear, 1.0, 2.0)],
        )
        .with_length(2.5);
        assert!(matches!(
            timeline.validate(),
            Err(TimelineError::StepExceedsTimeline { index: 0, .. })
        ));
        assert!(timeline.clone().with_length(3.0).validate().is_ok());
    }

    #[test]
    fn test_same_target_overlap_rejected() {
        let logo = TargetId::new();
        let timeline = Timeline::from_steps(
            "clash",
            vec![
                TimelineStep::new(logo, StepKind::Appear, 0.0, 1.0),
                TimelineStep::new(TargetId::new(), StepKind::Appear, 0.2, 1.0),
                TimelineStep::new(logo, StepKind::Exit, 0.5, 1.0),
            ],
        );
        assert_eq!(
            timeline.validate(),
            Err(TimelineError::TargetCollision {
                target: logo,
                first: 0,
                second: 2,
            })
        );

        // back-to-back on the same target is fine
        let timeline = Timeline::from_steps(
            "chain",
            vec![
                TimelineStep::new(logo, StepKind::Appear, 0.0, 1.0),
                TimelineStep::new(logo, StepKind::Exit, 1.0, 1.0),
            ],
        );
        assert!(timeline.validate().is_ok());
    }

    #[test]
    fn test_readout_target_not_checked_for_overlap() {
        let fill = TargetId::new();
        let percentage = TargetId::new();
        let timeline = Timeline::from_steps(
            "counting",
            vec![
                TimelineStep::new(percentage, StepKind::Appear, 0.0, 1.0),
                TimelineStep::new(fill, StepKind::ProgressFill, 0.5, 2.0).with_readout(percentage),
            ],
        );
        assert!(timeline.validate().is_ok());
    }

    #[test]
    fn test_scale_time() {
        let mut timeline = Timeline::from_steps(
            "fast",
            vec![TimelineStep::new(TargetId::new(), StepKind::Appear, 1.0, 2.0)],
        )
        .with_length(4.0);
        timeline.scale_time(0.5);
        assert_eq!(timeline.end(), 1.5);
        assert_eq!(timeline.length, Some(2.0));
    }

    #[test]
    fn test_ron_serialization() {
        let timeline = Timeline::from_steps(
            "splash",
            vec![TimelineStep::new(TargetId::new(), StepKind::ProgressFill, 0.5, 2.5)
                .with_easing(Easing::Power2Out)],
        );
        let ron_str = timeline.to_ron().unwrap();
        let loaded = Timeline::from_ron(&ron_str).unwrap();
        assert_eq!(loaded.name, "splash");
        assert_eq!(loaded.steps(), timeline.steps());
    }
}
