// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline step definitions.

use crate::easing::{Easing, Interpolation};
use crate::target::{Presentation, TargetId};
use serde::{Deserialize, Serialize};

/// Kind of step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Fade and slide an element in
    Appear,
    /// Reshape an element (scale, opacity)
    Morph,
    /// Fill a progress bar
    ProgressFill,
    /// Fade and slide an element out
    Exit,
    /// Short scale-up flash
    Burst,
}

impl StepKind {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Appear => "appear",
            Self::Morph => "morph",
            Self::ProgressFill => "progress-fill",
            Self::Exit => "exit",
            Self::Burst => "burst",
        }
    }

    /// The property ranges a step of this kind animates unless overridden
    pub fn default_tween(&self) -> Tween {
        match self {
            Self::Appear => Tween::new()
                .with(Property::Opacity, 0.0, 1.0)
                .with(Property::TranslateY, 30.0, 0.0),
            Self::Morph => Tween::new()
                .with(Property::Opacity, 1.0, 0.0)
                .with(Property::Scale, 1.0, 0.9),
            Self::ProgressFill => Tween::new().with(Property::Fill, 0.0, 1.0),
            Self::Exit => Tween::new()
                .with(Property::Opacity, 1.0, 0.0)
                .with(Property::TranslateY, 0.0, -20.0),
            Self::Burst => Tween::new()
                .with(Property::Scale, 1.0, 1.6)
                .with(Property::Opacity, 1.0, 0.0),
        }
    }
}

/// Animatable presentation property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Opacity
    Opacity,
    /// Horizontal offset
    TranslateX,
    /// Vertical offset
    TranslateY,
    /// Uniform scale
    Scale,
    /// Fill fraction
    Fill,
}

impl Property {
    fn write(&self, presentation: &mut Presentation, value: f32) {
        match self {
            Property::Opacity => presentation.opacity = value,
            Property::TranslateX => presentation.translate_x = value,
            Property::TranslateY => presentation.translate_y = value,
            Property::Scale => presentation.scale = value,
            Property::Fill => presentation.fill = value,
        }
    }
}

/// One property range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTween {
    /// Animated property
    pub property: Property,
    /// Value at step start
    pub from: f32,
    /// Value at step end
    pub to: f32,
}

/// Set of property ranges animated together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Property ranges
    pub properties: Vec<PropertyTween>,
}

impl Tween {
    /// Create an empty tween
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a property range
    pub fn with(mut self, property: Property, from: f32, to: f32) -> Self {
        self.properties.retain(|p| p.property != property);
        self.properties.push(PropertyTween { property, from, to });
        self
    }

    /// Remove a property range
    pub fn without(mut self, property: Property) -> Self {
        self.properties.retain(|p| p.property != property);
        self
    }

    /// Write eased values at linear progress `t` into `presentation`
    pub fn apply(&self, presentation: &mut Presentation, t: f32, easing: Easing) {
        let eased = easing.apply(t);
        for p in &self.properties {
            p.property
                .write(presentation, Interpolation::lerp(p.from, p.to, eased));
        }
    }
}

/// An ordered unit of animation work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Element the step mutates
    pub target: TargetId,
    /// Step kind
    pub kind: StepKind,
    /// Seconds from timeline start
    pub start_offset: f32,
    /// Length in seconds
    pub duration: f32,
    /// Interpolation curve
    pub easing: Easing,
    /// Properties animated
    pub tween: Tween,
    /// Text element that mirrors a progress fill as a percentage
    #[serde(default)]
    pub readout: Option<TargetId>,
}

impl TimelineStep {
    /// Create a step with the kind's default tween and `power2.out` easing
    pub fn new(target: TargetId, kind: StepKind, start_offset: f32, duration: f32) -> Self {
        Self {
            target,
            kind,
            start_offset,
            duration,
            easing: Easing::default(),
            tween: kind.default_tween(),
            readout: None,
        }
    }

    /// Set easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replace the tween
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tween = tween;
        self
    }

    /// Mirror the fill as percentage text on another element
    pub fn with_readout(mut self, readout: TargetId) -> Self {
        self.readout = Some(readout);
        self
    }

    /// Time at which the step is fully applied
    pub fn end(&self) -> f32 {
        self.start_offset + self.duration
    }

    /// Whether this step's time range overlaps another's.
    ///
    /// Ranges are half-open, so a step that starts exactly when another
    /// ends does not overlap it. Zero-length steps never overlap.
    pub fn overlaps(&self, other: &TimelineStep) -> bool {
        self.start_offset < other.end() && other.start_offset < self.end()
    }

    /// Apply the step at linear progress `t`
    pub fn apply(&self, presentation: &mut Presentation, t: f32) {
        self.tween.apply(presentation, t, self.easing);
    }

    /// Percentage text shown by the readout at linear progress `t`
    pub fn readout_text(&self, t: f32) -> String {
        format!("{}%", (self.easing.apply(t) * 100.0).round() as u32)
    }
}
