// SPDX-License-Identifier: MIT OR Apache-2.0
//! Entrance presets for page sections.
//!
//! Sections fade or slide into place when they scroll into view; headings
//! reveal word by word.

use crate::builder::{Position, TimelineBuilder};
use crate::easing::Easing;
use crate::step::{Property, StepKind, TimelineStep, Tween};
use crate::target::{Presentation, Stage, TargetId};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Vertical distance words rise from
const WORD_OFFSET_Y: f32 = 50.0;

/// How an element enters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Reveal {
    /// Fade in while rising 50px
    #[default]
    FadeUp,
    /// Fade in place
    FadeIn,
    /// Fade in while sliding from the right
    SlideLeft,
    /// Fade in while sliding from the left
    SlideRight,
    /// Fade in while growing from 80%
    Scale,
}

impl Reveal {
    /// Property ranges for this entrance
    pub fn tween(&self) -> Tween {
        let fade = Tween::new().with(Property::Opacity, 0.0, 1.0);
        match self {
            Reveal::FadeUp => fade.with(Property::TranslateY, 50.0, 0.0),
            Reveal::FadeIn => fade,
            Reveal::SlideLeft => fade.with(Property::TranslateX, 100.0, 0.0),
            Reveal::SlideRight => fade.with(Property::TranslateX, -100.0, 0.0),
            Reveal::Scale => fade.with(Property::Scale, 0.8, 1.0),
        }
    }

    /// Presentation an element should be mounted with before it enters
    pub fn initial(&self) -> Presentation {
        let mut presentation = Presentation::default();
        self.tween().apply(&mut presentation, 0.0, Easing::Linear);
        presentation
    }

    /// Step animating `target` in
    pub fn step(&self, target: TargetId, options: &RevealOptions) -> TimelineStep {
        TimelineStep::new(target, StepKind::Appear, options.delay, options.duration)
            .with_easing(options.ease)
            .with_tween(self.tween())
    }
}

/// Timing of an entrance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Seconds
    pub duration: f32,
    /// Seconds before the entrance starts
    pub delay: f32,
    /// Curve
    pub ease: Easing,
    /// Seconds between consecutive words of a text reveal
    pub stagger: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration: 0.8,
            delay: 0.0,
            ease: Easing::Power2Out,
            stagger: 0.1,
        }
    }
}

/// Mount each word of `text` as its own element and build a timeline that
/// raises them in one after another.
///
/// Words are mounted hidden, named `{name}-word-{index}`. Text without
/// words yields an empty timeline.
pub fn text_reveal(
    stage: &mut Stage,
    name: &str,
    text: &str,
    options: &RevealOptions,
) -> (Vec<TargetId>, Timeline) {
    let words: Vec<TargetId> = text
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            stage.mount(
                format!("{name}-word-{i}"),
                Presentation::hidden(WORD_OFFSET_Y).with_text(word),
            )
        })
        .collect();

    let timeline = TimelineBuilder::new(name)
        .add_staggered(Position::At(options.delay), &words, options.stagger, |id| {
            TimelineStep::new(id, StepKind::Appear, 0.0, options.duration)
                .with_easing(options.ease)
                .with_tween(Reveal::FadeUp.tween())
        })
        .build();

    (words, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        let up = Reveal::FadeUp.initial();
        assert_eq!((up.opacity, up.translate_y), (0.0, 50.0));

        let left = Reveal::SlideLeft.initial();
        assert_eq!((left.opacity, left.translate_x), (0.0, 100.0));
        assert_eq!(Reveal::SlideRight.initial().translate_x, -100.0);

        let scale = Reveal::Scale.initial();
        assert_eq!((scale.opacity, scale.scale), (0.0, 0.8));

        let fade = Reveal::FadeIn.initial();
        assert_eq!(fade.translate_y, 0.0);
        assert_eq!(fade.scale, 1.0);
    }

    #[test]
    fn test_step_lands_at_rest() {
        let options = RevealOptions {
            delay: 0.3,
            ease: Easing::BackOut(1.7),
            ..RevealOptions::default()
        };
        let step = Reveal::SlideRight.step(TargetId::new(), &options);
        assert_eq!(step.start_offset, 0.3);
        assert!((step.end() - 1.1).abs() < 1e-6);

        let mut p = Reveal::SlideRight.initial();
        step.apply(&mut p, 1.0);
        assert_eq!(p, Presentation::default());
    }

    #[test]
    fn test_text_reveal_staggers_words() {
        let mut stage = Stage::new();
        let options = RevealOptions {
            delay: 0.2,
            ..RevealOptions::default()
        };
        let (words, timeline) = text_reveal(&mut stage, "hero", "Design  that moves", &options);

        assert_eq!(words.len(), 3);
        let (_, second) = stage.by_name("hero-word-1").unwrap();
        assert_eq!(second.presentation.text.as_deref(), Some("that"));
        assert_eq!(second.presentation.opacity, 0.0);

        let starts: Vec<f32> = timeline.steps().iter().map(|s| s.start_offset).collect();
        assert!((starts[0] - 0.2).abs() < 1e-6);
        assert!((starts[2] - 0.4).abs() < 1e-6);
        assert!((timeline.end() - 1.2).abs() < 1e-5);
        assert!(timeline.validate().is_ok());
    }

    #[test]
    fn test_text_reveal_without_words() {
        let mut stage = Stage::new();
        let (words, timeline) = text_reveal(&mut stage, "empty", "   ", &RevealOptions::default());
        assert!(words.is_empty());
        assert!(timeline.is_empty());
        assert!(stage.is_empty());
    }

    #[test]
    fn test_options_from_ron() {
        let options: RevealOptions = ron::from_str("(ease: \"back.out(1.2)\")").unwrap();
        assert_eq!(options.ease, Easing::BackOut(1.2));
        assert_eq!(options.duration, 0.8);
    }
}
