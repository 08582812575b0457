// SPDX-License-Identifier: MIT OR Apache-2.0
//! The site's loading screen.
//!
//! Brand title and percentage rise in, the progress bar follows and fills
//! while the percentage counts up, everything fades out and the loader
//! itself shrinks away.

use crate::builder::{Position, TimelineBuilder};
use crate::easing::Easing;
use crate::step::{Property, StepKind, TimelineStep};
use crate::target::{Presentation, Stage, TargetId};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Distance splash elements rise from, in pixels
const INTRO_OFFSET_Y: f32 = 30.0;

/// Loading screen settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Brand title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Playback speed multiplier
    pub speed: f32,
    /// Title and percentage fade-in
    pub intro_duration: f32,
    /// Delay between title and percentage
    pub intro_stagger: f32,
    /// How far the bar's fade-in overlaps the intro
    pub bar_overlap: f32,
    /// Bar fade-in
    pub bar_duration: f32,
    /// Pause before the bar fills
    pub fill_delay: f32,
    /// Bar fill
    pub fill_duration: f32,
    /// Pause before the exit
    pub exit_delay: f32,
    /// Title and percentage fade-out
    pub exit_duration: f32,
    /// Delay between title and percentage on exit
    pub exit_stagger: f32,
    /// Bar fade-out
    pub bar_exit_duration: f32,
    /// Pause before the loader closes
    pub loader_delay: f32,
    /// Loader close
    pub loader_duration: f32,
    /// Curve for entrances and the fill
    pub intro_easing: Easing,
    /// Curve for exits
    pub exit_easing: Easing,
    /// Curve for the loader close
    pub loader_easing: Easing,
    /// Curve for the reported progress value
    pub progress_easing: Easing,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            title: "Kev'n".to_string(),
            subtitle: "CREATES".to_string(),
            speed: 1.0,
            intro_duration: 0.8,
            intro_stagger: 0.1,
            bar_overlap: 0.4,
            bar_duration: 0.6,
            fill_delay: 0.5,
            fill_duration: 2.5,
            exit_delay: 0.5,
            exit_duration: 0.6,
            exit_stagger: 0.1,
            bar_exit_duration: 0.4,
            loader_delay: 0.2,
            loader_duration: 1.0,
            intro_easing: Easing::Power2Out,
            exit_easing: Easing::Power2In,
            loader_easing: Easing::Power2InOut,
            progress_easing: Easing::Power2Out,
        }
    }
}

/// Elements of the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTargets {
    /// Full-screen backdrop
    pub loader: TargetId,
    /// Brand title block
    pub logo: TargetId,
    /// Percentage text
    pub percentage: TargetId,
    /// Progress bar track
    pub progress_bar: TargetId,
    /// Progress bar fill
    pub progress_fill: TargetId,
}

impl SplashTargets {
    /// Mount the loading screen elements in their initial state
    pub fn mount(stage: &mut Stage, config: &SplashConfig) -> Self {
        let loader = stage.mount("loader", Presentation::default());
        let logo = stage.mount(
            "logo",
            Presentation::hidden(INTRO_OFFSET_Y)
                .with_text(format!("{} {}", config.title, config.subtitle)),
        );
        let percentage = stage.mount(
            "percentage",
            Presentation::hidden(INTRO_OFFSET_Y).with_text("0%"),
        );
        let progress_bar = stage.mount("progress-bar", Presentation::hidden(INTRO_OFFSET_Y));
        let progress_fill = stage.mount("progress-fill", Presentation::default());

        Self {
            loader,
            logo,
            percentage,
            progress_bar,
            progress_fill,
        }
    }

    /// Unmount every element
    pub fn unmount(&self, stage: &mut Stage) {
        for id in [
            self.loader,
            self.logo,
            self.percentage,
            self.progress_bar,
            self.progress_fill,
        ] {
            stage.unmount(id);
        }
    }
}

/// Build the loading screen timeline
pub fn splash_timeline(targets: &SplashTargets, config: &SplashConfig) -> Timeline {
    let text = [targets.logo, targets.percentage];

    let mut timeline = TimelineBuilder::new("loading-screen")
        .progress_easing(config.progress_easing)
        .add_staggered(Position::Sequential, &text, config.intro_stagger, |target| {
            TimelineStep::new(target, StepKind::Appear, 0.0, config.intro_duration)
                .with_easing(config.intro_easing)
        })
        .add(
            Position::Offset(-config.bar_overlap),
            TimelineStep::new(targets.progress_bar, StepKind::Appear, 0.0, config.bar_duration)
                .with_easing(config.intro_easing),
        )
        .add(
            Position::Offset(config.fill_delay),
            TimelineStep::new(
                targets.progress_fill,
                StepKind::ProgressFill,
                0.0,
                config.fill_duration,
            )
            .with_easing(config.intro_easing)
            .with_readout(targets.percentage),
        )
        .add_staggered(
            Position::Offset(config.exit_delay),
            &text,
            config.exit_stagger,
            |target| {
                TimelineStep::new(target, StepKind::Exit, 0.0, config.exit_duration)
                    .with_easing(config.exit_easing)
            },
        )
        .add(
            Position::WithPrevious,
            TimelineStep::new(targets.progress_bar, StepKind::Exit, 0.0, config.bar_exit_duration)
                .with_easing(config.exit_easing)
                .with_tween(StepKind::Exit.default_tween().without(Property::TranslateY)),
        )
        .add(
            Position::Offset(config.loader_delay),
            TimelineStep::new(targets.loader, StepKind::Morph, 0.0, config.loader_duration)
                .with_easing(config.loader_easing),
        )
        .build();

    if config.speed > 0.0 && config.speed != 1.0 {
        timeline.scale_time(1.0 / config.speed);
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{self, SequenceStatus};
    use crate::ticker::ManualTicker;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_splash_schedule() {
        let mut stage = Stage::new();
        let config = SplashConfig::default();
        let targets = SplashTargets::mount(&mut stage, &config);
        let timeline = splash_timeline(&targets, &config);

        assert!(timeline.validate().is_ok());
        assert_eq!(timeline.step_count(), 8);
        assert!(approx(timeline.end(), 6.5));

        let fill = timeline
            .steps()
            .iter()
            .find(|s| s.kind == StepKind::ProgressFill)
            .unwrap();
        assert!(approx(fill.start_offset, 1.6));
        assert!(approx(fill.end(), 4.1));
        assert_eq!(fill.readout, Some(targets.percentage));

        let bar_exit = timeline
            .steps()
            .iter()
            .find(|s| s.target == targets.progress_bar && s.kind == StepKind::Exit)
            .unwrap();
        assert!(approx(bar_exit.start_offset, 4.6));
    }

    #[test]
    fn test_speed_scales_timeline() {
        let mut stage = Stage::new();
        let config = SplashConfig {
            speed: 2.0,
            ..SplashConfig::default()
        };
        let targets = SplashTargets::mount(&mut stage, &config);
        assert!(approx(splash_timeline(&targets, &config).end(), 3.25));
    }

    #[test]
    fn test_full_run() {
        let mut stage = Stage::new();
        let config = SplashConfig::default();
        let targets = SplashTargets::mount(&mut stage, &config);
        let timeline = splash_timeline(&targets, &config);

        let ticker = ManualTicker::new();
        let done = Arc::new(AtomicBool::new(false));
        let flag = done.clone();
        let mut handle = orchestrator::start(&timeline, Arc::new(ticker.clone()), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();

        ticker.set_secs(2.85);
        handle.tick(&mut stage);
        let text = stage.get(targets.percentage).unwrap().presentation.text.clone();
        assert_ne!(text.as_deref(), Some("0%"));
        assert!(!done.load(Ordering::SeqCst));

        ticker.set_secs(7.0);
        assert_eq!(handle.tick(&mut stage), SequenceStatus::Completed);
        assert!(done.load(Ordering::SeqCst));

        let loader = &stage.get(targets.loader).unwrap().presentation;
        assert_eq!(loader.opacity, 0.0);
        assert!(approx(loader.scale, 0.9));
        assert_eq!(
            stage.get(targets.percentage).unwrap().presentation.text.as_deref(),
            Some("100%")
        );
        assert_eq!(stage.get(targets.progress_fill).unwrap().presentation.fill, 1.0);
    }

    #[test]
    fn test_config_ron_defaults() {
        let config: SplashConfig = ron::from_str("(title: \"Studio\", speed: 1.5)").unwrap();
        assert_eq!(config.title, "Studio");
        assert_eq!(config.speed, 1.5);
        assert_eq!(config.fill_duration, 2.5);
        assert_eq!(config.loader_easing, Easing::Power2InOut);
    }
}
