// SPDX-License-Identifier: MIT OR Apache-2.0
//! Splash-screen timeline orchestration for the Kev'n Creates site.
//!
//! This crate drives the loading screen shown before the page content:
//! - Timeline steps with named easing curves
//! - A host-owned stage of visual targets
//! - Progress value with phase labels
//! - A sequence handle that runs a timeline exactly once
//! - Entrance presets and scroll helpers for the page behind it
//!
//! ## Architecture
//!
//! The orchestrator is built on:
//! - An injected [`Ticker`] for time and frame subscriptions
//! - An explicit `Pending -> Running -> {Completed, Cancelled}` state machine
//! - Per-frame [`SequenceHandle::tick`] calls from the host
//! - A single completion callback fired on the transition to `Completed`

pub mod builder;
pub mod easing;
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod splash;
pub mod step;
pub mod target;
pub mod ticker;
pub mod timeline;

pub use builder::{Position, TimelineBuilder};
pub use easing::{Easing, Interpolation, UnknownEasing, DEFAULT_OVERSHOOT};
pub use error::{Result, TimelineError};
pub use orchestrator::{start, CompletionCallback, SequenceHandle, SequenceId, SequenceStatus};
pub use progress::{ProgressPhase, ProgressState, RUNNING_CEILING};
pub use reveal::{text_reveal, Reveal, RevealOptions};
pub use scroll::{parallax_offset, scroll_progress};
pub use splash::{splash_timeline, SplashConfig, SplashTargets};
pub use step::{Property, PropertyTween, StepKind, TimelineStep, Tween};
pub use target::{Element, Presentation, Stage, TargetId};
pub use ticker::{FrameTicker, ManualTicker, SubscriptionId, Ticker};
pub use timeline::{Timeline, TimelineId};
