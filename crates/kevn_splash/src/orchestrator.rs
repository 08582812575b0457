// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading sequence orchestrator.
//!
//! A [`SequenceHandle`] is one run of a [`Timeline`]. The host calls
//! [`SequenceHandle::tick`] once per frame with the stage holding the
//! visual elements; the handle applies every step whose time has come,
//! derives the progress value from elapsed time and fires its completion
//! callback exactly once when the last step ends.
//!
//! State machine: `Pending -> Running -> {Completed, Cancelled}`. Terminal
//! states absorb every further call.

use crate::easing::Easing;
use crate::error::{Result, TimelineError};
use crate::progress::ProgressState;
use crate::step::{StepKind, TimelineStep};
use crate::target::Stage;
use crate::ticker::{SubscriptionId, Ticker};
use crate::timeline::Timeline;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a sequence run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(pub Uuid);

impl SequenceId {
    /// Create a new random sequence ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SequenceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a sequence run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceStatus {
    /// Created, not started
    #[default]
    Pending,
    /// Advancing on every tick
    Running,
    /// Last step reached, callback fired
    Completed,
    /// Stopped before completion
    Cancelled,
}

impl SequenceStatus {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, SequenceStatus::Completed | SequenceStatus::Cancelled)
    }
}

/// Callback fired when a sequence completes
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug)]
struct ScheduledStep {
    step: TimelineStep,
    start: Duration,
    end: Duration,
    settled: bool,
}

impl ScheduledStep {
    fn new(index: usize, step: TimelineStep) -> Result<Self> {
        let invalid = |reason: String| TimelineError::InvalidStep { index, reason };
        let start = Duration::try_from_secs_f32(step.start_offset)
            .map_err(|e| invalid(format!("start offset: {e}")))?;
        let duration = Duration::try_from_secs_f32(step.duration)
            .map_err(|e| invalid(format!("duration: {e}")))?;
        let end = start
            .checked_add(duration)
            .ok_or_else(|| invalid(format!("end of step overflows at {}s", step.end())))?;
        Ok(Self {
            step,
            start,
            end,
            settled: false,
        })
    }

    /// Linear progress at `elapsed`, if the step has started
    fn progress_at(&self, elapsed: Duration) -> Option<f32> {
        if elapsed < self.start {
            return None;
        }
        if elapsed >= self.end {
            return Some(1.0);
        }
        let span = (self.end - self.start).as_secs_f32();
        Some(((elapsed - self.start).as_secs_f32() / span).min(1.0))
    }
}

/// One run of a loading timeline
pub struct SequenceHandle {
    id: SequenceId,
    name: String,
    steps: Vec<ScheduledStep>,
    end: Duration,
    progress_easing: Easing,
    ticker: Arc<dyn Ticker>,
    subscription: Option<SubscriptionId>,
    started_at: Duration,
    status: SequenceStatus,
    progress: ProgressState,
    on_complete: Option<CompletionCallback>,
    skipped: usize,
}

impl std::fmt::Debug for SequenceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("step_count", &self.steps.len())
            .field("end", &self.end)
            .field("status", &self.status)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

/// Validate `timeline` and start it immediately
pub fn start(
    timeline: &Timeline,
    ticker: Arc<dyn Ticker>,
    on_complete: impl FnOnce() + Send + 'static,
) -> Result<SequenceHandle> {
    let mut handle = SequenceHandle::new(timeline, ticker)?;
    handle.start(on_complete)?;
    Ok(handle)
}

impl SequenceHandle {
    /// Create a pending run of `timeline`.
    ///
    /// All validation happens here, before any subscription exists.
    pub fn new(timeline: &Timeline, ticker: Arc<dyn Ticker>) -> Result<Self> {
        let steps = timeline
            .validated_steps()?
            .into_iter()
            .enumerate()
            .map(|(index, step)| ScheduledStep::new(index, step))
            .collect::<Result<Vec<_>>>()?;
        let end = steps.iter().map(|s| s.end).max().unwrap_or_default();

        Ok(Self {
            id: SequenceId::new(),
            name: timeline.name.clone(),
            steps,
            end,
            progress_easing: timeline.progress_easing,
            ticker,
            subscription: None,
            started_at: Duration::ZERO,
            status: SequenceStatus::Pending,
            progress: ProgressState::new(),
            on_complete: None,
            skipped: 0,
        })
    }

    /// Start the run. A handle can only be started once.
    pub fn start(&mut self, on_complete: impl FnOnce() + Send + 'static) -> Result<()> {
        if self.status != SequenceStatus::Pending {
            return Err(TimelineError::AlreadyStarted);
        }

        self.subscription = Some(self.ticker.subscribe());
        self.started_at = self.ticker.now();
        self.on_complete = Some(Box::new(on_complete));
        self.status = SequenceStatus::Running;

        tracing::info!(
            "Started sequence '{}' ({} steps, {:.2}s)",
            self.name,
            self.steps.len(),
            self.end.as_secs_f32()
        );
        Ok(())
    }

    /// Advance to the ticker's current time.
    ///
    /// Steps whose start has passed are applied; steps whose end has passed
    /// are applied at their final value once and then left alone, so a
    /// long frame gap still settles every step. Elements missing from the
    /// stage are skipped without stalling the run.
    pub fn tick(&mut self, stage: &mut Stage) -> SequenceStatus {
        if self.status != SequenceStatus::Running {
            return self.status;
        }

        let elapsed = self.elapsed();

        for scheduled in self.steps.iter_mut().filter(|s| !s.settled) {
            let Some(t) = scheduled.progress_at(elapsed) else {
                continue;
            };
            let step = &scheduled.step;

            match stage.get_mut(step.target) {
                Some(element) => step.apply(&mut element.presentation, t),
                None => {
                    self.skipped += 1;
                    tracing::debug!(
                        "Skipping {} step on unmounted target {:?}",
                        step.kind.name(),
                        step.target
                    );
                }
            }

            if step.kind == StepKind::ProgressFill {
                if let Some(readout) = step.readout {
                    if let Some(element) = stage.get_mut(readout) {
                        element.presentation.text = Some(step.readout_text(t));
                    }
                }
            }

            if t >= 1.0 {
                scheduled.settled = true;
            }
        }

        if elapsed >= self.end {
            self.complete();
        } else {
            let fraction = elapsed.as_secs_f32() / self.end.as_secs_f32();
            self.progress
                .advance_to(self.progress_easing.apply(fraction) * 100.0);
            tracing::trace!("Sequence '{}' at {:.1}%", self.name, self.progress.value);
        }

        self.status
    }

    /// Stop the run. No-op unless running.
    ///
    /// The completion callback is dropped without being called and the
    /// frame subscription is released before this returns.
    pub fn cancel(&mut self) {
        if self.status != SequenceStatus::Running {
            return;
        }

        self.status = SequenceStatus::Cancelled;
        self.on_complete = None;
        self.release();
        tracing::info!(
            "Cancelled sequence '{}' at {:.1}%",
            self.name,
            self.progress.value
        );
    }

    fn complete(&mut self) {
        self.progress.complete();
        self.status = SequenceStatus::Completed;
        self.release();
        tracing::info!("Completed sequence '{}'", self.name);

        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }

    fn release(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.ticker.unsubscribe(id);
            tracing::debug!("Released frame subscription {:?}", id);
        }
    }

    /// Current progress. Pure read.
    pub fn report_progress(&self) -> ProgressState {
        self.progress
    }

    /// Current status
    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    /// Whether the run is advancing
    pub fn is_running(&self) -> bool {
        self.status == SequenceStatus::Running
    }

    /// Time since start, zero unless running
    pub fn elapsed(&self) -> Duration {
        if self.status != SequenceStatus::Running {
            return Duration::ZERO;
        }
        self.ticker.now().saturating_sub(self.started_at)
    }

    /// Time at which the last step completes
    pub fn end(&self) -> Duration {
        self.end
    }

    /// Sequence ID
    pub fn id(&self) -> SequenceId {
        self.id
    }

    /// Number of step applications skipped because the target was gone
    pub fn skipped_mutations(&self) -> usize {
        self.skipped
    }
}

impl Drop for SequenceHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
