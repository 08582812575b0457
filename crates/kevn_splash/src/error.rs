// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline errors.

use crate::target::TargetId;

/// Error raised when building or starting a timeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// No steps to run
    #[error("Timeline has no steps")]
    EmptyTimeline,

    /// Step has a negative or non-finite offset or duration
    #[error("Invalid step {index}: {reason}")]
    InvalidStep {
        /// Index of the step after sorting
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Step runs past the declared timeline length
    #[error("Step {index} ends at {end}s, past the timeline length of {length}s")]
    StepExceedsTimeline {
        /// Index of the step after sorting
        index: usize,
        /// Step end in seconds
        end: f32,
        /// Declared timeline length in seconds
        length: f32,
    },

    /// Two steps animate the same element over overlapping ranges
    #[error("Steps {first} and {second} overlap on target {target:?}")]
    TargetCollision {
        /// Shared target
        target: TargetId,
        /// Index of the earlier step
        first: usize,
        /// Index of the later step
        second: usize,
    },

    /// The sequence has already been started
    #[error("Sequence already started")]
    AlreadyStarted,
}

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
