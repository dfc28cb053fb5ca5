//! Compile-time timing and scheduling parameters.

/// Suspension between two hold-time samples while the button is down.
pub const HOLD_STAGE_MS: u32 = 2000;

/// Extra suspension after a hold has been classified as [`Band::Medium`].
///
/// Only the medium band gets it. Short and long holds resume polling
/// straight away.
///
/// [`Band::Medium`]: crate::Band::Medium
pub const MEDIUM_SETTLE_MS: u32 = 2000;

/// Half period of the slow blink (medium band).
pub const SLOW_BLINK_MS: u32 = 400;

/// Half period of the fast blink (long band).
pub const FAST_BLINK_MS: u32 = 100;

/// One scheduler tick, used by the loops that have nothing to wait for.
///
/// A task that never suspends would starve every lower priority task, so the
/// idle paths still give up the processor for this long.
pub const POLL_TICK_MS: u32 = 1;

/// Scheduling priority handed to the task spawner. Higher preempts lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskPriority(pub u8);

impl TaskPriority {
    /// Priority of the button classifier task.
    pub const CLASSIFIER: TaskPriority = TaskPriority(2);
    /// Priority of the blink driver task.
    pub const DRIVER: TaskPriority = TaskPriority(1);
}

// The classifier gates what the driver shows, it must never be starved by it.
const _: () = assert!(TaskPriority::CLASSIFIER.0 > TaskPriority::DRIVER.0);
