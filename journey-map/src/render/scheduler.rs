//! Frame scheduling.
//!
//! The animation reveals one point per display refresh. Between points it
//! suspends on [`Scheduler::schedule_next`]; that is the only suspension
//! point in rendering.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Source of display refresh signals.
pub trait Scheduler {
    /// Resolves when the next frame is due.
    fn schedule_next(&mut self) -> impl Future<Output = ()>;
}

/// Scheduler that never waits.
///
/// Runs an animation to completion as fast as the executor polls it.
/// Counts the frames it was asked for.
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler {
    frames: usize,
}

impl ImmediateScheduler {
    /// Create a scheduler with a zero frame count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames scheduled so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule_next(&mut self) -> impl Future<Output = ()> {
        self.frames += 1;
        std::future::ready(())
    }
}

/// Scheduler driven by a fixed-rate tokio timer.
///
/// Frames missed because the executor was busy are skipped rather than
/// replayed in a burst.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    /// Create a scheduler firing every `period`. The first frame is one
    /// period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    /// Time between frames.
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_next(&mut self) -> impl Future<Output = ()> {
        async move {
            self.interval.tick().await;
        }
    }
}

/// Cooperative cancellation flag for a running animation.
///
/// Clones share the flag. The animation checks it at the start of every
/// tick, so it stops at most one frame after [`CancelToken::cancel`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once any clone has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn immediate_scheduler_counts_frames() {
        let mut scheduler = ImmediateScheduler::new();
        scheduler.schedule_next().await;
        scheduler.schedule_next().await;
        assert_eq!(scheduler.frames(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_scheduler_waits_one_period() {
        let period = Duration::from_millis(16);
        let mut scheduler = IntervalScheduler::new(period);
        assert_eq!(scheduler.period(), period);

        let start = Instant::now();
        scheduler.schedule_next().await;
        scheduler.schedule_next().await;
        assert!(start.elapsed() >= period * 2);
    }

    #[test]
    fn cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        clone.cancel();
        assert!(token.is_cancelled());

        clone.cancel();
        assert!(token.is_cancelled());
    }
}
