// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed snap-back and transition timing.
//!
//! Timers here are plain deadlines in host milliseconds. Nothing fires on its
//! own: the owner polls with the current time and applies what comes due.
//!
//! ## Usage
//!
//! 1) After a change that leaves pan out of bounds, call
//!    [`AnimationController::schedule_correction`]. Any earlier pending
//!    correction is dropped.
//! 2) On every host tick, call [`AnimationController::poll`] until it returns
//!    `None`, applying each [`Fired`] step.
//! 3) Gesture input that arrives first calls [`AnimationController::cancel`].
//!
//! ```
//! use kurbo::Vec2;
//! use understory_pan_zoom::{AnimationController, Fired};
//!
//! let mut anim = AnimationController::new();
//! anim.schedule_correction(Vec2::new(0.0, 0.0), 1_000, 300, 200);
//!
//! assert_eq!(anim.poll(1_100, Vec2::new(-50.0, 0.0)), None);
//! assert_eq!(
//!     anim.poll(1_300, Vec2::new(-50.0, 0.0)),
//!     Some(Fired::Start { target: Vec2::ZERO })
//! );
//! assert!(anim.is_active());
//! assert_eq!(anim.poll(1_500, Vec2::ZERO), Some(Fired::End));
//! assert!(!anim.is_active());
//! ```

use kurbo::Vec2;

/// Smoothstep easing: `t * t * (3 - 2t)` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A pan transition over a fixed time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Pan when the transition started.
    pub from: Vec2,
    /// Pan the transition settles on.
    pub to: Vec2,
    /// Start time in milliseconds.
    pub start: u64,
    /// Length in milliseconds.
    pub duration: u64,
}

impl Transition {
    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed as f64 / self.duration as f64).min(1.0)
    }

    /// Eased pan at `now`.
    #[must_use]
    pub fn sample(&self, now: u64) -> Vec2 {
        let t = smoothstep(self.progress(now));
        self.from.lerp(self.to, t)
    }

    /// Time at which the transition settles.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }
}

/// A step that came due during [`AnimationController::poll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fired {
    /// The correction started: write `target` as the committed pan.
    Start {
        /// The in-bounds pan to snap to.
        target: Vec2,
    },
    /// The transition finished and the active flag is clear again.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingStart {
    due: u64,
    target: Vec2,
    duration: u64,
}

/// Debounced snap-back timers for one engine.
///
/// At most one start timer and one end timer exist; scheduling replaces
/// whatever was pending.
#[derive(Clone, Debug, Default)]
pub struct AnimationController {
    start: Option<PendingStart>,
    end: Option<u64>,
    transition: Option<Transition>,
    active: bool,
}

impl AnimationController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a snap to `target` at `now + delay`, lasting `duration`.
    ///
    /// Pending start and end timers are cancelled first, which also ends any
    /// running transition.
    pub fn schedule_correction(&mut self, target: Vec2, now: u64, delay: u64, duration: u64) {
        self.start = Some(PendingStart {
            due: now.saturating_add(delay),
            target,
            duration,
        });
        self.end = None;
        self.transition = None;
        self.active = false;
        tracing::debug!(
            x = target.x,
            y = target.y,
            due = now.saturating_add(delay),
            "pan correction scheduled"
        );
    }

    /// Starts a transition from `from` to `to` right away.
    ///
    /// Pending timers are cancelled; the active flag stays set until
    /// `now + duration`.
    pub fn begin(&mut self, from: Vec2, to: Vec2, now: u64, duration: u64) {
        self.start = None;
        self.active = true;
        self.end = Some(now.saturating_add(duration));
        self.transition = Some(Transition {
            from,
            to,
            start: now,
            duration,
        });
    }

    /// Drops every pending timer and clears the active flag.
    pub fn cancel(&mut self) {
        if self.start.is_some() {
            tracing::debug!("pending pan correction cancelled");
        }
        self.start = None;
        self.end = None;
        self.transition = None;
        self.active = false;
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Target of the pending correction, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<Vec2> {
        self.start.map(|s| s.target)
    }

    /// The running transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref().filter(|_| self.active)
    }

    /// The earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.start.map(|s| s.due), self.end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires the earliest timer due at `now`, if any.
    ///
    /// `current` is the committed pan, used as the starting point of a
    /// transition. Call repeatedly until it returns `None`: a late poll can
    /// owe both the start and the end step.
    pub fn poll(&mut self, now: u64, current: Vec2) -> Option<Fired> {
        if let Some(pending) = self.start {
            if pending.due <= now {
                self.begin(current, pending.target, pending.due, pending.duration);
                tracing::debug!(at = pending.due, "pan correction started");
                return Some(Fired::Start {
                    target: pending.target,
                });
            }
        }
        if let Some(end) = self.end {
            if end <= now {
                self.end = None;
                self.transition = None;
                self.active = false;
                tracing::debug!(at = end, "transition finished");
                return Some(Fired::End);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{AnimationController, Fired, Transition, smoothstep};

    #[test]
    fn rescheduling_replaces_pending_correction() {
        let mut anim = AnimationController::new();
        anim.schedule_correction(Vec2::new(1.0, 1.0), 0, 300, 100);
        anim.schedule_correction(Vec2::new(2.0, 2.0), 100, 300, 100);
        assert_eq!(anim.next_deadline(), Some(400));
        assert_eq!(anim.poll(300, Vec2::ZERO), None);
        assert_eq!(
            anim.poll(400, Vec2::ZERO),
            Some(Fired::Start {
                target: Vec2::new(2.0, 2.0)
            })
        );
        assert_eq!(anim.next_deadline(), Some(500));
    }

    #[test]
    fn cancel_drops_everything() {
        let mut anim = AnimationController::new();
        anim.schedule_correction(Vec2::ZERO, 0, 10, 10);
        assert_eq!(anim.pending_target(), Some(Vec2::ZERO));
        anim.cancel();
        assert_eq!(anim.pending_target(), None);
        assert_eq!(anim.next_deadline(), None);
        assert_eq!(anim.poll(1_000, Vec2::ZERO), None);
    }

    #[test]
    fn late_poll_fires_start_then_end() {
        let mut anim = AnimationController::new();
        anim.schedule_correction(Vec2::new(5.0, 0.0), 0, 300, 300);
        assert_eq!(
            anim.poll(10_000, Vec2::ZERO),
            Some(Fired::Start {
                target: Vec2::new(5.0, 0.0)
            })
        );
        assert_eq!(anim.poll(10_000, Vec2::new(5.0, 0.0)), Some(Fired::End));
        assert_eq!(anim.poll(10_000, Vec2::new(5.0, 0.0)), None);
    }

    #[test]
    fn begin_runs_transition_window() {
        let mut anim = AnimationController::new();
        anim.begin(Vec2::ZERO, Vec2::new(100.0, 0.0), 50, 100);
        assert!(anim.is_active());
        let t = *anim.transition().unwrap();
        assert_eq!(t.end(), 150);
        assert_eq!(t.sample(50), Vec2::ZERO);
        assert_eq!(t.sample(100), Vec2::new(50.0, 0.0));
        assert_eq!(t.sample(500), Vec2::new(100.0, 0.0));
        assert_eq!(anim.poll(149, Vec2::ZERO), None);
        assert_eq!(anim.poll(150, Vec2::ZERO), Some(Fired::End));
        assert!(anim.transition().is_none());
    }

    #[test]
    fn smoothstep_shape() {
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(2.0), 1.0);
        assert!(smoothstep(0.25) < 0.25);
        assert!(smoothstep(0.75) > 0.75);
    }

    #[test]
    fn zero_duration_transition_is_settled() {
        let t = Transition {
            from: Vec2::ZERO,
            to: Vec2::new(3.0, 4.0),
            start: 10,
            duration: 0,
        };
        assert_eq!(t.sample(10), Vec2::new(3.0, 4.0));
    }
}
