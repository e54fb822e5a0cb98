// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trackpad versus mouse classification from wheel events.
//!
//! Platforms do not say which device produced a wheel event, and a single
//! event is an unreliable signal. [`DeviceClassifier`] judges each sample with
//! a heuristic and answers with the majority over the last
//! [`DeviceClassifier::CAPACITY`] samples.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pan_zoom::{DeltaMode, DeviceClassifier, MouseType, RawWheel};
//!
//! let mut classifier = DeviceClassifier::new();
//! let pixel = RawWheel { delta_y: 3.5, wheel_delta_y: None, delta_mode: DeltaMode::Pixel };
//!
//! let kind = classifier.classify(&pixel, MouseType::Mouse, None);
//! assert_eq!(kind, MouseType::Trackpad);
//! ```

use alloc::collections::VecDeque;

use crate::event::{DeltaMode, RawWheel};
use crate::modes::MouseType;

/// Returns `true` if a single wheel sample looks like it came from a trackpad.
///
/// A hardware delta of exactly `-3` times the normalized delta is the
/// trackpad signature; any other non-zero ratio is a mouse wheel. When no
/// hardware delta is available, pixel-precise deltas are taken as a trackpad.
#[must_use]
pub fn looks_like_trackpad(raw: &RawWheel) -> bool {
    match raw.wheel_delta_y {
        Some(wheel) if wheel != 0.0 => wheel == raw.delta_y * -3.0,
        _ => raw.delta_mode == DeltaMode::Pixel,
    }
}

/// Sliding-window majority filter over per-event device guesses.
#[derive(Clone, Debug, Default)]
pub struct DeviceClassifier {
    // `true` for a trackpad sample, oldest first.
    history: VecDeque<bool>,
}

impl DeviceClassifier {
    /// Number of samples the majority vote looks at.
    pub const CAPACITY: usize = 16;

    /// Creates a classifier with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Classifies `raw` and returns the smoothed device type.
    ///
    /// A `forced` type, or a `current` type of [`MouseType::Touchscreen`],
    /// short-circuits classification: `current` is returned and the history
    /// is left alone.
    pub fn classify(
        &mut self,
        raw: &RawWheel,
        current: MouseType,
        forced: Option<MouseType>,
    ) -> MouseType {
        if forced.is_some() || current == MouseType::Touchscreen {
            return current;
        }
        self.push(looks_like_trackpad(raw));
        self.majority()
    }

    /// Records one sample, evicting the oldest when full.
    pub fn push(&mut self, trackpad: bool) {
        if self.history.len() == Self::CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(trackpad);
    }

    /// The majority label over the current history. Ties go to the mouse.
    #[must_use]
    pub fn majority(&self) -> MouseType {
        let trackpad = self.history.iter().filter(|&&t| t).count();
        let mouse = self.history.len() - trackpad;
        if trackpad > mouse {
            MouseType::Trackpad
        } else {
            MouseType::Mouse
        }
    }

    /// Number of samples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if no sample has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DeviceClassifier, looks_like_trackpad};
    use crate::event::{DeltaMode, RawWheel};
    use crate::modes::MouseType;

    fn mouse_notch() -> RawWheel {
        RawWheel {
            delta_y: 100.0,
            wheel_delta_y: Some(-120.0),
            delta_mode: DeltaMode::Pixel,
        }
    }

    fn trackpad_swipe() -> RawWheel {
        RawWheel {
            delta_y: 4.0,
            wheel_delta_y: Some(-12.0),
            delta_mode: DeltaMode::Pixel,
        }
    }

    #[test]
    fn single_sample_heuristic() {
        assert!(looks_like_trackpad(&trackpad_swipe()));
        assert!(!looks_like_trackpad(&mouse_notch()));
        // Without a hardware delta the unit decides.
        let line = RawWheel {
            delta_y: 3.0,
            wheel_delta_y: None,
            delta_mode: DeltaMode::Line,
        };
        assert!(!looks_like_trackpad(&line));
        let pixel = RawWheel {
            delta_mode: DeltaMode::Pixel,
            ..line
        };
        assert!(looks_like_trackpad(&pixel));
        // A zero hardware delta counts as absent.
        let zero = RawWheel {
            wheel_delta_y: Some(0.0),
            ..line
        };
        assert!(!looks_like_trackpad(&zero));
    }

    #[test]
    fn forced_and_touchscreen_are_sticky() {
        let mut c = DeviceClassifier::new();
        let got = c.classify(&trackpad_swipe(), MouseType::Mouse, Some(MouseType::Mouse));
        assert_eq!(got, MouseType::Mouse);
        let got = c.classify(&trackpad_swipe(), MouseType::Touchscreen, None);
        assert_eq!(got, MouseType::Touchscreen);
        assert!(c.is_empty(), "short-circuited calls must not record samples");
    }

    #[test]
    fn ties_resolve_to_mouse() {
        let mut c = DeviceClassifier::new();
        assert_eq!(c.classify(&trackpad_swipe(), MouseType::Mouse, None), MouseType::Trackpad);
        assert_eq!(c.classify(&mouse_notch(), MouseType::Trackpad, None), MouseType::Mouse);
    }

    #[test]
    fn history_is_bounded_fifo() {
        let mut c = DeviceClassifier::new();
        for _ in 0..40 {
            c.push(true);
        }
        assert_eq!(c.len(), DeviceClassifier::CAPACITY);
        // Sixteen mouse samples push every trackpad sample out.
        for _ in 0..DeviceClassifier::CAPACITY {
            c.push(false);
        }
        assert_eq!(c.majority(), MouseType::Mouse);
        assert_eq!(c.len(), DeviceClassifier::CAPACITY);
    }

    #[test]
    fn nine_of_sixteen_trackpad_wins_regardless_of_newest() {
        let mut c = DeviceClassifier::new();
        for _ in 0..7 {
            c.push(false);
        }
        for _ in 0..8 {
            c.push(true);
        }
        // Eight of sixteen is a tie, which goes to the mouse.
        assert_eq!(c.classify(&mouse_notch(), MouseType::Trackpad, None), MouseType::Mouse);

        // With 9 trackpad samples in the window the newest verdict no longer matters.
        let mut c = DeviceClassifier::new();
        for _ in 0..6 {
            c.push(false);
        }
        for _ in 0..9 {
            c.push(true);
        }
        assert_eq!(c.classify(&mouse_notch(), MouseType::Trackpad, None), MouseType::Trackpad);
    }
}
