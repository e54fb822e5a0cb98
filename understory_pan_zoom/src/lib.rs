// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: a headless pan/zoom engine for a bounded viewport.
//!
//! This crate turns drag, wheel and pinch gestures into a clamped
//! `translate(pan) scale(zoom)` transform for one content box inside one
//! clipping container. It focuses on:
//! - Zooming about the pointer (wheel, pinch) or the viewport center
//!   (imperative calls).
//! - Keeping content within padded bounds, and centering undersized content
//!   once on mount.
//! - Telling trackpads from mice from wheel events alone, smoothed over a
//!   short window.
//! - Snapping back into bounds after a delay when a zoom overshoots.
//!
//! It does **not** render, capture pointers, or recognize gestures. Callers
//! are expected to:
//! - Implement [`ElementHandle`] for their container and content boxes, or use
//!   [`FixedElement`].
//! - Translate native input into [`DragEvent`], [`WheelEvent`] and
//!   [`PinchEvent`] records.
//! - Call [`PanZoom::tick`] from a timer or frame callback, using
//!   [`PanZoom::next_deadline`] to know when.
//! - Apply [`PanZoom::transform`] (or [`PanZoom::rendered_transform`]) to the
//!   content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_pan_zoom::{FixedElement, PanZoom, PanZoomConfig};
//!
//! let mut pz = PanZoom::new(PanZoomConfig::default(), false).unwrap();
//! pz.attach_container(FixedElement::container(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! pz.attach_content(FixedElement::content(Size::new(400.0, 300.0)));
//!
//! // The first bounds pass runs shortly after mount and centers the content.
//! pz.mount(0);
//! pz.tick(pz.next_deadline().unwrap());
//! assert_eq!(pz.pan(), Vec2::new(200.0, 150.0));
//! assert!(pz.visible());
//!
//! // Imperative zoom about the viewport center.
//! pz.zoom_in(None, 100);
//! assert_eq!(pz.zoom(), 1.5);
//! assert_eq!(pz.transform().to_string(), "translate(100px, 75px) scale(1.5)");
//! ```
//!
//! ## Time
//!
//! There is no internal clock or tick loop. Every call that can schedule work
//! takes `now`, a host timestamp in milliseconds, and timers are deadlines
//! that fire from [`PanZoom::tick`]. Calling [`PanZoom::unmount`] drops them
//! all.
//!
//! ## Design notes
//!
//! - Pan is stored post-scale, in view pixels; drag deltas are not scaled.
//! - Zoom writes are immediate and unclamped in pan, so zooming stays
//!   responsive; the correction to an in-bounds pan comes later through
//!   [`AnimationController`].
//! - All state, timers and classifier history live in the engine instance;
//!   any number of engines can run side by side.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod animation;
mod bounds;
mod classify;
mod config;
mod element;
mod error;
mod event;
mod geometry;
mod modes;
mod pan_zoom;
mod transform;

pub use animation::{AnimationController, Fired, Transition, smoothstep};
pub use bounds::{Axes, BoundedPan, PanBounds};
pub use classify::{DeviceClassifier, looks_like_trackpad};
pub use config::PanZoomConfig;
pub use element::{ElementHandle, FixedElement, ViewportMetrics};
pub use error::ConfigError;
pub use event::{DeltaMode, DragEvent, PinchEvent, RawWheel, WheelEvent};
pub use geometry::{clamp_axis, clamp_point, sign, zoom_adjusted_pan};
pub use modes::{InteractionState, MouseType};
pub use pan_zoom::{DEFAULT_ZOOM_STEP, PanZoom, PanZoomDebugInfo, SubscriptionId};
pub use transform::Transform;
