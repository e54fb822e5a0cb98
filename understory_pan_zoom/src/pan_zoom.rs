// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Vec2};

use crate::animation::{AnimationController, Fired};
use crate::bounds::{Axes, PanBounds};
use crate::classify::DeviceClassifier;
use crate::config::PanZoomConfig;
use crate::element::{ElementHandle, FixedElement, ViewportMetrics};
use crate::error::ConfigError;
use crate::event::{DragEvent, PinchEvent, WheelEvent};
use crate::geometry::{sign, zoom_adjusted_pan};
use crate::modes::{InteractionState, MouseType};
use crate::transform::Transform;

/// Zoom step used by [`PanZoom::zoom_in`] and [`PanZoom::zoom_out`] when none
/// is given.
pub const DEFAULT_ZOOM_STEP: f64 = 0.5;

/// Handle returned by [`PanZoom::on_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Transform)>;

/// Pan/zoom engine for one bounded viewport.
///
/// `PanZoom` owns the transform and is the only thing that mutates it. Hosts
/// feed it gesture records and imperative calls, drive its timers with
/// [`tick`](Self::tick), and read the result back (or subscribe with
/// [`on_change`](Self::on_change)) to render `translate(pan) scale(zoom)`.
///
/// Every entry point that can schedule work takes `now`, a host timestamp in
/// milliseconds. The engine never reads a clock itself.
pub struct PanZoom<H = FixedElement> {
    config: PanZoomConfig,
    container: Option<H>,
    content: Option<H>,
    pan: Vec2,
    zoom: f64,
    mouse_type: MouseType,
    classifier: DeviceClassifier,
    animation: AnimationController,
    pinching: bool,
    pending_center: Axes,
    visible: bool,
    mount_due: Option<u64>,
    unmounted: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<H: ElementHandle> PanZoom<H> {
    /// Creates an engine from a validated configuration.
    ///
    /// `coarse_pointer` is the host's touch-screen capability; when set, and
    /// no device type is forced, the engine starts as
    /// [`MouseType::Touchscreen`] and never reclassifies.
    pub fn new(config: PanZoomConfig, coarse_pointer: bool) -> Result<Self, ConfigError> {
        config.validate()?;
        let mouse_type = match config.force_mouse_type {
            Some(forced) => forced,
            None if coarse_pointer => MouseType::Touchscreen,
            None => MouseType::Mouse,
        };
        let pending_center = if config.center_on_mount && config.initial_pan.is_none() {
            Axes::all()
        } else {
            Axes::empty()
        };
        Ok(Self {
            pan: config.initial_pan_or_zero(),
            zoom: config.initial_zoom,
            mouse_type,
            classifier: DeviceClassifier::new(),
            animation: AnimationController::new(),
            pinching: false,
            pending_center,
            visible: !config.center_on_mount,
            mount_due: None,
            unmounted: false,
            container: None,
            content: None,
            listeners: Vec::new(),
            next_subscription: 0,
            config,
        })
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    // --- element slots ---

    /// Attaches the clipping container element.
    pub fn attach_container(&mut self, handle: H) {
        self.container = Some(handle);
    }

    /// Attaches the transformed content element.
    pub fn attach_content(&mut self, handle: H) {
        self.content = Some(handle);
    }

    /// Detaches and returns the container element.
    pub fn detach_container(&mut self) -> Option<H> {
        self.container.take()
    }

    /// Detaches and returns the content element.
    pub fn detach_content(&mut self) -> Option<H> {
        self.content.take()
    }

    /// The attached container element.
    #[must_use]
    pub fn container(&self) -> Option<&H> {
        self.container.as_ref()
    }

    /// The attached content element.
    #[must_use]
    pub fn content(&self) -> Option<&H> {
        self.content.as_ref()
    }

    /// Measures both element slots now.
    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::measure(self.container.as_ref(), self.content.as_ref())
    }

    // --- lifecycle ---

    /// Schedules the mount-time bounds pass.
    ///
    /// The pass runs from [`tick`](Self::tick) once
    /// [`center_on_mount_delay`](PanZoomConfig::center_on_mount_delay) has
    /// elapsed, giving the renderer time for its first layout.
    pub fn mount(&mut self, now: u64) {
        if self.unmounted {
            return;
        }
        self.mount_due = Some(now.saturating_add(self.config.center_on_mount_delay));
    }

    /// Clears every pending timer and listener.
    ///
    /// After this the engine ignores all input and ticks.
    pub fn unmount(&mut self) {
        self.animation.cancel();
        self.mount_due = None;
        self.pinching = false;
        self.listeners.clear();
        self.unmounted = true;
        tracing::debug!("pan/zoom unmounted");
    }

    /// Returns `true` once [`unmount`](Self::unmount) has run.
    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: u64) {
        if self.unmounted {
            return;
        }
        if self.mount_due.is_some_and(|due| due <= now) {
            self.mount_due = None;
            self.mount_pass();
        }
        while let Some(fired) = self.animation.poll(now, self.pan) {
            if let Fired::Start { target } = fired {
                self.commit(target, self.zoom);
            }
        }
    }

    /// The earliest time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.mount_due, self.animation.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn mount_pass(&mut self) {
        self.pan_by(Vec2::ZERO);
        self.pending_center = Axes::empty();
        self.visible = true;
        tracing::debug!(x = self.pan.x, y = self.pan.y, "mount bounds pass");
    }

    // --- observation ---

    /// Registers a listener called after every committed change of pan or
    /// zoom.
    pub fn on_change(&mut self, listener: impl FnMut(&Transform) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Current pan in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current committed transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.pan, self.zoom)
    }

    /// Transform to draw at `now`.
    ///
    /// While a transition runs, pan is eased from where it started toward the
    /// committed value. Hosts with their own transition support (CSS, for
    /// instance) can use [`transform`](Self::transform) and
    /// [`animated`](Self::animated) instead.
    #[must_use]
    pub fn rendered_transform(&self, now: u64) -> Transform {
        match self.animation.transition() {
            Some(t) => Transform::new(t.sample(now), self.zoom),
            None => self.transform(),
        }
    }

    /// Current device classification.
    #[must_use]
    pub fn mouse_type(&self) -> MouseType {
        self.mouse_type
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn animated(&self) -> bool {
        self.animation.is_active()
    }

    /// Returns `true` once the content may be shown.
    ///
    /// With [`center_on_mount`](PanZoomConfig::center_on_mount) this stays
    /// `false` until the mount pass has clamped and centered the content.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Current state of the interaction state machine.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.animation.is_active() {
            InteractionState::Bounding
        } else if self.pinching {
            InteractionState::Pinching
        } else {
            InteractionState::Idle
        }
    }

    /// The valid pan rectangle at the current zoom, or `None` when panning is
    /// unbounded.
    #[must_use]
    pub fn pan_bounds(&self) -> Option<Rect> {
        self.config.is_pan_bounded.then(|| {
            PanBounds::new(self.zoom, &self.metrics(), self.config.pan_bound_padding).rect()
        })
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            transform: self.transform(),
            mouse_type: self.mouse_type,
            state: self.state(),
            animated: self.animated(),
            visible: self.visible,
            pending_correction: self.animation.pending_target(),
            next_deadline: self.next_deadline(),
            metrics: self.metrics(),
            pan_bounds: self.pan_bounds(),
        }
    }

    // --- gestures ---

    /// Handles a drag step.
    ///
    /// Content follows the pointer. Ignored for trackpads, whose two-finger
    /// pan already arrives as wheel input.
    pub fn on_drag(&mut self, event: DragEvent) {
        if self.mouse_type == MouseType::Trackpad {
            return;
        }
        tracing::trace!(dx = event.delta.x, dy = event.delta.y, "drag");
        self.pan_by(-event.delta);
    }

    /// Handles a wheel step.
    ///
    /// The device classifier decides the meaning: trackpad scrolls pan, mouse
    /// wheel notches zoom about the pointer. Ignored while pinching or while
    /// no container is attached.
    pub fn on_wheel(&mut self, event: WheelEvent, now: u64) {
        if self.unmounted || self.pinching {
            return;
        }
        let Some(origin) = self.pointer_origin(event.client) else {
            return;
        };

        let kind = self
            .classifier
            .classify(&event.raw, self.mouse_type, self.config.force_mouse_type);
        if kind != self.mouse_type {
            tracing::debug!(from = ?self.mouse_type, to = ?kind, "device reclassified");
            self.mouse_type = kind;
        }
        tracing::trace!(dx = event.delta.x, dy = event.delta.y, ?kind, "wheel");

        match kind {
            MouseType::Trackpad => self.pan_by(event.delta),
            MouseType::Mouse => self.zoom_by_delta(event.delta.y, origin, now),
            MouseType::Touchscreen => {}
        }
    }

    /// Marks the start of a pinch; wheel input is suppressed until
    /// [`on_pinch_end`](Self::on_pinch_end).
    pub fn on_pinch_start(&mut self) {
        if !self.unmounted {
            self.pinching = true;
        }
    }

    /// Handles a pinch update by zooming about the pinch midpoint.
    pub fn on_pinch(&mut self, event: PinchEvent, now: u64) {
        if self.unmounted {
            return;
        }
        let Some(origin) = self.pointer_origin(event.origin) else {
            return;
        };
        tracing::trace!(
            direction = event.direction,
            distance = event.distance,
            "pinch"
        );
        self.zoom_by_delta(-event.direction * event.distance, origin, now);
    }

    /// Marks the end of a pinch.
    pub fn on_pinch_end(&mut self) {
        self.pinching = false;
    }

    // --- imperative API ---

    /// Moves to `pan` (or the initial pan) with a transition.
    ///
    /// The target is clamped into bounds. Any pending correction is dropped,
    /// and [`animated`](Self::animated) stays set for one transition.
    pub fn set_pan(&mut self, pan: Option<Vec2>, now: u64) {
        if self.unmounted {
            return;
        }
        let target = pan.unwrap_or_else(|| self.config.initial_pan_or_zero());
        let bounded = self.bound_pan(target, self.zoom);
        self.animation
            .begin(self.pan, bounded, now, self.config.transition_duration);
        self.commit(bounded, self.zoom);
    }

    /// Zooms to `zoom` (or the initial zoom) about the viewport center.
    ///
    /// The value is clamped when zoom is bounded. A non-finite value or a
    /// non-positive result is ignored. Like a wheel zoom, the change is
    /// immediate and an out-of-bounds pan is corrected after
    /// [`pan_bound_delay`](PanZoomConfig::pan_bound_delay).
    pub fn set_zoom(&mut self, zoom: Option<f64>, now: u64) {
        if self.unmounted {
            return;
        }
        let requested = zoom.unwrap_or(self.config.initial_zoom);
        if !requested.is_finite() {
            return;
        }
        let next = self.config.clamp_zoom(requested);
        if next <= 0.0 {
            return;
        }
        let center = self.metrics().container_size().to_vec2() / 2.0;
        let origin = ((center - self.pan) / self.zoom).to_point();
        self.animation.cancel();
        self.apply_zoom(next, origin, now);
    }

    /// Zooms in by `step` (default [`DEFAULT_ZOOM_STEP`]).
    pub fn zoom_in(&mut self, step: Option<f64>, now: u64) {
        let step = step.unwrap_or(DEFAULT_ZOOM_STEP);
        self.set_zoom(Some(self.zoom + step), now);
    }

    /// Zooms out by `step` (default [`DEFAULT_ZOOM_STEP`]).
    pub fn zoom_out(&mut self, step: Option<f64>, now: u64) {
        let step = step.unwrap_or(DEFAULT_ZOOM_STEP);
        self.set_zoom(Some(self.zoom - step), now);
    }

    /// Restores the initial zoom.
    pub fn reset_zoom(&mut self, now: u64) {
        self.set_zoom(None, now);
    }

    /// Restores the initial pan.
    pub fn reset_pan(&mut self, now: u64) {
        self.set_pan(None, now);
    }

    /// Restores the initial zoom, then the initial pan.
    ///
    /// Zoom goes first so that the pan is clamped against the restored zoom.
    pub fn reset_pan_zoom(&mut self, now: u64) {
        self.reset_zoom(now);
        self.reset_pan(now);
    }

    // --- internals ---

    /// Content-local point under a client-space position.
    fn pointer_origin(&self, client: Point) -> Option<Point> {
        let rect = self.container.as_ref()?.client_rect();
        let local = client - rect.origin() - self.pan;
        Some((local / self.zoom).to_point())
    }

    /// Applies `pan -= delta`, clamped. Ignored while a transition runs.
    fn pan_by(&mut self, delta: Vec2) {
        if self.unmounted || self.animation.is_active() {
            return;
        }
        self.animation.cancel();
        let next = self.bound_pan(self.pan - delta, self.zoom);
        self.commit(next, self.zoom);
    }

    /// Gesture zoom: one step of `zoom_strength` in the direction of `delta`.
    fn zoom_by_delta(&mut self, delta: f64, origin: Point, now: u64) {
        if self.animation.is_active() {
            return;
        }
        self.animation.cancel();
        let next = self
            .config
            .clamp_zoom(self.zoom * (1.0 - sign(delta) * self.config.zoom_strength));
        self.apply_zoom(next, origin, now);
    }

    /// Writes the zoom about `origin` unclamped, then schedules a correction
    /// if the new pan is out of bounds.
    fn apply_zoom(&mut self, next_zoom: f64, origin: Point, now: u64) {
        let next_pan = zoom_adjusted_pan(self.pan, origin, self.zoom, next_zoom);
        self.commit(next_pan, next_zoom);

        let bounded = self.bound_pan(next_pan, next_zoom);
        if bounded != next_pan {
            self.animation.schedule_correction(
                bounded,
                now,
                self.config.pan_bound_delay,
                self.config.transition_duration,
            );
        }
    }

    fn bound_pan(&mut self, candidate: Vec2, zoom: f64) -> Vec2 {
        if !self.config.is_pan_bounded {
            return candidate;
        }
        let bounds = PanBounds::new(zoom, &self.metrics(), self.config.pan_bound_padding);
        let out = bounds.bound(candidate, self.pending_center);
        self.pending_center.remove(out.centered);
        out.pan
    }

    fn commit(&mut self, pan: Vec2, zoom: f64) {
        if pan == self.pan && zoom == self.zoom {
            return;
        }
        self.pan = pan;
        self.zoom = zoom;
        tracing::trace!(x = pan.x, y = pan.y, zoom, "transform committed");
        let transform = Transform::new(pan, zoom);
        for (_, listener) in &mut self.listeners {
            listener(&transform);
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for PanZoom<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoom")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("content", &self.content)
            .field("pan", &self.pan)
            .field("zoom", &self.zoom)
            .field("mouse_type", &self.mouse_type)
            .field("classifier", &self.classifier)
            .field("animation", &self.animation)
            .field("pinching", &self.pinching)
            .field("pending_center", &self.pending_center)
            .field("visible", &self.visible)
            .field("mount_due", &self.mount_due)
            .field("unmounted", &self.unmounted)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`PanZoom`] state.
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Committed transform.
    pub transform: Transform,
    /// Current device classification.
    pub mouse_type: MouseType,
    /// Interaction state.
    pub state: InteractionState,
    /// Whether a transition is running.
    pub animated: bool,
    /// Whether the content may be shown.
    pub visible: bool,
    /// Target of a correction waiting for its delay, if any.
    pub pending_correction: Option<Vec2>,
    /// Earliest pending timer.
    pub next_deadline: Option<u64>,
    /// Element measurements at snapshot time.
    pub metrics: ViewportMetrics,
    /// Valid pan rectangle, when panning is bounded.
    pub pan_bounds: Option<Rect>,
}
