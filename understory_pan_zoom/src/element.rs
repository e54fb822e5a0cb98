// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to the rendering side: two measured boxes.

use kurbo::{Rect, Size};

/// A measurable element owned by the renderer.
///
/// The engine reads these on every bounds computation and never caches them,
/// so a handle may return values that lag one frame behind layout.
///
/// Shared references to a handle are handles too, so an engine can borrow
/// elements the host keeps elsewhere:
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_pan_zoom::{FixedElement, PanZoom, PanZoomConfig};
///
/// let container = FixedElement::container(Rect::new(10.0, 20.0, 810.0, 620.0));
/// let content = FixedElement::content(Size::new(400.0, 300.0));
///
/// let mut pz: PanZoom<&FixedElement> = PanZoom::new(PanZoomConfig::default(), false).unwrap();
/// pz.attach_container(&container);
/// pz.attach_content(&content);
/// assert_eq!(pz.metrics().container_size(), Size::new(800.0, 600.0));
/// assert_eq!(pz.metrics().content, Size::new(400.0, 300.0));
/// ```
pub trait ElementHandle {
    /// The element's visible box in client coordinates.
    ///
    /// For the container, the origin anchors pointer positions and the size is
    /// the viewport size.
    fn client_rect(&self) -> Rect;

    /// The full, unscaled size of the element's scrollable content.
    ///
    /// Read from the content element.
    fn scroll_size(&self) -> Size;
}

/// An [`ElementHandle`] with fixed, caller-provided measurements.
///
/// Useful for headless hosts that already know their layout, and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FixedElement {
    /// Value returned by [`ElementHandle::client_rect`].
    pub rect: Rect,
    /// Value returned by [`ElementHandle::scroll_size`].
    pub scroll: Size,
}

impl FixedElement {
    /// A container at `rect` in client coordinates.
    #[must_use]
    pub fn container(rect: Rect) -> Self {
        Self {
            rect,
            scroll: rect.size(),
        }
    }

    /// A content box of the given unscaled size.
    #[must_use]
    pub fn content(size: Size) -> Self {
        Self {
            rect: size.to_rect(),
            scroll: size,
        }
    }
}

impl ElementHandle for FixedElement {
    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn scroll_size(&self) -> Size {
        self.scroll
    }
}

impl<H: ElementHandle + ?Sized> ElementHandle for &H {
    fn client_rect(&self) -> Rect {
        (**self).client_rect()
    }

    fn scroll_size(&self) -> Size {
        (**self).scroll_size()
    }
}

/// Sizes read from the two element slots at one point in time.
///
/// Unattached slots read as zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Container box in client coordinates.
    pub container: Rect,
    /// Unscaled content size.
    pub content: Size,
}

impl ViewportMetrics {
    /// Metrics for a container of `container` size at the client origin.
    #[must_use]
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container: container.to_rect(),
            content,
        }
    }

    /// Reads both slots.
    #[must_use]
    pub fn measure<H: ElementHandle>(container: Option<&H>, content: Option<&H>) -> Self {
        Self {
            container: container.map_or(Rect::ZERO, H::client_rect),
            content: content.map_or(Size::ZERO, H::scroll_size),
        }
    }

    /// Size of the container.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container.size()
    }
}
