//! Drawing surface size and deferred resize handling.
//!
//! The engine never measures the page itself. After a layout-affecting UI
//! change it asks the host to re-measure after a fixed delay; a measurement of
//! zero width or height means the surface is not laid out yet, and the host is
//! asked to try again on the next frame until a real size arrives.
//!
//! Element coordinates are absolute surface pixels and are not rescaled when
//! the surface changes size.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use tracing::{debug, trace};

/// Current drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Result of feeding a measurement to [`Viewport::measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The size was accepted; redraw.
    Redraw,
    /// The surface is not laid out yet; measure again after `delay_ms`.
    Retry { delay_ms: u64 },
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the surface has a drawable size.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Accept a host measurement unless either dimension is zero.
    pub fn measure(&mut self, width: f64, height: f64) -> ResizeOutcome {
        if !(width > 0.0 && height > 0.0) {
            trace!(width, height, "surface not laid out; retrying next frame");
            return ResizeOutcome::Retry { delay_ms: 0 };
        }
        if (width, height) != (self.width, self.height) {
            debug!(width, height, "surface resized");
        }
        *self = Self::new(width, height);
        ResizeOutcome::Redraw
    }
}
