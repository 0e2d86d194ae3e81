//! Viewport geometry collaborator.
//!
//! The host window can be resized at any time, so the simulation never caches
//! the size: it asks its [`Viewport`] each time it spawns or culls.

use std::sync::{Arc, RwLock};

use crate::Point;

/// Width and height of the visible area in screen units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width:  f64,
    pub height: f64,
}

impl ViewportSize {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` while `p` lies within the viewport grown by `margin` on every
    /// side.  Bounds are inclusive.
    #[inline]
    pub fn contains_with_margin(&self, p: Point, margin: f64) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

/// Live accessor for the current viewport size.
pub trait Viewport {
    fn size(&self) -> ViewportSize;
}

/// A fixed-size viewport.
impl Viewport for ViewportSize {
    #[inline]
    fn size(&self) -> ViewportSize {
        *self
    }
}

/// A viewport whose size can change between ticks.
///
/// Clones share state: the host keeps one handle to call [`resize`] on and
/// the simulation reads through another.
///
/// [`resize`]: SharedViewport::resize
#[derive(Clone, Debug)]
pub struct SharedViewport {
    inner: Arc<RwLock<ViewportSize>>,
}

impl SharedViewport {
    pub fn new(size: ViewportSize) -> Self {
        Self { inner: Arc::new(RwLock::new(size)) }
    }

    pub fn resize(&self, size: ViewportSize) {
        match self.inner.write() {
            Ok(mut guard) => *guard = size,
            Err(poisoned) => *poisoned.into_inner() = size,
        }
    }
}

impl Viewport for SharedViewport {
    fn size(&self) -> ViewportSize {
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
