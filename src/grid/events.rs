//! Visual-state notifications from the grid to the renderer
//!
//! The grid decides walkable vs. blocked; appearance (materials, tinting)
//! belongs to the rendering collaborator. Changes flow through a
//! double-buffered queue so the renderer sees a frame-consistent batch:
//! events pushed during frame N are readable during frame N+1.

use std::collections::VecDeque;

/// Desired visual state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileVisual {
    /// Traversable appearance
    Walkable,
    /// Wall/obstacle appearance
    Blocked,
}

/// Notifications emitted by the grid.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum GridEvent {
    /// A tile's walkability changed and its appearance should follow.
    TileVisual {
        /// Grid x coordinate
        x: i32,
        /// Grid y coordinate
        y: i32,
        /// Appearance to apply
        visual: TileVisual,
    },
}

/// Double-buffered queue of [`GridEvent`]s.
///
/// `push` writes to the pending buffer; `swap` at the frame boundary makes
/// pending events visible to `iter`/`drain`.
#[derive(Debug, Default)]
pub struct GridEvents {
    /// Events written this frame
    pending: VecDeque<GridEvent>,
    /// Events from the previous frame, ready for processing
    processing: VecDeque<GridEvent>,
}

impl GridEvents {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event to be processed next frame.
    #[inline]
    pub fn push(&mut self, event: GridEvent) {
        self.pending.push_back(event);
    }

    /// Swap pending and processing buffers. Call once per frame.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.processing);
        self.pending.clear();
    }

    /// Iterate events from the previous frame.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &GridEvent> {
        self.processing.iter()
    }

    /// Drain events from the previous frame, taking ownership.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = GridEvent> + '_ {
        self.processing.drain(..)
    }

    /// Number of events ready for processing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processing.len()
    }

    /// Whether there are no events ready for processing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processing.is_empty()
    }

    /// Number of events waiting for the next swap.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Discard everything in both buffers.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.processing.clear();
    }
}
