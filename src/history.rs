//! Undo history: a bounded stack of full scene snapshots.
//!
//! DESIGN
//! ======
//! The top of the stack always mirrors the committed scene. Pushing appends a
//! copy of the scene and evicts the oldest entry once the bound is exceeded.
//! Undo drops the top and restores the entry beneath it. There is no redo.
//!
//! Undoing at the floor (one entry left) clears a non-empty scene and resets
//! the stack to a single empty snapshot, so "undo past the beginning" acts as
//! clear rather than doing nothing. With an empty scene it is a no-op.
//!
//! Snapshots are owned copies: later edits to the live scene never reach
//! stored entries, and restoring copies out of the stack again.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::scene::{Element, Scene};

/// What an [`History::undo`] call did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The scene was restored from the previous snapshot.
    Restored,
    /// Nothing left to step back to; the scene was cleared.
    Cleared,
    /// Nothing to undo and nothing to clear.
    Unchanged,
}

/// Bounded stack of scene snapshots.
#[derive(Debug, Clone)]
pub struct History {
    stack: VecDeque<Vec<Element>>,
    capacity: usize,
}

impl History {
    /// A history holding `capacity` snapshots (at least one), seeded with an
    /// empty-scene snapshot.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        // Grows on demand; `capacity` comes from host config and may be huge.
        let mut stack = VecDeque::new();
        stack.push_back(Vec::new());
        Self { stack, capacity }
    }

    /// Record the current scene as the newest snapshot.
    pub fn push(&mut self, scene: &Scene) {
        self.stack.push_back(scene.elements().to_vec());
        if self.stack.len() > self.capacity {
            self.stack.pop_front();
            trace!(capacity = self.capacity, "evicted oldest snapshot");
        }
        debug!(depth = self.stack.len(), elements = scene.len(), "snapshot pushed");
    }

    /// Step the scene back one snapshot.
    pub fn undo(&mut self, scene: &mut Scene) -> UndoOutcome {
        if self.stack.len() > 1 {
            self.stack.pop_back();
            if let Some(previous) = self.latest() {
                scene.replace_all(previous);
            }
            debug!(depth = self.stack.len(), "undo restored snapshot");
            return UndoOutcome::Restored;
        }
        if scene.is_empty() {
            return UndoOutcome::Unchanged;
        }
        scene.clear();
        self.reset();
        debug!("undo at floor cleared scene");
        UndoOutcome::Cleared
    }

    /// Drop every snapshot and start over from a single empty one.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push_back(Vec::new());
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Maximum number of snapshots held.
    #[cfg(test)]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The newest snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&[Element]> {
        self.stack.back().map(Vec::as_slice)
    }

    /// Snapshots from oldest to newest.
    #[cfg(test)]
    pub fn snapshots(&self) -> impl Iterator<Item = &[Element]> {
        self.stack.iter().map(Vec::as_slice)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::consts::HISTORY_DEPTH)
    }
}
