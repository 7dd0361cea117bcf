//! Undo/redo history: two bounded stacks of reversible actions.

use std::collections::VecDeque;
use std::fmt;

use crate::action::ReversibleAction;

/// Bounded double-stack history.
///
/// Applied actions are pushed on the undo stack. Undoing transfers the
/// top entry to the redo stack and redoing transfers it back, so the
/// combined size never grows during transfers. The undo stack is
/// capacity-limited: pushing beyond capacity evicts the oldest entry
/// for good. The redo stack is never evicted directly; it is cleared
/// wholesale whenever a new action is recorded.
///
/// History only manages ordering and ownership. It never applies or
/// reverses anything itself: [`undo`](StackHistory::undo) and
/// [`redo`](StackHistory::redo) hand the transferred action to the
/// caller, who replays it against the surface.
#[derive(Debug)]
pub struct StackHistory {
    undo_stack: VecDeque<ReversibleAction>,
    redo_stack: VecDeque<ReversibleAction>,
    capacity: usize,
}

impl StackHistory {
    /// Creates empty stacks keeping up to `capacity` undo entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be at least 1");
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records a freshly applied action.
    ///
    /// Evicts the oldest recorded action when the undo stack is full,
    /// and clears the redo stack: recording anything new invalidates
    /// everything that was undone.
    pub fn add_action(&mut self, action: ReversibleAction) {
        if self.undo_stack.len() >= self.capacity {
            if let Some(evicted) = self.undo_stack.pop_back() {
                tracing::debug!("history full, evicting: {}", evicted.describe());
            }
        }
        self.undo_stack.push_front(action);
        self.redo_stack.clear();
    }

    /// Moves the most recently applied action to the redo stack and
    /// returns it so the caller can reverse it. `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<&mut ReversibleAction> {
        let action = self.undo_stack.pop_front()?;
        self.redo_stack.push_front(action);
        self.redo_stack.front_mut()
    }

    /// Moves the most recently undone action back to the undo stack and
    /// returns it so the caller can apply it again. `None` when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<&mut ReversibleAction> {
        let action = self.redo_stack.pop_front()?;
        self.undo_stack.push_front(action);
        self.undo_stack.front_mut()
    }

    /// Drops both stacks
    pub fn clear(&mut self) {
        tracing::debug!("clearing history ({})", self);
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recently applied action, without transferring it
    pub fn peek_undo(&self) -> Option<&ReversibleAction> {
        self.undo_stack.front()
    }

    /// Most recently undone action, without transferring it
    pub fn peek_redo(&self) -> Option<&ReversibleAction> {
        self.redo_stack.front()
    }
}

impl fmt::Display for StackHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "undo size: {}, redo size: {}",
            self.undo_stack.len(),
            self.redo_stack.len()
        )
    }
}
