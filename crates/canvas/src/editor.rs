//! Editor façade: applies committed actions to the surface, records
//! them in history, and replays them on undo/redo.

use crate::action::{Action, ReversibleAction};
use crate::error::ActionResult;
use crate::history::StackHistory;
use crate::surface::Surface;

/// Default number of history entries an editor keeps
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Handle returned on observer registration, used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ObserverFn = Box<dyn FnMut(&ReversibleAction)>;

struct Observer {
    id: ObserverId,
    callback: ObserverFn,
}

/// Drawing editor owning the surface and the undo/redo history.
///
/// All mutations flow through [`commit`](Editor::commit),
/// [`undo`](Editor::undo), and [`redo`](Editor::redo). Observers are
/// notified after an action's effect has landed on the surface:
/// performed observers on commit and redo, undone observers on undo.
pub struct Editor<S: Surface> {
    surface: S,
    history: StackHistory,
    performed_observers: Vec<Observer>,
    undone_observers: Vec<Observer>,
    next_observer_id: u64,
}

impl<S: Surface> Editor<S> {
    /// Editor with the default history capacity
    pub fn new(surface: S) -> Self {
        Self::with_capacity(surface, DEFAULT_HISTORY_SIZE)
    }

    /// Editor keeping up to `capacity` history entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(surface: S, capacity: usize) -> Self {
        Self {
            surface,
            history: StackHistory::new(capacity),
            performed_observers: Vec::new(),
            undone_observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &StackHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies `action` to the surface and records it.
    ///
    /// Reversible actions go into history. A non-reversible action
    /// clears history instead, since nothing can be undone past it. On
    /// error the surface and history are left untouched.
    pub fn commit(&mut self, action: Action) -> ActionResult {
        match action {
            Action::Reversible(mut action) => {
                action.apply(&mut self.surface)?;
                tracing::debug!("before add: {}", self.history);
                self.history.add_action(action);
                tracing::debug!("after add: {}", self.history);
                if let Some(action) = self.history.peek_undo() {
                    notify(&mut self.performed_observers, action);
                }
            }
            Action::ClearCanvas(action) => {
                tracing::debug!("non-reversible commit: {}", action.describe());
                action.apply(&mut self.surface);
                self.history.clear();
            }
        }
        Ok(())
    }

    /// Reverses the most recently applied action.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> ActionResult<bool> {
        tracing::debug!("before undo: {}", self.history);
        let action = match self.history.undo() {
            Some(action) => action,
            None => {
                tracing::debug!("nothing to undo");
                return Ok(false);
            }
        };
        action.reverse(&mut self.surface)?;
        notify(&mut self.undone_observers, action);
        tracing::debug!("after undo: {}", self.history);
        Ok(true)
    }

    /// Re-applies the most recently undone action.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self) -> ActionResult<bool> {
        tracing::debug!("before redo: {}", self.history);
        let action = match self.history.redo() {
            Some(action) => action,
            None => {
                tracing::debug!("nothing to redo");
                return Ok(false);
            }
        };
        action.apply(&mut self.surface)?;
        notify(&mut self.performed_observers, action);
        tracing::debug!("after redo: {}", self.history);
        Ok(true)
    }

    /// Registers a callback invoked after an action is performed, on
    /// commit or redo. Returns a handle for deregistration.
    pub fn register_performed<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&ReversibleAction) + 'static,
    {
        let id = self.allocate_observer_id();
        self.performed_observers.push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Registers a callback invoked after an action is undone. Returns
    /// a handle for deregistration.
    pub fn register_undone<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&ReversibleAction) + 'static,
    {
        let id = self.allocate_observer_id();
        self.undone_observers.push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a performed observer. Returns whether it was registered.
    pub fn deregister_performed(&mut self, id: ObserverId) -> bool {
        remove_observer(&mut self.performed_observers, id)
    }

    /// Removes an undone observer. Returns whether it was registered.
    pub fn deregister_undone(&mut self, id: ObserverId) -> bool {
        remove_observer(&mut self.undone_observers, id)
    }

    fn allocate_observer_id(&mut self) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        id
    }
}

fn notify(observers: &mut [Observer], action: &ReversibleAction) {
    for observer in observers {
        (observer.callback)(action);
    }
}

fn remove_observer(observers: &mut Vec<Observer>, id: ObserverId) -> bool {
    match observers.iter().position(|o| o.id == id) {
        Some(index) => {
            observers.remove(index);
            true
        }
        None => false,
    }
}
