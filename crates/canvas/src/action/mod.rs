//! Drawing actions.
//!
//! Every user operation on the canvas is a value in this module. Apply
//! it once and, for the reversible kinds, reverse it later to restore
//! exactly the state captured at apply time. The editor records
//! reversible actions in history; committing a non-reversible action
//! wipes history instead, because nothing can be undone past it.

mod clear;
mod paint;
mod stroke;

pub use clear::ClearCanvasAction;
pub use paint::{ChangeColorAction, ChangeThicknessAction, EraseAction};
pub use stroke::StrokeAction;

use kurbo::BezPath;
use shared::{Color, Paint};

use crate::error::ActionResult;
use crate::surface::Surface;

/// Whether a reversible action has been applied.
///
/// Apply is only legal from `NotApplied` and reverse only from
/// `Applied`; breaking that order is a programming error reported as an
/// invalid-state [`ActionError`](crate::error::ActionError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    NotApplied,
    Applied,
}

/// Any committable operation on the drawing surface
#[derive(Debug, Clone)]
pub enum Action {
    Reversible(ReversibleAction),
    ClearCanvas(ClearCanvasAction),
}

impl Action {
    /// Stroke rendering `path` with a snapshot of `paint`
    pub fn stroke(path: BezPath, paint: Paint) -> ActionResult<Self> {
        Ok(ReversibleAction::Stroke(StrokeAction::new(path, paint)?).into())
    }

    pub fn change_color(color: Color) -> Self {
        ReversibleAction::ChangeColor(ChangeColorAction::new(color)).into()
    }

    pub fn change_thickness(thickness: f64) -> ActionResult<Self> {
        Ok(ReversibleAction::ChangeThickness(ChangeThicknessAction::new(thickness)?).into())
    }

    pub fn erase() -> Self {
        ReversibleAction::Erase(EraseAction::new()).into()
    }

    pub fn clear_canvas() -> Self {
        Action::ClearCanvas(ClearCanvasAction::new())
    }

    /// Whether committing this action is recorded in history
    pub fn is_reversible(&self) -> bool {
        matches!(self, Action::Reversible(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Action::Reversible(action) => action.describe(),
            Action::ClearCanvas(action) => action.describe(),
        }
    }
}

impl From<ReversibleAction> for Action {
    fn from(action: ReversibleAction) -> Self {
        Action::Reversible(action)
    }
}

/// An action that can also undo its own effect
#[derive(Debug, Clone)]
pub enum ReversibleAction {
    Stroke(StrokeAction),
    ChangeColor(ChangeColorAction),
    ChangeThickness(ChangeThicknessAction),
    Erase(EraseAction),
}

impl ReversibleAction {
    /// Applies the action to the surface, capturing whatever the
    /// variant needs to reverse itself later.
    pub fn apply(&mut self, surface: &mut dyn Surface) -> ActionResult {
        match self {
            ReversibleAction::Stroke(action) => action.apply(surface)?,
            ReversibleAction::ChangeColor(action) => action.apply(surface)?,
            ReversibleAction::ChangeThickness(action) => action.apply(surface)?,
            ReversibleAction::Erase(action) => action.apply(surface)?,
        }
        tracing::debug!("applied: {}", self.describe());
        Ok(())
    }

    /// Restores the state captured when the action was applied.
    pub fn reverse(&mut self, surface: &mut dyn Surface) -> ActionResult {
        match self {
            ReversibleAction::Stroke(action) => action.reverse(surface)?,
            ReversibleAction::ChangeColor(action) => action.reverse(surface)?,
            ReversibleAction::ChangeThickness(action) => action.reverse(surface)?,
            ReversibleAction::Erase(action) => action.reverse(surface)?,
        }
        tracing::debug!("reversed: {}", self.describe());
        Ok(())
    }

    pub fn state(&self) -> ActionState {
        match self {
            ReversibleAction::Stroke(action) => action.state(),
            ReversibleAction::ChangeColor(action) => action.state(),
            ReversibleAction::ChangeThickness(action) => action.state(),
            ReversibleAction::Erase(action) => action.state(),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.state() == ActionState::Applied
    }

    /// Human-readable name and parameters, for logs and observers
    pub fn describe(&self) -> String {
        match self {
            ReversibleAction::Stroke(action) => action.describe(),
            ReversibleAction::ChangeColor(action) => action.describe(),
            ReversibleAction::ChangeThickness(action) => action.describe(),
            ReversibleAction::Erase(action) => action.describe(),
        }
    }

    /// The stroke behind this action, when it is one
    pub fn as_stroke(&self) -> Option<&StrokeAction> {
        match self {
            ReversibleAction::Stroke(action) => Some(action),
            _ => None,
        }
    }
}
