//! Error types for action construction and replay.

use shared::RenderableId;

/// Result alias used throughout the engine
pub type ActionResult<T = ()> = Result<T, ActionError>;

/// Errors raised when constructing, applying, or reversing actions
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Apply was called on an action that is already applied
    AlreadyApplied(String),
    /// Reverse was called on an action that has not been applied
    NotApplied(String),
    /// Stroke thickness must be strictly positive
    InvalidThickness(f64),
    /// A stroke needs at least one path segment
    EmptyStroke,
    /// The render handle held by a stroke is gone from the surface
    MissingRenderable(RenderableId),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::AlreadyApplied(action) => {
                write!(f, "action already applied: {}", action)
            }
            ActionError::NotApplied(action) => {
                write!(f, "action has not been applied: {}", action)
            }
            ActionError::InvalidThickness(value) => {
                write!(f, "thickness must be positive, got {}", value)
            }
            ActionError::EmptyStroke => write!(f, "stroke path has no segments"),
            ActionError::MissingRenderable(id) => {
                write!(f, "renderable {} not found on the surface", id)
            }
        }
    }
}

impl std::error::Error for ActionError {}
