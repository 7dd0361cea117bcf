use crate::surface::Surface;

/// Non-reversible action that wipes every renderable off the surface.
///
/// There is no captured delta and no way back. Committing this through
/// the editor clears the whole undo/redo history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCanvasAction;

impl ClearCanvasAction {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.clear_renderables();
    }

    pub fn describe(&self) -> String {
        "clear canvas".to_string()
    }
}
