use kurbo::{BezPath, Shape};
use shared::{Paint, RenderableId};

use crate::error::{ActionError, ActionResult};
use crate::surface::Surface;

use super::ActionState;

/// Reversible action that renders a stroke on the surface.
///
/// The paint is snapshotted at construction so later changes to the
/// live brush cannot alter a recorded stroke. The render handle
/// produced by apply doubles as the applied state: holding one means
/// the stroke is on the surface.
#[derive(Debug, Clone)]
pub struct StrokeAction {
    path: BezPath,
    paint: Paint,
    renderable: Option<RenderableId>,
}

impl StrokeAction {
    /// Creates an action that renders `path` with `paint`.
    ///
    /// Fails with [`ActionError::EmptyStroke`] when the path has no
    /// elements.
    pub fn new(path: BezPath, paint: Paint) -> ActionResult<Self> {
        if path.elements().is_empty() {
            return Err(ActionError::EmptyStroke);
        }
        Ok(Self {
            path,
            paint,
            renderable: None,
        })
    }

    pub fn state(&self) -> ActionState {
        match self.renderable {
            Some(_) => ActionState::Applied,
            None => ActionState::NotApplied,
        }
    }

    /// Renders the stroke on the surface.
    pub fn apply(&mut self, surface: &mut dyn Surface) -> ActionResult {
        if self.renderable.is_some() {
            return Err(ActionError::AlreadyApplied(self.describe()));
        }
        let id = surface.add_renderable(self.path.clone(), self.paint);
        self.renderable = Some(id);
        Ok(())
    }

    /// De-renders the stroke.
    ///
    /// Fails with [`ActionError::MissingRenderable`] when the handle is
    /// no longer on the surface. The stroke is left not applied either
    /// way so it can be re-applied.
    pub fn reverse(&mut self, surface: &mut dyn Surface) -> ActionResult {
        let id = match self.renderable.take() {
            Some(id) => id,
            None => return Err(ActionError::NotApplied(self.describe())),
        };
        if !surface.remove_renderable(&id) {
            return Err(ActionError::MissingRenderable(id));
        }
        Ok(())
    }

    /// Pushes the current path to the live renderable so the surface
    /// redraws it. Used while the path is still growing; a no-op when
    /// the stroke is not applied.
    pub fn invalidate(&self, surface: &mut dyn Surface) {
        if let Some(id) = &self.renderable {
            surface.invalidate_renderable(id, &self.path);
        }
    }

    pub fn describe(&self) -> String {
        let bounds = self.path.bounding_box();
        format!(
            "draw stroke of {} segments within {:.1}x{:.1}",
            self.path.segments().count(),
            bounds.width(),
            bounds.height()
        )
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Handle of the live renderable while applied
    pub fn renderable(&self) -> Option<&RenderableId> {
        self.renderable.as_ref()
    }

    /// Path access for the capture loop while the stroke is still being
    /// drawn
    pub(crate) fn path_mut(&mut self) -> &mut BezPath {
        &mut self.path
    }
}
