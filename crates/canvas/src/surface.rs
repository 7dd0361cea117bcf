//! Drawing surface abstraction and the in-memory canvas.
//!
//! Actions never talk to a concrete renderer. They go through the
//! [`Surface`] trait, which exposes the current brush plus a retained
//! set of renderables addressed by opaque string handles. [`Canvas`] is
//! the headless implementation used by the harness, the command REPL,
//! and the tests; a GUI front end would implement the same trait over
//! its scene graph.

use kurbo::BezPath;
use shared::{Paint, RenderableId};

/// Rendering collaborator for actions
pub trait Surface {
    /// Current brush used for new strokes
    fn current_paint(&self) -> &Paint;

    /// Mutable access to the current brush
    fn current_paint_mut(&mut self) -> &mut Paint;

    /// Adds a rendered stroke and returns its handle
    fn add_renderable(&mut self, path: BezPath, paint: Paint) -> RenderableId;

    /// Removes a rendered stroke. Returns false when the handle is
    /// unknown.
    fn remove_renderable(&mut self, id: &str) -> bool;

    /// Replaces the geometry of a live renderable and requests a
    /// redraw. Returns false when the handle is unknown.
    fn invalidate_renderable(&mut self, id: &str, path: &BezPath) -> bool;

    /// Removes every renderable
    fn clear_renderables(&mut self);
}

/// A rendered stroke retained by the canvas
#[derive(Debug, Clone)]
pub struct Renderable {
    pub id: RenderableId,
    pub path: BezPath,
    pub paint: Paint,
}

/// In-memory drawing surface.
///
/// Renderables are kept in insertion order, which is also stacking
/// order. The version counter increments on every visible mutation so
/// callers can cheaply detect that a redraw is needed.
#[derive(Debug, Default)]
pub struct Canvas {
    paint: Paint,
    renderables: Vec<Renderable>,
    version: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version, incremented on every visible mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    /// All renderables in stacking order
    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    /// Looks up a renderable by handle
    pub fn find_renderable(&self, id: &str) -> Option<&Renderable> {
        self.renderables.iter().find(|r| r.id == id)
    }
}

impl Surface for Canvas {
    fn current_paint(&self) -> &Paint {
        &self.paint
    }

    fn current_paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    fn add_renderable(&mut self, path: BezPath, paint: Paint) -> RenderableId {
        let id = uuid::Uuid::new_v4().to_string();
        self.renderables.push(Renderable {
            id: id.clone(),
            path,
            paint,
        });
        self.version += 1;
        id
    }

    fn remove_renderable(&mut self, id: &str) -> bool {
        match self.renderables.iter().position(|r| r.id == id) {
            Some(index) => {
                self.renderables.remove(index);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    fn invalidate_renderable(&mut self, id: &str, path: &BezPath) -> bool {
        match self.renderables.iter_mut().find(|r| r.id == id) {
            Some(renderable) => {
                renderable.path = path.clone();
                self.version += 1;
                true
            }
            None => false,
        }
    }

    fn clear_renderables(&mut self) {
        if self.renderables.is_empty() {
            return;
        }
        self.renderables.clear();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn line_path() -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 10.0));
        path
    }

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = Canvas::new();
        assert_eq!(canvas.renderable_count(), 0);
        assert_eq!(canvas.version(), 0);
        assert_eq!(*canvas.current_paint(), Paint::default());
    }

    #[test]
    fn test_add_and_find_renderable() {
        let mut canvas = Canvas::new();
        let id = canvas.add_renderable(line_path(), Paint::default());

        assert_eq!(canvas.renderable_count(), 1);
        let renderable = canvas.find_renderable(&id).unwrap();
        assert_eq!(renderable.id, id);
        assert_eq!(renderable.path.elements().len(), 2);
    }

    #[test]
    fn test_remove_renderable() {
        let mut canvas = Canvas::new();
        let id = canvas.add_renderable(line_path(), Paint::default());

        assert!(canvas.remove_renderable(&id));
        assert_eq!(canvas.renderable_count(), 0);
        assert!(!canvas.remove_renderable(&id));
    }

    #[test]
    fn test_remove_preserves_stacking_order() {
        let mut canvas = Canvas::new();
        let first = canvas.add_renderable(line_path(), Paint::default());
        let second = canvas.add_renderable(line_path(), Paint::default());
        let third = canvas.add_renderable(line_path(), Paint::default());

        assert!(canvas.remove_renderable(&second));
        let order: Vec<_> = canvas.renderables().iter().map(|r| r.id.clone()).collect();
        assert_eq!(order, vec![first, third]);
    }

    #[test]
    fn test_invalidate_replaces_path() {
        let mut canvas = Canvas::new();
        let id = canvas.add_renderable(line_path(), Paint::default());

        let mut longer = line_path();
        longer.line_to(Point::new(20.0, 0.0));
        assert!(canvas.invalidate_renderable(&id, &longer));
        assert_eq!(canvas.find_renderable(&id).unwrap().path.elements().len(), 3);

        assert!(!canvas.invalidate_renderable("no-such-id", &longer));
    }

    #[test]
    fn test_version_counts_visible_mutations() {
        let mut canvas = Canvas::new();
        let id = canvas.add_renderable(line_path(), Paint::default());
        assert_eq!(canvas.version(), 1);

        canvas.invalidate_renderable(&id, &line_path());
        assert_eq!(canvas.version(), 2);

        canvas.remove_renderable(&id);
        assert_eq!(canvas.version(), 3);

        // Clearing an empty canvas changes nothing visible
        canvas.clear_renderables();
        assert_eq!(canvas.version(), 3);
    }

    #[test]
    fn test_clear_renderables() {
        let mut canvas = Canvas::new();
        canvas.add_renderable(line_path(), Paint::default());
        canvas.add_renderable(line_path(), Paint::default());

        canvas.clear_renderables();
        assert_eq!(canvas.renderable_count(), 0);
        assert_eq!(canvas.version(), 3);
    }
}
