//! Headless harness for programmatic drawing.
//!
//! Wires the editor, canvas, and stroke capture together the way a GUI
//! front end would, so tests and the command REPL can drive the system
//! without one. Strokes go through the same capture pipeline as
//! interactive input, including the preview and jitter filtering.

use shared::{Color, Paint, Point2D, DEFAULT_COLOR, DEFAULT_THICKNESS};

use crate::action::Action;
use crate::capture::{PointerEvent, StrokeCapture};
use crate::editor::{Editor, DEFAULT_HISTORY_SIZE};
use crate::error::ActionResult;
use crate::surface::{Canvas, Surface};

/// Editor, canvas, and capture in one place
pub struct TestHarness {
    pub editor: Editor<Canvas>,
    pub capture: StrokeCapture,
}

impl TestHarness {
    /// Harness with the default history capacity and startup brush
    pub fn new() -> Self {
        Self::with_history(DEFAULT_HISTORY_SIZE)
    }

    /// Harness keeping up to `capacity` undo entries
    pub fn with_history(capacity: usize) -> Self {
        let mut canvas = Canvas::new();
        // Startup brush, same as the interactive defaults
        *canvas.current_paint_mut() = Paint::new(DEFAULT_COLOR, DEFAULT_THICKNESS);
        Self {
            editor: Editor::with_capacity(canvas, capacity),
            capture: StrokeCapture::new(),
        }
    }

    // ── Drawing ───────────────────────────────────────────

    /// Feeds one pointer event; commits the stroke it completes, if
    /// any. Returns whether a stroke was committed.
    pub fn pointer(&mut self, event: PointerEvent) -> ActionResult<bool> {
        let completed = self.capture.handle_event(self.editor.surface_mut(), event)?;
        match completed {
            Some(action) => {
                self.editor.commit(action)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Draws a whole stroke through the capture pipeline. Returns
    /// whether a stroke was committed.
    pub fn stroke(&mut self, points: &[Point2D]) -> ActionResult<bool> {
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return Ok(false),
        };
        self.pointer(PointerEvent::Down(first.clone()))?;
        for point in rest {
            self.pointer(PointerEvent::Move(point.clone()))?;
        }
        let end = points.last().cloned().unwrap_or_else(|| first.clone());
        self.pointer(PointerEvent::Up(end))
    }

    // ── Brush ─────────────────────────────────────────────

    pub fn set_color(&mut self, color: Color) -> ActionResult {
        self.editor.commit(Action::change_color(color))
    }

    pub fn set_thickness(&mut self, thickness: f64) -> ActionResult {
        self.editor.commit(Action::change_thickness(thickness)?)
    }

    pub fn erase(&mut self) -> ActionResult {
        self.editor.commit(Action::erase())
    }

    pub fn clear_canvas(&mut self) -> ActionResult {
        self.editor.commit(Action::clear_canvas())
    }

    // ── History ───────────────────────────────────────────

    pub fn undo(&mut self) -> ActionResult<bool> {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> ActionResult<bool> {
        self.editor.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    // ── Inspection ────────────────────────────────────────

    pub fn renderable_count(&self) -> usize {
        self.editor.surface().renderable_count()
    }

    pub fn current_color(&self) -> Color {
        self.editor.surface().current_paint().color
    }

    pub fn current_thickness(&self) -> f64 {
        self.editor.surface().current_paint().thickness
    }

    pub fn undo_len(&self) -> usize {
        self.editor.history().undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.editor.history().redo_len()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
