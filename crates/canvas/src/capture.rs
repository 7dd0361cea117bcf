//! Stroke capture: turns raw pointer events into committed strokes.
//!
//! The capture tracks one stroke at a time. On pointer-down it
//! snapshots the current paint and applies a pre-commit buffer stroke
//! to the surface as a live preview. Moves extend the buffer's path
//! with quadratic smoothing segments and invalidate the preview so the
//! surface redraws it. Pointer-up de-renders the preview and hands the
//! finished action back for commit; cancel, or a stroke that never
//! travelled [`MIN_MOVE_DIST`], discards the buffer without touching
//! history.

use kurbo::{BezPath, Point};
use shared::Point2D;

use crate::action::{Action, ReversibleAction, StrokeAction};
use crate::error::ActionResult;
use crate::surface::Surface;

/// Minimum distance the pointer must travel before the path grows
pub const MIN_MOVE_DIST: f64 = 5.0;

fn to_point(p: &Point2D) -> Point {
    Point::new(p.x, p.y)
}

/// Pointer input from whatever front end drives the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down(Point2D),
    Move(Point2D),
    Up(Point2D),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CaptureState {
    #[default]
    Idle,
    Drawing,
}

/// In-progress stroke tracker
#[derive(Default)]
pub struct StrokeCapture {
    state: CaptureState,
    buffer: Option<StrokeAction>,
    start: Point,
    last: Point,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is currently being tracked
    pub fn is_drawing(&self) -> bool {
        self.state == CaptureState::Drawing
    }

    /// The in-progress buffer stroke, while drawing
    pub fn buffer(&self) -> Option<&StrokeAction> {
        self.buffer.as_ref()
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns the completed action when the event finished a stroke
    /// long enough to keep; the caller commits it. Events that make no
    /// sense in the current state are ignored.
    pub fn handle_event(
        &mut self,
        surface: &mut dyn Surface,
        event: PointerEvent,
    ) -> ActionResult<Option<Action>> {
        match (self.state, event) {
            (CaptureState::Idle, PointerEvent::Down(at)) => {
                self.begin(surface, to_point(&at))?;
                Ok(None)
            }
            (CaptureState::Drawing, PointerEvent::Move(to)) => {
                self.extend(surface, to_point(&to));
                Ok(None)
            }
            (CaptureState::Drawing, PointerEvent::Up(_)) => self.finish(surface),
            (CaptureState::Drawing, PointerEvent::Cancel) => {
                self.cancel(surface)?;
                Ok(None)
            }
            (state, event) => {
                tracing::debug!("ignoring {:?} while {:?}", event, state);
                Ok(None)
            }
        }
    }

    fn begin(&mut self, surface: &mut dyn Surface, at: Point) -> ActionResult {
        let mut path = BezPath::new();
        path.move_to(at);
        // Snapshot the live paint so later brush changes cannot alter
        // this stroke
        let paint = *surface.current_paint();
        let mut buffer = StrokeAction::new(path, paint)?;
        buffer.apply(surface)?;

        self.buffer = Some(buffer);
        self.start = at;
        self.last = at;
        self.state = CaptureState::Drawing;
        tracing::debug!("stroke started at ({}, {})", at.x, at.y);
        Ok(())
    }

    /// Adds a smoothing quadratic from the last anchor towards `to`,
    /// skipping jitter below [`MIN_MOVE_DIST`].
    fn extend(&mut self, surface: &mut dyn Surface, to: Point) {
        if self.last.distance(to) < MIN_MOVE_DIST {
            return;
        }
        let buffer = match self.buffer.as_mut() {
            Some(buffer) => buffer,
            None => return,
        };
        let midpoint = self.last.midpoint(to);
        buffer.path_mut().quad_to(self.last, midpoint);
        self.last = to;
        buffer.invalidate(surface);
    }

    fn finish(&mut self, surface: &mut dyn Surface) -> ActionResult<Option<Action>> {
        self.state = CaptureState::Idle;
        let mut buffer = match self.buffer.take() {
            Some(buffer) => buffer,
            None => return Ok(None),
        };
        // De-render the preview; the commit will render the final
        // stroke in its place
        buffer.reverse(surface)?;
        if self.start.distance(self.last) < MIN_MOVE_DIST {
            tracing::debug!("stroke too short, discarding");
            return Ok(None);
        }
        tracing::debug!("stroke completed: {}", buffer.describe());
        Ok(Some(Action::Reversible(ReversibleAction::Stroke(buffer))))
    }

    fn cancel(&mut self, surface: &mut dyn Surface) -> ActionResult {
        self.state = CaptureState::Idle;
        if let Some(mut buffer) = self.buffer.take() {
            buffer.reverse(surface)?;
            tracing::debug!("stroke cancelled");
        }
        Ok(())
    }
}
