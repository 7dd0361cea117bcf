//! Brush actions: color, thickness, and the eraser.
//!
//! Each one captures the previous brush value at apply time. The
//! captured value doubles as the applied state, so apply and reverse
//! can only ever alternate.

use shared::Color;

use crate::error::{ActionError, ActionResult};
use crate::surface::Surface;

use super::ActionState;

/// Background color the eraser paints with
const BACKGROUND_COLOR: Color = Color::WHITE;

/// Reversible action that changes the brush color
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeColorAction {
    color: Color,
    prev: Option<Color>,
}

impl ChangeColorAction {
    pub fn new(color: Color) -> Self {
        Self { color, prev: None }
    }

    /// Color this action changes the brush to
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> ActionState {
        match self.prev {
            Some(_) => ActionState::Applied,
            None => ActionState::NotApplied,
        }
    }

    pub fn apply(&mut self, surface: &mut dyn Surface) -> ActionResult {
        if self.prev.is_some() {
            return Err(ActionError::AlreadyApplied(self.describe()));
        }
        let paint = surface.current_paint_mut();
        self.prev = Some(paint.color);
        paint.color = self.color;
        Ok(())
    }

    pub fn reverse(&mut self, surface: &mut dyn Surface) -> ActionResult {
        let prev = match self.prev.take() {
            Some(color) => color,
            None => return Err(ActionError::NotApplied(self.describe())),
        };
        surface.current_paint_mut().color = prev;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!("change color to {}", self.color)
    }
}

/// Reversible action that changes the stroke thickness
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeThicknessAction {
    thickness: f64,
    prev: Option<f64>,
}

impl ChangeThicknessAction {
    /// Fails with [`ActionError::InvalidThickness`] unless `thickness`
    /// is strictly positive.
    pub fn new(thickness: f64) -> ActionResult<Self> {
        if thickness <= 0.0 || thickness.is_nan() {
            return Err(ActionError::InvalidThickness(thickness));
        }
        Ok(Self {
            thickness,
            prev: None,
        })
    }

    /// Thickness this action changes the brush to
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn state(&self) -> ActionState {
        match self.prev {
            Some(_) => ActionState::Applied,
            None => ActionState::NotApplied,
        }
    }

    pub fn apply(&mut self, surface: &mut dyn Surface) -> ActionResult {
        if self.prev.is_some() {
            return Err(ActionError::AlreadyApplied(self.describe()));
        }
        let paint = surface.current_paint_mut();
        self.prev = Some(paint.thickness);
        paint.thickness = self.thickness;
        Ok(())
    }

    pub fn reverse(&mut self, surface: &mut dyn Surface) -> ActionResult {
        let prev = match self.prev.take() {
            Some(thickness) => thickness,
            None => return Err(ActionError::NotApplied(self.describe())),
        };
        surface.current_paint_mut().thickness = prev;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!("change thickness to {}", self.thickness)
    }
}

/// Reversible action that switches the brush to the background color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EraseAction {
    prev: Option<Color>,
}

impl EraseAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ActionState {
        match self.prev {
            Some(_) => ActionState::Applied,
            None => ActionState::NotApplied,
        }
    }

    pub fn apply(&mut self, surface: &mut dyn Surface) -> ActionResult {
        if self.prev.is_some() {
            return Err(ActionError::AlreadyApplied(self.describe()));
        }
        let paint = surface.current_paint_mut();
        self.prev = Some(paint.color);
        paint.color = BACKGROUND_COLOR;
        Ok(())
    }

    pub fn reverse(&mut self, surface: &mut dyn Surface) -> ActionResult {
        let prev = match self.prev.take() {
            Some(color) => color,
            None => return Err(ActionError::NotApplied(self.describe())),
        };
        surface.current_paint_mut().color = prev;
        Ok(())
    }

    pub fn describe(&self) -> String {
        "change brush to eraser".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use shared::Paint;

    #[test]
    fn test_change_color_round_trip() {
        let mut canvas = Canvas::new();
        *canvas.current_paint_mut() = Paint::new(Color::RED, 3.0);

        let mut action = ChangeColorAction::new(Color::BLUE);
        action.apply(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().color, Color::BLUE);

        action.reverse(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().color, Color::RED);
        // Thickness is untouched throughout
        assert_eq!(canvas.current_paint().thickness, 3.0);
    }

    #[test]
    fn test_change_color_captures_at_apply_time() {
        let mut canvas = Canvas::new();
        let mut action = ChangeColorAction::new(Color::GREEN);

        // The brush changes between construction and apply
        canvas.current_paint_mut().color = Color::BLUE;
        action.apply(&mut canvas).unwrap();
        action.reverse(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().color, Color::BLUE);
    }

    #[test]
    fn test_change_color_state_errors() {
        let mut canvas = Canvas::new();
        let mut action = ChangeColorAction::new(Color::BLUE);

        let err = action.reverse(&mut canvas).unwrap_err();
        assert!(matches!(err, ActionError::NotApplied(_)));

        action.apply(&mut canvas).unwrap();
        let err = action.apply(&mut canvas).unwrap_err();
        assert!(matches!(err, ActionError::AlreadyApplied(_)));
        // The failed second apply did not disturb the brush
        assert_eq!(canvas.current_paint().color, Color::BLUE);
    }

    #[test]
    fn test_change_thickness_round_trip() {
        let mut canvas = Canvas::new();
        *canvas.current_paint_mut() = Paint::new(Color::RED, 10.0);

        let mut action = ChangeThicknessAction::new(2.5).unwrap();
        action.apply(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().thickness, 2.5);

        action.reverse(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().thickness, 10.0);
    }

    #[test]
    fn test_thickness_must_be_positive() {
        assert_eq!(
            ChangeThicknessAction::new(-5.0).unwrap_err(),
            ActionError::InvalidThickness(-5.0)
        );
        assert_eq!(
            ChangeThicknessAction::new(0.0).unwrap_err(),
            ActionError::InvalidThickness(0.0)
        );
        assert!(matches!(
            ChangeThicknessAction::new(f64::NAN).unwrap_err(),
            ActionError::InvalidThickness(_)
        ));
        assert!(ChangeThicknessAction::new(0.1).is_ok());
    }

    #[test]
    fn test_erase_swaps_to_background_and_back() {
        let mut canvas = Canvas::new();
        *canvas.current_paint_mut() = Paint::new(Color::rgb(200, 40, 40), 10.0);

        let mut action = EraseAction::new();
        action.apply(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().color, Color::WHITE);

        action.reverse(&mut canvas).unwrap();
        assert_eq!(canvas.current_paint().color, Color::rgb(200, 40, 40));
    }

    #[test]
    fn test_erase_twice_alternates_states() {
        let mut canvas = Canvas::new();
        let mut action = EraseAction::new();

        action.apply(&mut canvas).unwrap();
        assert_eq!(action.state(), ActionState::Applied);
        assert!(matches!(
            action.apply(&mut canvas).unwrap_err(),
            ActionError::AlreadyApplied(_)
        ));

        action.reverse(&mut canvas).unwrap();
        assert_eq!(action.state(), ActionState::NotApplied);
        assert!(matches!(
            action.reverse(&mut canvas).unwrap_err(),
            ActionError::NotApplied(_)
        ));
    }
}
