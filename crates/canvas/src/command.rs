//! JSON command protocol for driving the canvas headlessly.
//!
//! Commands map one-to-one onto harness operations, so a script or a
//! front end over a pipe can exercise everything interactive input
//! can.

use serde::{Deserialize, Serialize};
use shared::{Color, Point2D};

use crate::error::ActionResult;
use crate::harness::TestHarness;

/// A command a front end or script can execute
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CanvasCommand {
    /// Draw a stroke through the given points.
    Stroke { points: Vec<Point2D> },
    /// Change the brush color.
    SetColor { color: Color },
    /// Change the stroke thickness.
    SetThickness { thickness: f64 },
    /// Switch the brush to the eraser.
    Erase,
    /// Wipe the canvas. Cannot be undone.
    ClearCanvas,
    /// Undo the most recent action.
    Undo,
    /// Redo the most recently undone action.
    Redo,
    /// Report canvas and history state.
    Inspect,
}

/// Response from executing a command
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    pub fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn ack(result: ActionResult) -> CommandResponse {
    match result {
        Ok(()) => CommandResponse::ok(),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}

/// Executes a single command against the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: CanvasCommand) -> CommandResponse {
    match cmd {
        CanvasCommand::Stroke { points } => match harness.stroke(&points) {
            Ok(committed) => {
                CommandResponse::ok_with_data(serde_json::json!({ "committed": committed }))
            }
            Err(e) => CommandResponse::err(e.to_string()),
        },
        CanvasCommand::SetColor { color } => ack(harness.set_color(color)),
        CanvasCommand::SetThickness { thickness } => ack(harness.set_thickness(thickness)),
        CanvasCommand::Erase => ack(harness.erase()),
        CanvasCommand::ClearCanvas => ack(harness.clear_canvas()),
        CanvasCommand::Undo => match harness.undo() {
            Ok(undone) => CommandResponse::ok_with_data(serde_json::json!({ "undone": undone })),
            Err(e) => CommandResponse::err(e.to_string()),
        },
        CanvasCommand::Redo => match harness.redo() {
            Ok(redone) => CommandResponse::ok_with_data(serde_json::json!({ "redone": redone })),
            Err(e) => CommandResponse::err(e.to_string()),
        },
        CanvasCommand::Inspect => CommandResponse::ok_with_data(serde_json::json!({
            "renderables": harness.renderable_count(),
            "color": harness.current_color(),
            "thickness": harness.current_thickness(),
            "undo_depth": harness.undo_len(),
            "redo_depth": harness.redo_len(),
            "can_undo": harness.can_undo(),
            "can_redo": harness.can_redo(),
        })),
    }
}

/// Parses and executes a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: CanvasCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parses and executes a JSON array of commands, in order.
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<CanvasCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid command batch JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
