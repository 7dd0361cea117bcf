// Library crate: exposes the headless drawing engine for integration
// tests and programmatic use. Front ends drive the canvas through the
// harness or the JSON command protocol; there is no GUI here.

pub mod action;
pub mod capture;
pub mod command;
pub mod editor;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod history;
pub mod surface;
