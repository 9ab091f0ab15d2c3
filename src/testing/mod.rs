//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a stepper [`App`](crate::app::App) without a
//! real terminal or a real clock. Use [`render_to_string`] to capture widget
//! output as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::render_to_string;
