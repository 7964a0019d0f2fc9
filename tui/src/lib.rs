//! Terminal view layer for bistro.
//!
//! Pure presentation: the data layer pushes [`app::InputEvent`]s in, the view
//! formats and displays them, and user actions flow back out as
//! [`app::OutputEvent`]s. Nothing in this crate owns menu data.

pub mod app;
pub mod services;

pub use app::{AppState, InputEvent, OutputEvent, run};
