//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
/// Application State
///
/// Geladener Ausstellungsplan, Viewer- und Admin-Zustand.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::AppCommand;
pub use state::{AppState, EditorState, ViewerState};
