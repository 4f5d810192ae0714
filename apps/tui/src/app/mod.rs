// Application state, background actions and key handling

pub mod actions;
pub mod forms;
pub mod input;
pub mod session;
pub mod state;

pub use actions::{AppActions, AppEvent};
pub use input::handle_input;
pub use state::{App, AppScreen};
