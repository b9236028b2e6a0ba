pub mod commands;
pub mod controller;
pub mod notifications;
pub mod state;

// Re-export the controller so the binary can build the page in one import.
pub use commands::{dispatch, Command, HELP_TEXT};
pub use controller::{ActionOutcome, PageController};
pub use notifications::Notifier;
pub use state::{AppState, PageState};
