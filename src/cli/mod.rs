//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the command line flags and startup wiring (`commands`), terminal
//! prompts (`prompt`), the question forms (`forms`) and the menu state machine (`menu`).

mod commands;
pub mod forms;
pub mod menu;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::*;
pub use menu::Menu;
pub use prompt::DialoguerPrompter;
