//! Console front end for the inventory manager.
//!
//! Everything here is presentation: reading keystrokes, re-asking on bad
//! input, and drawing tables. All domain decisions are made by
//! `stockkeep-inventory`.

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;

pub use config::CliConfig;
pub use prompt::Prompter;
pub use session::Session;
