//! Tunebar terminal front end
//!
//! Library half of the `tunebar` binary: configuration, line command
//! parsing, rendering and the interactive session.

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod session;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use input::Input;
pub use session::{Flow, Session};
