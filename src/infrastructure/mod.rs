//! Infrastructure layer: adapters over real external collaborators
//!
//! Everything that spawns a process, opens a socket, or reads a terminal
//! lives below this module.

pub mod http;
pub mod prompt;
pub mod remote;

pub use http::UreqProbe;
pub use prompt::TerminalPrompter;
pub use remote::{ScpTransfer, SshShell};
