//! Configuration: file format and loading
//!
//! Settings come from `dashpush.toml` in the invocation directory, then the
//! user config directory, then built-in defaults. CLI flags override all of
//! these.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, ConfigWarning};
pub use types::{Config, DeployConfig};
