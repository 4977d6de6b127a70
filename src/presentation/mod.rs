//! Presentation layer: CLI surface

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
