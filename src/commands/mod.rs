//! Command handlers
//!
//! Each handler resolves configuration, wires infrastructure into the use
//! case, renders the result, and returns the process exit code.

pub mod check;
pub mod deploy;
