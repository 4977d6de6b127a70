//! Application layer: use cases
//!
//! Pure orchestration over domain ports.

pub mod deploy;

pub use deploy::{DeployOptions, DeployUseCase};
