//! FarmSight command-line application library
//!
//! Configuration, error handling, the weather collaborator and the async
//! services behind the `farmsight` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod external;
pub mod output;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
