// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod types;

pub mod data;
pub mod file;
#[cfg(feature = "cli")]
pub mod logging;
pub mod progress;
pub mod runner;

pub use error::{ErrorKind, Result, ScrapeError};
pub use runner::{RunSummary, run};
