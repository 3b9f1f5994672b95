pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    byline::{default_byline, get_byline, Byline},
    runner::ScriptRunner,
};
pub use domain::{model::Profile, model::SummaryStats, ports::Speaker};
pub use utils::error::{BylineError, Result};
