pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{engine::FixtureEngine, suite::ExponentationSuite};
pub use domain::model::{FixtureOutcome, SuiteReport};
pub use utils::error::{FixtureError, Result};
