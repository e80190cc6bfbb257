pub mod engine;
pub mod exponentation;
pub mod suite;

pub use crate::domain::model::{FixtureOutcome, SuiteReport};
pub use crate::domain::ports::{ConfigProvider, Suite};
pub use crate::utils::error::Result;
