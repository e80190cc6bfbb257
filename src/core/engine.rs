use crate::core::{Suite, SuiteReport};
use crate::utils::error::Result;

pub struct FixtureEngine<S: Suite> {
    suite: S,
}

impl<S: Suite> FixtureEngine<S> {
    pub fn new(suite: S) -> Self {
        Self { suite }
    }

    pub fn run(&self) -> Result<SuiteReport> {
        tracing::info!("Running fixture suite: {}", self.suite.name());

        let report = self.suite.run()?;

        for outcome in &report.outcomes {
            tracing::debug!("{} = {}", outcome.fixture, outcome.value);
        }
        tracing::info!("Suite completed with {} fixtures", report.outcomes.len());

        Ok(report)
    }
}
