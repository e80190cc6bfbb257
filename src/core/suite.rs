use crate::core::exponentation::{
    run_exponentation_tests, test_exponentation_constant, test_exponentation_variables,
    test_exponentation_within_function,
};
use crate::core::{ConfigProvider, FixtureOutcome, Suite, SuiteReport};
use crate::utils::error::Result;

/// Fixture suite for the exponentation operator.
///
/// Runs the fixed driver pass first (canonical operands 2 and 3), then
/// evaluates each fixture with the configured operands and records the
/// values.
pub struct ExponentationSuite<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ExponentationSuite<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Suite for ExponentationSuite<C> {
    fn name(&self) -> &str {
        "exponentation"
    }

    fn run(&self) -> Result<SuiteReport> {
        // Smoke pass with the canonical operands, results discarded.
        run_exponentation_tests();

        let x = self.config.base();
        let y = self.config.exponent();

        let outcomes = vec![
            FixtureOutcome::new("exponentation_constant", test_exponentation_constant()),
            FixtureOutcome::new(
                "exponentation_variables",
                test_exponentation_variables(x, y),
            ),
            FixtureOutcome::new(
                "exponentation_within_function",
                test_exponentation_within_function(x),
            ),
        ];

        Ok(SuiteReport {
            suite: self.name().to_string(),
            outcomes,
        })
    }
}
