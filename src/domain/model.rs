use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureOutcome {
    pub fixture: String,
    pub value: f64,
}

impl FixtureOutcome {
    pub fn new(fixture: &str, value: f64) -> Self {
        Self {
            fixture: fixture.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub outcomes: Vec<FixtureOutcome>,
}
