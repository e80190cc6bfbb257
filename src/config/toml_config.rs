use crate::core::ConfigProvider;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub suite: SuiteConfig,
    pub operands: OperandConfig,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperandConfig {
    pub base: f64,
    pub exponent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub emit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Load a suite configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixtureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a suite configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixtureError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute environment variables of the form `${VAR_NAME}`.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn emit_report(&self) -> bool {
        self.report.as_ref().map(|r| r.emit).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn base(&self) -> f64 {
        self.operands.base
    }

    fn exponent(&self) -> f64 {
        self.operands.exponent
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;
        if let Some(description) = &self.suite.description {
            validate_non_empty_string("suite.description", description)?;
        }
        Ok(())
    }
}
