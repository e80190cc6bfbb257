pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-expo")]
#[command(about = "A small fixture runner for the exponentation operator")]
pub struct CliConfig {
    #[arg(long, default_value = "2", help = "Base operand for the variable fixture")]
    pub base: f64,

    #[arg(long, default_value = "3", help = "Exponent operand for the variable fixture")]
    pub exponent: f64,

    #[arg(long, help = "Load operands from a TOML suite file")]
    pub config: Option<String>,

    #[arg(long, help = "Print the suite report as JSON")]
    pub emit_report: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base(&self) -> f64 {
        self.base
    }

    fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // Operands are deliberately unvalidated: NaN and infinities are
        // legal fixture inputs.
        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extension("config", path, &["toml"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_operands() {
        let config = CliConfig::parse_from(["small-expo"]);
        assert_eq!(config.base, 2.0);
        assert_eq!(config.exponent, 3.0);
        assert!(!config.emit_report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_operands_are_accepted() {
        let config = CliConfig::parse_from(["small-expo", "--base", "NaN", "--exponent", "inf"]);
        assert!(config.base.is_nan());
        assert!(config.exponent.is_infinite());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_path_must_be_toml() {
        let config = CliConfig::parse_from(["small-expo", "--config", "suite.yaml"]);
        assert!(config.validate().is_err());
    }
}
