use crate::domain::model::SuiteReport;
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn base(&self) -> f64;
    fn exponent(&self) -> f64;
}

pub trait Suite {
    fn name(&self) -> &str;
    fn run(&self) -> Result<SuiteReport>;
}
