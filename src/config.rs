use crate::*;
use confique::Config as _;

/// Classification policy, read from the environment on request.
///
/// Only the case policy and the additional-keywords switch are configurable;
/// the keyword set itself is fixed.
#[derive(Debug, Clone, confique::Config)]
pub struct Config {
    #[config(env = "SQLIDENT_IGNORE_CASE", default = true)]
    pub ignore_case: bool,
    #[config(env = "SQLIDENT_ADDITIONAL_KEYWORDS", default = false)]
    pub additional_keywords: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Config::builder().env().load()?;
        debug!(
            ignore_case = config.ignore_case,
            additional_keywords = config.additional_keywords,
            "Loaded classification policy from environment"
        );
        Ok(config)
    }
}
