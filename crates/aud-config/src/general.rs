//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Prefix for impact amounts in tables and summaries.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.currency_symbol, "$");
    }
}
