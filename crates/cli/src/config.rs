//! Environment-driven configuration.

use stockkeep_observability::{LogConfig, LogFormat};

pub const CURRENCY_VAR: &str = "STOCKKEEP_CURRENCY";
pub const LOG_VAR: &str = "STOCKKEEP_LOG";
pub const LOG_FORMAT_VAR: &str = "STOCKKEEP_LOG_FORMAT";

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Symbol prefixed to every rendered amount.
    pub currency: String,
    pub log: LogConfig,
    /// Problems found while reading the environment. Reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            log: LogConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(currency) = lookup(CURRENCY_VAR).filter(|c| !c.trim().is_empty()) {
            config.currency = currency.trim().to_string();
        }

        config.log.filter = lookup(LOG_VAR).filter(|f| !f.trim().is_empty());

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using {:?}", LogFormat::default())),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.currency, "$");
        assert_eq!(config.log.format, LogFormat::Compact);
    }

    #[test]
    fn reads_all_variables() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (CURRENCY_VAR, " ₱ "),
            (LOG_VAR, "stockkeep_inventory=debug"),
            (LOG_FORMAT_VAR, "json"),
        ]));
        assert_eq!(config.currency, "₱");
        assert_eq!(config.log.filter.as_deref(), Some("stockkeep_inventory=debug"));
        assert_eq!(config.log.format, LogFormat::Json);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn unknown_format_falls_back_with_warning() {
        let config = CliConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "yaml")]));
        assert_eq!(config.log.format, LogFormat::Compact);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("yaml"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = CliConfig::from_lookup(lookup_from(&[(CURRENCY_VAR, "  "), (LOG_VAR, "")]));
        assert_eq!(config.currency, DEFAULT_CURRENCY);
        assert_eq!(config.log.filter, None);
    }
}
