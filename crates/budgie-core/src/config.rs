//! Configuration for display, projection and storage
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (`--config`), which must exist
//! 2. The override file in the data dir (~/.local/share/budgie/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Every key is optional. Missing keys keep their default value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{ProjectionAssumptions, DEFAULT_PROJECTION_MONTHS};
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/budgie.toml");

/// Longest projection horizon accepted from config or flags
pub const MAX_PROJECTION_MONTHS: u32 = 120;

/// Number formatting for amounts shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub months: u32,
    pub income_growth_pct: f64,
    pub expense_growth_pct: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            months: DEFAULT_PROJECTION_MONTHS,
            income_growth_pct: 0.0,
            expense_growth_pct: 0.0,
        }
    }
}

impl ProjectionConfig {
    pub fn assumptions(&self) -> ProjectionAssumptions {
        ProjectionAssumptions {
            income_growth_pct: self.income_growth_pct,
            expense_growth_pct: self.expense_growth_pct,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Budget file override; `None` uses the data dir
    pub data_file: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgieConfig {
    pub display: DisplayConfig,
    pub projection: ProjectionConfig,
    pub storage: StorageConfig,
}

impl BudgieConfig {
    /// Load using the resolution order above
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let content = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!(path = %path.display(), "Loading config");
                read_config(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    debug!(path = %path.display(), "Loading config override");
                    read_config(&path)?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };
        parse_config(&content)
    }

    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("budgie").join("config.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config {}: {}", path.display(), e))
    })
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    projection: Option<RawProjection>,
    storage: Option<RawStorage>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
    decimal_separator: Option<String>,
    thousands_separator: Option<String>,
    decimals: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawProjection {
    months: Option<u32>,
    income_growth_pct: Option<f64>,
    expense_growth_pct: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    data_file: Option<PathBuf>,
}

fn single_char(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Config(format!(
            "{} must be a single character (got {:?})",
            key, value
        ))),
    }
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<BudgieConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = BudgieConfig::default();

    if let Some(display) = raw.display {
        if let Some(symbol) = display.currency_symbol {
            config.display.currency_symbol = symbol;
        }
        if let Some(sep) = display.decimal_separator {
            config.display.decimal_separator = single_char("decimal_separator", &sep)?;
        }
        if let Some(sep) = display.thousands_separator {
            config.display.thousands_separator = single_char("thousands_separator", &sep)?;
        }
        if let Some(decimals) = display.decimals {
            if decimals > 6 {
                return Err(Error::Config(format!(
                    "decimals must be between 0 and 6 (got {})",
                    decimals
                )));
            }
            config.display.decimals = decimals;
        }
    }
    if config.display.decimal_separator == config.display.thousands_separator {
        return Err(Error::Config(
            "decimal_separator and thousands_separator must differ".into(),
        ));
    }

    if let Some(projection) = raw.projection {
        if let Some(months) = projection.months {
            if months == 0 || months > MAX_PROJECTION_MONTHS {
                return Err(Error::Config(format!(
                    "projection months must be between 1 and {} (got {})",
                    MAX_PROJECTION_MONTHS, months
                )));
            }
            config.projection.months = months;
        }
        if let Some(pct) = projection.income_growth_pct {
            config.projection.income_growth_pct = pct;
        }
        if let Some(pct) = projection.expense_growth_pct {
            config.projection.expense_growth_pct = pct;
        }
    }
    config
        .projection
        .assumptions()
        .validate()
        .map_err(|e| Error::Config(format!("[projection] {}", e)))?;

    if let Some(storage) = raw.storage {
        config.storage.data_file = storage.data_file;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, BudgieConfig::default());
        assert!(config.projection.assumptions().is_flat());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), BudgieConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [display]
            currency_symbol = "€"
            decimal_separator = ","
            thousands_separator = "."

            [projection]
            months = 12
            income_growth_pct = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.display.currency_symbol, "€");
        assert_eq!(config.display.decimal_separator, ',');
        assert_eq!(config.display.thousands_separator, '.');
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.projection.months, 12);
        assert_eq!(config.projection.income_growth_pct, 0.5);
        assert_eq!(config.projection.expense_growth_pct, 0.0);
        assert!(config.storage.data_file.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse_config("[display]\ndecimal_separator = \",\"").is_err());
        assert!(parse_config("[display]\ndecimal_separator = \"..\"").is_err());
        assert!(parse_config("[display]\ndecimals = 9").is_err());
        assert!(parse_config("[projection]\nmonths = 0").is_err());
        assert!(matches!(parse_config("not toml ["), Err(Error::Config(_))));
    }

    #[test]
    fn test_growth_out_of_range_rejected() {
        assert!(matches!(
            parse_config("[projection]\nincome_growth_pct = 1000000.0"),
            Err(Error::Config(_))
        ));
        assert!(parse_config("[projection]\nexpense_growth_pct = -100.0").is_err());
        let config = parse_config("[projection]\nincome_growth_pct = 100.0").unwrap();
        assert_eq!(config.projection.income_growth_pct, 100.0);
    }

    #[test]
    fn test_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage]\ndata_file = \"/tmp/b.json\"\n").unwrap();
        let config = BudgieConfig::load(Some(&path)).unwrap();
        assert_eq!(config.storage.data_file, Some(PathBuf::from("/tmp/b.json")));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            BudgieConfig::load(Some(&missing)),
            Err(Error::Config(_))
        ));
    }
}
