use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pricing::models::{DiscountSchedule, TierPrice};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub discounts: DiscountSchedule,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Currency symbol prefixed to every rendered amount
    #[serde(default = "default_currency")]
    pub currency: String,
    /// The price book: tier names with per-user-per-year prices
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierPrice>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tiers: default_tiers(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Render detailed cells by default
    #[serde(default)]
    pub show_details: bool,
    /// Default output format: "table", "html" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory the table snapshot is exported into
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_details: false,
            format: default_format(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tiers() -> Vec<TierPrice> {
    vec![
        TierPrice { name: "Basic".to_string(), unit_price: 149.99 },
        TierPrice { name: "Dispatch".to_string(), unit_price: 249.99 },
        TierPrice { name: "Route Builder".to_string(), unit_price: 449.99 },
    ]
}

fn default_format() -> String {
    "table".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Load configuration from an optional TOML file plus environment overrides
///
/// A missing file is not an error: the built-in price book and discount
/// schedule apply. An invalid file is.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(config::Environment::with_prefix("PRICEGRID").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.pricing.tiers.is_empty() {
        anyhow::bail!("At least one tier must be configured");
    }

    for (idx, tier) in cfg.pricing.tiers.iter().enumerate() {
        if tier.name.trim().is_empty() {
            anyhow::bail!("Tier {} has an empty name", idx + 1);
        }
        if !(tier.unit_price >= 0.0) {
            anyhow::bail!("Tier '{}' has a negative or invalid unit price", tier.name);
        }
        if cfg.pricing.tiers[..idx].iter().any(|t| t.name == tier.name) {
            anyhow::bail!("Duplicate tier name '{}'", tier.name);
        }
    }

    let mut prev: Option<&crate::pricing::models::VolumeBreak> = None;
    for brk in &cfg.discounts.volume {
        if brk.min_users == 0 {
            anyhow::bail!("Volume breakpoints must require at least one user");
        }
        if !(0.0..=100.0).contains(&brk.percent) {
            anyhow::bail!(
                "Volume discount at {} users must be between 0 and 100",
                brk.min_users
            );
        }
        if let Some(prev) = prev {
            if brk.min_users <= prev.min_users {
                anyhow::bail!("Volume breakpoints must be in increasing user-count order");
            }
            if brk.percent < prev.percent {
                anyhow::bail!("Volume discounts must not decrease at higher breakpoints");
            }
        }
        prev = Some(brk);
    }

    if !(0.0..=100.0).contains(&cfg.discounts.term_percent) {
        anyhow::bail!("Term discount must be between 0 and 100");
    }
    if cfg.discounts.term_years.iter().any(|&y| y == 0) {
        anyhow::bail!("Qualifying term lengths must be positive");
    }

    match cfg.output.format.as_str() {
        "table" | "html" | "json" => {}
        other => anyhow::bail!("Unknown output format '{}'", other),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::VolumeBreak;

    #[test]
    fn test_defaults_match_standard_price_book() {
        let cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };

        assert_eq!(cfg.pricing.currency, "$");
        assert_eq!(cfg.pricing.tiers.len(), 3);
        assert_eq!(cfg.pricing.tiers[1].name, "Dispatch");
        assert_eq!(cfg.pricing.tiers[1].unit_price, 249.99);
        assert_eq!(cfg.discounts.term_years, vec![3, 5]);
        assert_eq!(cfg.output.format, "table");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_price_book() {
        let mut cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };
        cfg.pricing.tiers.clear();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_tiers() {
        let mut cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };
        cfg.pricing.tiers.push(TierPrice {
            name: "Basic".to_string(),
            unit_price: 99.99,
        });
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_unordered_breakpoints() {
        let mut cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };
        cfg.discounts.volume = vec![
            VolumeBreak { min_users: 25, percent: 15.0 },
            VolumeBreak { min_users: 10, percent: 10.0 },
        ];
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_percent() {
        let mut cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };
        cfg.discounts.term_percent = 150.0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut cfg = Config {
            pricing: PricingConfig::default(),
            discounts: DiscountSchedule::default(),
            output: OutputConfig::default(),
        };
        cfg.output.format = "xml".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let cfg = load_config(Path::new("/nonexistent/pricegrid-config.toml")).unwrap();
        assert_eq!(cfg.pricing.tiers.len(), 3);
        assert_eq!(cfg.discounts.volume_percent(50), 20.0);
    }
}
