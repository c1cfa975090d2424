use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use finly_core::currency::{CurrencyInfo, DEFAULT_CURRENCY, currency_for_region};

use crate::store::ensure_finly_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Region key into the currency table ("US", "IN", ...)
    #[serde(default = "default_region")]
    pub region: String,
    /// IANA timezone used to resolve "today" for imports and the dashboard
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_region() -> String {
    "US".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: default_region(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    pub fn currency(&self) -> &'static CurrencyInfo {
        currency_for_region(&self.region).unwrap_or(&DEFAULT_CURRENCY)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_finly_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?)
}

pub fn save_config(config: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(config)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.region, "US");
        assert_eq!(cfg.timezone, "UTC");
        assert_eq!(cfg.currency().code, "USD");

        let cfg: Config = toml::from_str("region = \"IN\"").unwrap();
        assert_eq!(cfg.currency().code, "INR");
        assert_eq!(cfg.timezone, "UTC");
    }
}
