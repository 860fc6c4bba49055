//! # Application Configuration
//!
//! Configuration loaded once at startup, immutable thereafter.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LODGE_*`)
//! 2. Config file (`lodge.toml`, or `--config <path>`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! Rates and the tax policy changing between bookings is exactly what
//! the reconciliation checker reports on - the running process itself
//! never mutates them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lodge_core::validation::validate_tax_rate_bps;
use lodge_core::{Money, RateTable, TaxRate};

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hotel identity shown on receipt headers.
    pub hotel: HotelIdentity,

    /// Total room inventory, for the available-rooms dashboard card.
    pub total_inventory: u32,

    /// VAT rate in basis points (1600 = 16%).
    pub tax_rate_bps: u32,

    /// Nightly rate per room category, in whole dollars
    /// (the rate card is quoted in round amounts).
    pub room_rates: BTreeMap<String, i64>,

    /// SQLite database file.
    pub database_path: PathBuf,

    /// Directory receipt documents are written into.
    pub receipts_dir: PathBuf,
}

/// Hotel identity block for receipt headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelIdentity {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for HotelIdentity {
    fn default() -> Self {
        HotelIdentity {
            name: "Grand Azure Hotel".to_string(),
            address: "123 Ocean Drive, Seaview City".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "bookings@grandazure.example".to_string(),
        }
    }
}

impl Default for AppConfig {
    /// Returns the stock configuration: 30 rooms, 16% VAT,
    /// Single $50 / Double $80 / Suite $120.
    fn default() -> Self {
        AppConfig {
            hotel: HotelIdentity::default(),
            total_inventory: 30,
            tax_rate_bps: 1600,
            room_rates: BTreeMap::from([
                ("Single".to_string(), 50),
                ("Double".to_string(), 80),
                ("Suite".to_string(), 120),
            ]),
            database_path: PathBuf::from("lodge.db"),
            receipts_dir: PathBuf::from("receipts"),
        }
    }
}

impl AppConfig {
    /// Loads configuration.
    ///
    /// ## Resolution
    /// - `--config <path>` given: the file must exist and parse
    /// - otherwise: `lodge.toml` in the working directory if present,
    ///   else defaults
    /// - env overrides apply last either way
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new("lodge.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    AppConfig::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {e}", path.display()))
        })?;

        toml::from_str(&raw)
            .map_err(|e| AppError::config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Applies `LODGE_*` environment overrides.
    ///
    /// ## Environment Variables
    /// - `LODGE_DB_PATH`: override the database file
    /// - `LODGE_RECEIPTS_DIR`: override the receipts directory
    /// - `LODGE_TAX_RATE`: override the VAT percentage (e.g. "16")
    /// - `LODGE_INVENTORY`: override the room inventory
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LODGE_DB_PATH") {
            self.database_path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("LODGE_RECEIPTS_DIR") {
            self.receipts_dir = PathBuf::from(dir);
        }

        if let Ok(rate_str) = std::env::var("LODGE_TAX_RATE") {
            if let Ok(pct) = rate_str.parse::<f64>() {
                self.tax_rate_bps = (pct * 100.0).round() as u32;
            }
        }

        if let Ok(inv_str) = std::env::var("LODGE_INVENTORY") {
            if let Ok(inventory) = inv_str.parse::<u32>() {
                self.total_inventory = inventory;
            }
        }
    }

    /// Rejects configurations the engine cannot price under.
    fn validate(&self) -> Result<(), AppError> {
        validate_tax_rate_bps(self.tax_rate_bps)
            .map_err(|e| AppError::config(e.to_string()))?;

        if let Some((category, rate)) = self.room_rates.iter().find(|(_, rate)| **rate < 0) {
            return Err(AppError::config(format!(
                "room rate for {category} is negative: {rate}"
            )));
        }

        Ok(())
    }

    /// Builds the immutable rate table the engine prices from.
    pub fn rate_table(&self) -> RateTable {
        RateTable::from_pairs(
            self.room_rates
                .iter()
                .map(|(category, rate)| (category.clone(), Money::from_major(*rate))),
        )
    }

    /// Current tax policy.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}
