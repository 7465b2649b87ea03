use park_catalog::{PassPrices, PricingConfig, RateCard, StrategyKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

type DefaultBuilder = config::ConfigBuilder<config::builder::DefaultState>;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub lot: LotSettings,
    pub pricing: PricingSettings,
    pub passes: PassSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LotSettings {
    pub capacity: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    #[serde(default)]
    pub strategy: StrategyKind,
    pub peak_rate_car: Decimal,
    pub peak_rate_bike: Decimal,
    pub offpeak_rate_car: Decimal,
    pub offpeak_rate_bike: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PassSettings {
    pub monthly_price: Decimal,
    pub weekly_price: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("Invalid amount for {key}: {value}")]
    InvalidAmount { key: &'static str, value: Decimal },
}

impl Config {
    pub fn load() -> Result<Self, SettingsError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        tracing::debug!(%run_mode, "Loading configuration");

        let s = Self::with_defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `PARK__LOT__CAPACITY=10` sets `lot.capacity`
            .add_source(config::Environment::with_prefix("PARK").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Defaults overlaid with a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let s = Self::with_defaults()?
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn pricing(&self) -> Result<PricingConfig, SettingsError> {
        let p = &self.pricing;
        Ok(PricingConfig {
            strategy: p.strategy,
            peak: RateCard::new(
                amount("pricing.peak_rate_car", p.peak_rate_car)?,
                amount("pricing.peak_rate_bike", p.peak_rate_bike)?,
            ),
            off_peak: RateCard::new(
                amount("pricing.offpeak_rate_car", p.offpeak_rate_car)?,
                amount("pricing.offpeak_rate_bike", p.offpeak_rate_bike)?,
            ),
        })
    }

    pub fn pass_prices(&self) -> Result<PassPrices, SettingsError> {
        Ok(PassPrices {
            monthly: amount("passes.monthly_price", self.passes.monthly_price)?,
            weekly: amount("passes.weekly_price", self.passes.weekly_price)?,
        })
    }

    fn with_defaults() -> Result<DefaultBuilder, config::ConfigError> {
        // Money defaults are strings so they reach `Decimal` without a float step
        config::Config::builder()
            .set_default("lot.capacity", 300_i64)?
            .set_default("pricing.strategy", "peak")?
            .set_default("pricing.peak_rate_car", "5")?
            .set_default("pricing.peak_rate_bike", "2")?
            .set_default("pricing.offpeak_rate_car", "3")?
            .set_default("pricing.offpeak_rate_bike", "1")?
            .set_default("passes.monthly_price", "100")?
            .set_default("passes.weekly_price", "30")
    }
}

/// Money values must be non-negative
fn amount(key: &'static str, value: Decimal) -> Result<Decimal, SettingsError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(SettingsError::InvalidAmount { key, value });
    }
    Ok(value)
}
