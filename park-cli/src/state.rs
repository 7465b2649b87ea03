use park_catalog::PricingStrategy;
use park_config::{Config, SettingsError};
use park_core::{ParkingLot, ParkingSystem};

/// Wire a parking system from loaded configuration
pub fn build_system(config: &Config) -> Result<ParkingSystem, SettingsError> {
    let pricing = PricingStrategy::from_config(&config.pricing()?);
    let lot = ParkingLot::new(config.lot.capacity, pricing);

    Ok(ParkingSystem::new(lot, config.pass_prices()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_catalog::StrategyKind;

    #[test]
    fn test_build_from_config() {
        let toml = "[lot]\ncapacity = 7\n[pricing]\nstrategy = \"off_peak\"";
        let config = Config::from_toml(toml).unwrap();
        let system = build_system(&config).unwrap();

        assert_eq!(system.lot().capacity(), 7);
        assert_eq!(system.lot().available_spaces(), 7);
        assert_eq!(system.lot().pricing().kind(), StrategyKind::OffPeak);
    }
}
