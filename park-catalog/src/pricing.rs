use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleType;

/// Which tariff a lot charges
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Peak,
    OffPeak,
}

/// Hourly rates for one tariff. Bikes get their own rate, every other vehicle pays the car rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateCard {
    pub car: Decimal,
    pub bike: Decimal,
}

impl RateCard {
    pub fn new(car: Decimal, bike: Decimal) -> Self {
        Self { car, bike }
    }

    pub fn rate_for(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::Bike => self.bike,
            VehicleType::Car | VehicleType::Other => self.car,
        }
    }
}

/// Tariff configuration for a lot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tariff selected at lot construction
    pub strategy: StrategyKind,

    /// Rates applied by the peak tariff
    pub peak: RateCard,

    /// Rates applied by the off-peak tariff
    pub off_peak: RateCard,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Peak,
            peak: RateCard::new(Decimal::from(5), Decimal::from(2)),
            off_peak: RateCard::new(Decimal::from(3), Decimal::from(1)),
        }
    }
}

/// Fee policy mapping parked hours and vehicle type to a fee.
///
/// The strategy is fixed when the lot is built; it does not switch by time of day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingStrategy {
    Peak(RateCard),
    OffPeak(RateCard),
}

impl PricingStrategy {
    /// Peak tariff with the standard rates (5/hour, bikes 2/hour)
    pub fn peak() -> Self {
        PricingStrategy::Peak(PricingConfig::default().peak)
    }

    /// Off-peak tariff with the standard rates (3/hour, bikes 1/hour)
    pub fn off_peak() -> Self {
        PricingStrategy::OffPeak(PricingConfig::default().off_peak)
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        match config.strategy {
            StrategyKind::Peak => PricingStrategy::Peak(config.peak),
            StrategyKind::OffPeak => PricingStrategy::OffPeak(config.off_peak),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            PricingStrategy::Peak(_) => StrategyKind::Peak,
            PricingStrategy::OffPeak(_) => StrategyKind::OffPeak,
        }
    }

    pub fn rate_for(&self, vehicle_type: VehicleType) -> Decimal {
        match self {
            PricingStrategy::Peak(card) | PricingStrategy::OffPeak(card) => {
                card.rate_for(vehicle_type)
            }
        }
    }

    /// Fee = hours × rate. No minimum charge and no rounding of the result.
    pub fn calculate_fee(&self, hours: Decimal, vehicle_type: VehicleType) -> Decimal {
        hours * self.rate_for(vehicle_type)
    }
}

impl Default for PricingStrategy {
    fn default() -> Self {
        Self::peak()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_fees() {
        let strategy = PricingStrategy::peak();
        let two_hours = Decimal::from(2);

        assert_eq!(strategy.calculate_fee(two_hours, VehicleType::Car), Decimal::from(10));
        assert_eq!(strategy.calculate_fee(two_hours, VehicleType::Bike), Decimal::from(4));
        assert_eq!(strategy.calculate_fee(two_hours, VehicleType::Other), Decimal::from(10));
    }

    #[test]
    fn test_off_peak_fees() {
        let strategy = PricingStrategy::off_peak();
        let two_hours = Decimal::from(2);

        assert_eq!(strategy.calculate_fee(two_hours, VehicleType::Car), Decimal::from(6));
        assert_eq!(strategy.calculate_fee(two_hours, VehicleType::Bike), Decimal::from(2));
    }

    #[test]
    fn test_fractional_hours_are_not_rounded() {
        let strategy = PricingStrategy::peak();
        // 1.25h × 5
        let fee = strategy.calculate_fee(Decimal::new(125, 2), VehicleType::Car);
        assert_eq!(fee, Decimal::new(625, 2));

        // No minimum charge
        assert_eq!(strategy.calculate_fee(Decimal::ZERO, VehicleType::Car), Decimal::ZERO);
    }

    #[test]
    fn test_from_config_selects_tariff() {
        let mut config = PricingConfig::default();
        assert_eq!(PricingStrategy::from_config(&config).kind(), StrategyKind::Peak);

        config.strategy = StrategyKind::OffPeak;
        config.off_peak = RateCard::new(Decimal::from(4), Decimal::new(15, 1));
        let strategy = PricingStrategy::from_config(&config);

        assert_eq!(strategy.kind(), StrategyKind::OffPeak);
        assert_eq!(strategy.rate_for(VehicleType::Bike), Decimal::new(15, 1));
        assert_eq!(strategy.calculate_fee(Decimal::from(2), VehicleType::Car), Decimal::from(8));
    }

    #[test]
    fn test_default_strategy_is_peak() {
        assert_eq!(PricingStrategy::default(), PricingStrategy::peak());
    }
}
