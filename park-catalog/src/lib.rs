pub mod vehicle;
pub mod pricing;
pub mod pass;
pub mod inventory;

pub use vehicle::{Vehicle, VehicleType};
pub use pricing::{PricingConfig, PricingStrategy, RateCard, StrategyKind};
pub use pass::{Pass, PassKind, PassPrices};
pub use inventory::{ParkingSpace, SpaceError, SpaceInventory};
