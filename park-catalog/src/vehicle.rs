use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle classes the lot prices differently
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Bike,
    Other,
}

impl VehicleType {
    /// Parse operator input. Anything that is not a car or a bike is `Other`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "car" => VehicleType::Car,
            "bike" => VehicleType::Bike,
            _ => VehicleType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
            VehicleType::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle as identified at the gate. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    plate: String,
    vehicle_type: VehicleType,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self {
            plate: plate.into(),
            vehicle_type,
        }
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vehicle_type() {
        assert_eq!(VehicleType::parse("car"), VehicleType::Car);
        assert_eq!(VehicleType::parse(" Bike "), VehicleType::Bike);
        assert_eq!(VehicleType::parse("truck"), VehicleType::Other);
        assert_eq!(VehicleType::parse(""), VehicleType::Other);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for vt in [VehicleType::Car, VehicleType::Bike, VehicleType::Other] {
            assert_eq!(VehicleType::parse(&vt.to_string()), vt);
        }
    }

    #[test]
    fn test_vehicle_accessors() {
        let vehicle = Vehicle::new("AB-123", VehicleType::Car);
        assert_eq!(vehicle.plate(), "AB-123");
        assert_eq!(vehicle.vehicle_type(), VehicleType::Car);
    }
}
