use crate::ticket::Ticket;
use crate::{LotError, LotResult};
use chrono::{DateTime, Utc};
use park_catalog::{Pass, PricingStrategy, SpaceInventory, Vehicle, VehicleType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Outcome of a processed exit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExitReceipt {
    pub ticket_id: Uuid,
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub space: u32,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub hours: Decimal,
    pub fee: Decimal,
    /// A valid pass waived the fee
    pub pass_applied: bool,
}

/// Space allocation, ticket lifecycle and fee computation for one lot
pub struct ParkingLot {
    spaces: SpaceInventory,
    tickets: HashMap<String, Ticket>,
    passes: HashMap<String, Pass>,
    pricing: PricingStrategy,
}

impl ParkingLot {
    pub fn new(capacity: u32, pricing: PricingStrategy) -> Self {
        Self {
            spaces: SpaceInventory::new(capacity),
            tickets: HashMap::new(),
            passes: HashMap::new(),
            pricing,
        }
    }

    /// Lot charging the standard peak tariff
    pub fn with_capacity(capacity: u32) -> Self {
        Self::new(capacity, PricingStrategy::default())
    }

    /// Park a vehicle in the first free space. Returns the space number.
    pub fn enter_vehicle(&mut self, plate: &str, vehicle_type: VehicleType) -> LotResult<u32> {
        self.enter_vehicle_at(plate, vehicle_type, Utc::now())
    }

    pub fn enter_vehicle_at(
        &mut self,
        plate: &str,
        vehicle_type: VehicleType,
        at: DateTime<Utc>,
    ) -> LotResult<u32> {
        if self.spaces.find_free().is_none() {
            let capacity = self.spaces.capacity();
            tracing::warn!(plate, capacity, "Parking full");
            return Err(LotError::CapacityExceeded { capacity });
        }

        if self.tickets.contains_key(plate) {
            tracing::warn!(plate, "Vehicle already parked");
            return Err(LotError::VehicleAlreadyParked(plate.to_string()));
        }

        let space = self.spaces.allocate()?;
        tracing::debug!(space, available = self.spaces.available(), "Space allocated");
        let ticket = Ticket::issued_at(Vehicle::new(plate, vehicle_type), space, at);
        tracing::info!(plate, %vehicle_type, space, ticket_id = %ticket.id, "Vehicle parked");

        self.tickets.insert(plate.to_string(), ticket);
        Ok(space)
    }

    /// Close the vehicle's ticket, price the stay and free its space
    pub fn exit_vehicle(&mut self, plate: &str) -> LotResult<ExitReceipt> {
        self.exit_vehicle_at(plate, Utc::now())
    }

    pub fn exit_vehicle_at(&mut self, plate: &str, at: DateTime<Utc>) -> LotResult<ExitReceipt> {
        let mut ticket = self.tickets.remove(plate).ok_or_else(|| {
            tracing::warn!(plate, "Vehicle not found");
            LotError::TicketNotFound(plate.to_string())
        })?;

        if let Err(err) = self.spaces.release(ticket.space) {
            self.tickets.insert(plate.to_string(), ticket);
            return Err(err.into());
        }

        let exit_time = ticket.close_at(at);
        let hours = ticket.hours().unwrap_or(Decimal::ZERO);
        let vehicle_type = ticket.vehicle.vehicle_type();

        let pass_applied = self.passes.get(plate).is_some_and(Pass::is_valid);
        let fee = if pass_applied {
            Decimal::ZERO
        } else {
            self.pricing.calculate_fee(hours, vehicle_type)
        };

        tracing::info!(plate, space = ticket.space, %hours, %fee, pass_applied, "Vehicle exited");

        Ok(ExitReceipt {
            ticket_id: ticket.id,
            plate: plate.to_string(),
            vehicle_type,
            space: ticket.space,
            entry_time: ticket.entry_time,
            exit_time,
            hours,
            fee,
            pass_applied,
        })
    }

    /// Register a pass, replacing any pass already held by the plate
    pub fn add_pass(&mut self, pass: Pass) -> Option<Pass> {
        tracing::info!(plate = %pass.plate, kind = %pass.kind, "Pass registered");
        self.passes.insert(pass.plate.clone(), pass)
    }

    pub fn pass(&self, plate: &str) -> Option<&Pass> {
        self.passes.get(plate)
    }

    pub fn active_ticket(&self, plate: &str) -> Option<&Ticket> {
        self.tickets.get(plate)
    }

    pub fn active_tickets(&self) -> usize {
        self.tickets.len()
    }

    pub fn available_spaces(&self) -> usize {
        self.spaces.available()
    }

    pub fn occupied_spaces(&self) -> usize {
        self.spaces.occupied()
    }

    pub fn capacity(&self) -> usize {
        self.spaces.capacity()
    }

    pub fn spaces(&self) -> &SpaceInventory {
        &self.spaces
    }

    pub fn pricing(&self) -> &PricingStrategy {
        &self.pricing
    }
}
