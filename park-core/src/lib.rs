pub mod ticket;
pub mod lot;
pub mod system;

pub use ticket::Ticket;
pub use lot::{ExitReceipt, ParkingLot};
pub use system::ParkingSystem;

use park_catalog::SpaceError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LotError {
    #[error("Parking full: all {capacity} spaces are occupied")]
    CapacityExceeded { capacity: usize },
    #[error("Vehicle not found: {0}")]
    TicketNotFound(String),
    #[error("Vehicle already parked: {0}")]
    VehicleAlreadyParked(String),
    #[error(transparent)]
    Space(#[from] SpaceError),
}

pub type LotResult<T> = Result<T, LotError>;
