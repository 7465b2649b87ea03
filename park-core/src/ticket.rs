use chrono::{DateTime, Utc};
use park_catalog::Vehicle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// One vehicle's parking session, from entry to exit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub vehicle: Vehicle,
    /// Space held for the duration of the session
    pub space: u32,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(vehicle: Vehicle, space: u32) -> Self {
        Self::issued_at(vehicle, space, Utc::now())
    }

    pub fn issued_at(vehicle: Vehicle, space: u32, entry_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle,
            space,
            entry_time,
            exit_time: None,
        }
    }

    pub fn close(&mut self) -> DateTime<Utc> {
        self.close_at(Utc::now())
    }

    /// Stamp the exit time. The first stamp wins, and it never precedes the entry time.
    pub fn close_at(&mut self, at: DateTime<Utc>) -> DateTime<Utc> {
        *self.exit_time.get_or_insert(at.max(self.entry_time))
    }

    /// Elapsed hours rounded to 2 decimals (banker's rounding). `None` while the ticket is open.
    pub fn hours(&self) -> Option<Decimal> {
        let exit_time = self.exit_time?;
        let millis = (exit_time - self.entry_time).num_milliseconds();
        Some((Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)).round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use park_catalog::VehicleType;

    fn ticket_at(entry: DateTime<Utc>) -> Ticket {
        Ticket::issued_at(Vehicle::new("A1", VehicleType::Car), 1, entry)
    }

    #[test]
    fn test_hours() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);
        assert!(ticket.hours().is_none());

        ticket.close_at(entry + Duration::hours(2));
        assert!(ticket.exit_time.is_some());
        assert_eq!(ticket.hours(), Some(Decimal::from(2)));
    }

    #[test]
    fn test_hours_rounded_to_two_decimals() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);

        // 100 minutes = 1.666.. hours
        ticket.close_at(entry + Duration::minutes(100));
        assert_eq!(ticket.hours(), Some(Decimal::new(167, 2)));
    }

    #[test]
    fn test_close_is_stamped_once() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);

        let first = ticket.close_at(entry + Duration::hours(1));
        let second = ticket.close_at(entry + Duration::hours(5));

        assert_eq!(first, second);
        assert_eq!(ticket.hours(), Some(Decimal::from(1)));
    }

    #[test]
    fn test_exit_before_entry_is_clamped() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);

        ticket.close_at(entry - Duration::hours(3));
        assert_eq!(ticket.exit_time, Some(entry));
        assert_eq!(ticket.hours(), Some(Decimal::ZERO));
    }
}
