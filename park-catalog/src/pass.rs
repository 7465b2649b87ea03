use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Pass products sold at the office
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Monthly,
    Weekly,
}

impl PassKind {
    /// Nominal length of the entitlement
    pub fn duration(&self) -> Duration {
        match self {
            PassKind::Monthly => Duration::days(30),
            PassKind::Weekly => Duration::days(7),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PassKind::Monthly => "monthly",
            PassKind::Weekly => "weekly",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prepaid entitlement that waives per-visit fees for one plate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pass {
    pub id: Uuid,
    pub plate: String,
    pub kind: PassKind,
    pub start_date: DateTime<Utc>,
}

impl Pass {
    pub fn new(plate: impl Into<String>, kind: PassKind) -> Self {
        Self::starting_at(plate, kind, Utc::now())
    }

    pub fn monthly(plate: impl Into<String>) -> Self {
        Self::new(plate, PassKind::Monthly)
    }

    pub fn weekly(plate: impl Into<String>) -> Self {
        Self::new(plate, PassKind::Weekly)
    }

    pub fn starting_at(
        plate: impl Into<String>,
        kind: PassKind,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate: plate.into(),
            kind,
            start_date,
        }
    }

    /// Whether the pass waives fees.
    ///
    /// Both kinds are valid for as long as they are registered; `expires_at` is informational
    /// and is not enforced here.
    pub fn is_valid(&self) -> bool {
        match self.kind {
            PassKind::Monthly => true,
            PassKind::Weekly => true,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.start_date + self.kind.duration()
    }
}

/// Sale prices for each pass kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassPrices {
    pub monthly: Decimal,
    pub weekly: Decimal,
}

impl PassPrices {
    pub fn price_of(&self, kind: PassKind) -> Decimal {
        match kind {
            PassKind::Monthly => self.monthly,
            PassKind::Weekly => self.weekly,
        }
    }
}

impl Default for PassPrices {
    fn default() -> Self {
        Self {
            monthly: Decimal::from(100),
            weekly: Decimal::from(30),
        }
    }
}
