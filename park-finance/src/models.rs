use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a bookkeeping entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Revenue,
    Expense,
}

/// An entry in the append-only transaction log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: Decimal, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            date: Utc::now(),
        }
    }

    pub fn revenue(amount: Decimal) -> Self {
        Self::new(amount, TransactionKind::Revenue)
    }

    pub fn expense(amount: Decimal) -> Self {
        Self::new(amount, TransactionKind::Expense)
    }
}

/// Outstanding balance owed by or to a named party
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub name: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

impl Balance {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self::recorded_at(name, amount, Utc::now())
    }

    pub fn recorded_at(name: impl Into<String>, amount: Decimal, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            amount,
            date,
        }
    }
}

/// Someone who owes the lot money
pub type Debtor = Balance;

/// Someone the lot owes money
pub type Creditor = Balance;

/// A pass sale, kept for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Uuid,
    pub pass_type: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(pass_type: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            pass_type: pass_type.into(),
            amount,
            date: Utc::now(),
        }
    }
}
