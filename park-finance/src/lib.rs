pub mod models;
pub mod finance;
pub mod reports;

pub use models::{Balance, Creditor, Debtor, SaleRecord, Transaction, TransactionKind};
pub use finance::FinanceManager;
pub use reports::ReportManager;
