use crate::models::{Creditor, Debtor, Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Age after which an unpaid debt is reported as old
const OLD_DEBT_DAYS: i64 = 30;

/// Revenue/expense bookkeeping plus debtor and creditor balances
#[derive(Debug, Default)]
pub struct FinanceManager {
    transactions: Vec<Transaction>,
    debtors: HashMap<String, Debtor>,
    creditors: HashMap<String, Creditor>,
}

impl FinanceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_revenue(&mut self, amount: Decimal) {
        tracing::debug!(%amount, "Revenue recorded");
        self.transactions.push(Transaction::revenue(amount));
    }

    pub fn add_expense(&mut self, amount: Decimal) {
        tracing::debug!(%amount, "Expense recorded");
        self.transactions.push(Transaction::expense(amount));
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn total_revenue(&self) -> Decimal {
        self.total_of(TransactionKind::Revenue)
    }

    pub fn total_expense(&self) -> Decimal {
        self.total_of(TransactionKind::Expense)
    }

    pub fn profit(&self) -> Decimal {
        self.total_revenue().saturating_sub(self.total_expense())
    }

    /// Record what `name` owes. Replaces any earlier entry for the same name.
    pub fn add_debtor(&mut self, name: impl Into<String>, amount: Decimal) {
        let debtor = Debtor::new(name, amount);
        self.debtors.insert(debtor.name.clone(), debtor);
    }

    /// Record what the lot owes `name`. Replaces any earlier entry for the same name.
    pub fn add_creditor(&mut self, name: impl Into<String>, amount: Decimal) {
        let creditor = Creditor::new(name, amount);
        self.creditors.insert(creditor.name.clone(), creditor);
    }

    pub fn debtor(&self, name: &str) -> Option<&Debtor> {
        self.debtors.get(name)
    }

    pub fn creditor(&self, name: &str) -> Option<&Creditor> {
        self.creditors.get(name)
    }

    /// Names of debtors recorded at least 30 days ago
    pub fn old_debtors(&self) -> Vec<String> {
        self.old_debtors_as_of(Utc::now())
    }

    pub fn old_debtors_as_of(&self, now: DateTime<Utc>) -> Vec<String> {
        self.debtors
            .values()
            .filter(|d| (now - d.date).num_days() >= OLD_DEBT_DAYS)
            .map(|d| d.name.clone())
            .collect()
    }

    /// Snapshot of the books for export
    pub fn summary_report(&self) -> serde_json::Value {
        serde_json::json!({
            "report_date": Utc::now().to_rfc3339(),
            "metrics": {
                "total_revenue": self.total_revenue(),
                "total_expense": self.total_expense(),
                "profit": self.profit(),
                "transactions": self.transactions.len(),
                "debtors": self.debtors.len(),
                "creditors": self.creditors.len()
            }
        })
    }

    /// Saturates at the `Decimal` bounds instead of overflowing
    fn total_of(&self, kind: TransactionKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .fold(Decimal::ZERO, |total, t| total.saturating_add(t.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_totals_and_profit() {
        let mut finance = FinanceManager::new();
        finance.add_revenue(Decimal::from(100));
        finance.add_revenue(Decimal::new(125, 1));
        finance.add_expense(Decimal::from(40));

        assert_eq!(finance.total_revenue(), Decimal::new(1125, 1));
        assert_eq!(finance.total_expense(), Decimal::from(40));
        assert_eq!(finance.profit(), Decimal::new(725, 1));
        assert_eq!(finance.transactions().len(), 3);
    }

    #[test]
    fn test_profit_matches_folds() {
        let mut finance = FinanceManager::new();
        assert_eq!(finance.profit(), Decimal::ZERO);

        for i in 1..=20 {
            if i % 3 == 0 {
                finance.add_expense(Decimal::new(i * 7, 1));
            } else {
                finance.add_revenue(Decimal::new(i * 13, 2));
            }
            assert_eq!(finance.profit(), finance.total_revenue() - finance.total_expense());
        }

        // Expenses can exceed revenue
        finance.add_expense(Decimal::from(1000));
        assert!(finance.profit() < Decimal::ZERO);
    }

    #[test]
    fn test_debtor_upsert_overwrites() {
        let mut finance = FinanceManager::new();
        finance.add_debtor("acme", Decimal::from(50));
        finance.add_debtor("acme", Decimal::from(20));

        // No accumulation
        assert_eq!(finance.debtor("acme").unwrap().amount, Decimal::from(20));

        finance.add_creditor("supplier", Decimal::from(75));
        assert_eq!(finance.creditor("supplier").unwrap().amount, Decimal::from(75));
        assert!(finance.creditor("acme").is_none());
    }

    #[test]
    fn test_old_debtors() {
        let mut finance = FinanceManager::new();
        finance.add_debtor("acme", Decimal::from(50));
        finance.add_debtor("globex", Decimal::from(10));

        assert!(finance.old_debtors().is_empty());
        assert!(finance.old_debtors_as_of(Utc::now() + Duration::days(29)).is_empty());

        let a_month_later = Utc::now() + Duration::days(30) + Duration::minutes(1);
        let mut old = finance.old_debtors_as_of(a_month_later);
        old.sort();
        assert_eq!(old, vec!["acme".to_string(), "globex".to_string()]);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut finance = FinanceManager::new();
        finance.add_expense(Decimal::MAX);
        finance.add_expense(Decimal::MAX);

        assert_eq!(finance.total_expense(), Decimal::MAX);
        assert_eq!(finance.profit(), Decimal::MIN);

        finance.add_revenue(Decimal::MAX);
        finance.add_revenue(Decimal::from(1));
        assert_eq!(finance.total_revenue(), Decimal::MAX);
        assert_eq!(finance.profit(), Decimal::ZERO);
    }

    #[test]
    fn test_summary_report() {
        let mut finance = FinanceManager::new();
        finance.add_revenue(Decimal::from(30));
        finance.add_expense(Decimal::from(10));
        finance.add_debtor("acme", Decimal::from(5));

        let report = finance.summary_report();
        assert_eq!(report["metrics"]["transactions"], 2);
        assert_eq!(report["metrics"]["debtors"], 1);
        assert_eq!(report["metrics"]["creditors"], 0);
        assert_eq!(report["metrics"]["profit"], "20");
    }
}
