use crate::models::SaleRecord;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Pass sales log
#[derive(Debug, Default)]
pub struct ReportManager {
    sales: Vec<SaleRecord>,
}

impl ReportManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sale(&mut self, pass_type: impl Into<String>, amount: Decimal) {
        self.sales.push(SaleRecord::new(pass_type, amount));
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// Sum of every recorded sale.
    ///
    /// Not filtered by calendar month: the log only ever covers the running session.
    pub fn monthly_sales(&self) -> Decimal {
        self.sales.iter().map(|s| s.amount).sum()
    }

    pub fn sales_by_type(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for sale in &self.sales {
            *totals.entry(sale.pass_type.clone()).or_insert(Decimal::ZERO) += sale.amount;
        }
        totals
    }
}
