use crate::lot::{ExitReceipt, ParkingLot};
use crate::LotResult;
use chrono::{DateTime, Utc};
use park_catalog::{Pass, PassKind, PassPrices, VehicleType};
use park_finance::{FinanceManager, ReportManager};
use rust_decimal::Decimal;

/// A lot together with its books: exit fees and pass sales are recorded as revenue
pub struct ParkingSystem {
    lot: ParkingLot,
    finance: FinanceManager,
    reports: ReportManager,
    pass_prices: PassPrices,
}

impl ParkingSystem {
    pub fn new(lot: ParkingLot, pass_prices: PassPrices) -> Self {
        Self {
            lot,
            finance: FinanceManager::new(),
            reports: ReportManager::new(),
            pass_prices,
        }
    }

    pub fn enter(&mut self, plate: &str, vehicle_type: VehicleType) -> LotResult<u32> {
        self.lot.enter_vehicle(plate, vehicle_type)
    }

    pub fn enter_at(
        &mut self,
        plate: &str,
        vehicle_type: VehicleType,
        at: DateTime<Utc>,
    ) -> LotResult<u32> {
        self.lot.enter_vehicle_at(plate, vehicle_type, at)
    }

    pub fn exit(&mut self, plate: &str) -> LotResult<ExitReceipt> {
        self.exit_at(plate, Utc::now())
    }

    /// Process the exit and book the fee, including a zero fee waived by a pass
    pub fn exit_at(&mut self, plate: &str, at: DateTime<Utc>) -> LotResult<ExitReceipt> {
        let receipt = self.lot.exit_vehicle_at(plate, at)?;
        self.finance.add_revenue(receipt.fee);
        Ok(receipt)
    }

    /// Sell a pass to `plate`. Returns the price charged.
    pub fn buy_pass(&mut self, plate: &str, kind: PassKind) -> Decimal {
        let price = self.pass_prices.price_of(kind);

        self.lot.add_pass(Pass::new(plate, kind));
        self.finance.add_revenue(price);
        self.reports.record_sale(kind.as_str(), price);

        tracing::info!(plate, %kind, %price, "Pass purchased");
        price
    }

    pub fn record_expense(&mut self, amount: Decimal) {
        self.finance.add_expense(amount);
    }

    pub fn add_debtor(&mut self, name: &str, amount: Decimal) {
        self.finance.add_debtor(name, amount);
    }

    pub fn add_creditor(&mut self, name: &str, amount: Decimal) {
        self.finance.add_creditor(name, amount);
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn finance(&self) -> &FinanceManager {
        &self.finance
    }

    pub fn reports(&self) -> &ReportManager {
        &self.reports
    }
}
