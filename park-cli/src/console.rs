use park_catalog::{PassKind, VehicleType};
use park_core::ParkingSystem;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

/// Largest amount accepted from the operator
const MAX_AMOUNT: i64 = 1_000_000_000;

const MENU: &str = "
--- Parking System ---
1. Enter Vehicle
2. Exit Vehicle
3. Buy Monthly Pass
4. Buy Weekly Pass
5. Show Available Spaces
6. Finance Summary
7. Reports
8. Record Expense
9. Add Debtor
10. Add Creditor
11. Old Debtors
12. Export Summary (JSON)
0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    EnterVehicle,
    ExitVehicle,
    BuyPass(PassKind),
    AvailableSpaces,
    FinanceSummary,
    Reports,
    RecordExpense,
    AddDebtor,
    AddCreditor,
    OldDebtors,
    ExportSummary,
    Quit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::EnterVehicle,
            "2" => MenuChoice::ExitVehicle,
            "3" => MenuChoice::BuyPass(PassKind::Monthly),
            "4" => MenuChoice::BuyPass(PassKind::Weekly),
            "5" => MenuChoice::AvailableSpaces,
            "6" => MenuChoice::FinanceSummary,
            "7" => MenuChoice::Reports,
            "8" => MenuChoice::RecordExpense,
            "9" => MenuChoice::AddDebtor,
            "10" => MenuChoice::AddCreditor,
            "11" => MenuChoice::OldDebtors,
            "12" => MenuChoice::ExportSummary,
            "0" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Interactive menu over any line-oriented reader and writer.
///
/// Operation failures are reported to the operator and the loop keeps serving. The loop ends on
/// the exit choice or at end of input.
pub struct Console<R, W> {
    system: ParkingSystem,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(system: ParkingSystem, input: R, output: W) -> Self {
        Self {
            system,
            input,
            output,
        }
    }

    pub fn system(&self) -> &ParkingSystem {
        &self.system
    }

    pub fn into_parts(self) -> (ParkingSystem, W) {
        (self.system, self.output)
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => break,
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid choice")?,
            }
        }

        self.output.flush()
    }

    /// Returns `false` once input runs out mid-command
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::EnterVehicle => {
                let Some(plate) = self.prompt("Plate: ")? else { return Ok(false) };
                let Some(vtype) = self.prompt("Type (car/bike): ")? else { return Ok(false) };

                match self.system.enter(&plate, VehicleType::parse(&vtype)) {
                    Ok(space) => writeln!(self.output, "Vehicle parked at space {}", space)?,
                    Err(err) => writeln!(self.output, "Error: {}", err)?,
                }
            }
            MenuChoice::ExitVehicle => {
                let Some(plate) = self.prompt("Plate: ")? else { return Ok(false) };

                match self.system.exit(&plate) {
                    Ok(receipt) => {
                        writeln!(self.output, "Hours Parked: {}", receipt.hours)?;
                        writeln!(self.output, "Fee: ${}", receipt.fee)?;
                        if receipt.pass_applied {
                            writeln!(self.output, "Pass applied")?;
                        }
                    }
                    Err(err) => writeln!(self.output, "Error: {}", err)?,
                }
            }
            MenuChoice::BuyPass(kind) => {
                let Some(plate) = self.prompt("Plate: ")? else { return Ok(false) };

                let price = self.system.buy_pass(&plate, kind);
                writeln!(self.output, "{} pass purchased for {}: ${}", kind, plate, price)?;
                if let Some(pass) = self.system.lot().pass(&plate) {
                    let expiry = pass.expires_at().format("%Y-%m-%d");
                    writeln!(self.output, "Nominal expiry (not enforced): {}", expiry)?;
                }
            }
            MenuChoice::AvailableSpaces => {
                let lot = self.system.lot();
                writeln!(self.output, "Available spaces: {}", lot.available_spaces())?;
                writeln!(self.output, "Occupancy: {:.1}%", lot.spaces().utilization() * 100.0)?;
            }
            MenuChoice::FinanceSummary => {
                let finance = self.system.finance();
                writeln!(self.output, "Revenue: {}", finance.total_revenue())?;
                writeln!(self.output, "Expense: {}", finance.total_expense())?;
                writeln!(self.output, "Profit: {}", finance.profit())?;
            }
            MenuChoice::Reports => {
                let reports = self.system.reports();
                writeln!(self.output, "Monthly Sales: {}", reports.monthly_sales())?;
                writeln!(self.output, "Sales by Type:")?;
                for (pass_type, total) in reports.sales_by_type() {
                    writeln!(self.output, "  {}: {}", pass_type, total)?;
                }
            }
            MenuChoice::RecordExpense => {
                let Some(amount) = self.prompt_amount()? else { return Ok(false) };
                if let Some(amount) = amount {
                    self.system.record_expense(amount);
                    writeln!(self.output, "Expense recorded: {}", amount)?;
                }
            }
            MenuChoice::AddDebtor | MenuChoice::AddCreditor => {
                let Some(name) = self.prompt("Name: ")? else { return Ok(false) };
                let Some(amount) = self.prompt_amount()? else { return Ok(false) };
                if let Some(amount) = amount {
                    if choice == MenuChoice::AddDebtor {
                        self.system.add_debtor(&name, amount);
                        writeln!(self.output, "Debtor recorded: {} owes {}", name, amount)?;
                    } else {
                        self.system.add_creditor(&name, amount);
                        writeln!(self.output, "Creditor recorded: owed {} to {}", amount, name)?;
                    }
                }
            }
            MenuChoice::OldDebtors => {
                let mut names = self.system.finance().old_debtors();
                names.sort();
                if names.is_empty() {
                    writeln!(self.output, "No old debtors")?;
                }
                for name in names {
                    writeln!(self.output, "  {}", name)?;
                }
            }
            MenuChoice::ExportSummary => {
                let report = self.system.finance().summary_report();
                writeln!(self.output, "{:#}", report)?;
            }
            MenuChoice::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Outer `None` at end of input, inner `None` when the amount was rejected
    fn prompt_amount(&mut self) -> io::Result<Option<Option<Decimal>>> {
        let Some(raw) = self.prompt("Amount: ")? else {
            return Ok(None);
        };

        match raw.parse::<Decimal>() {
            Ok(amount) if amount >= Decimal::ZERO && amount <= Decimal::from(MAX_AMOUNT) => {
                Ok(Some(Some(amount)))
            }
            _ => {
                writeln!(self.output, "Invalid amount: {}", raw)?;
                Ok(Some(None))
            }
        }
    }
}
