//! Maquina de bebidas. Cobra, controla faltantes, registra la venta y le
//! indica al dispenser que preparar.
use log::{debug, info, warn};

use crate::{
    availability::{check_shortage, ShortageResult},
    constants::{CURRENCY_SYMBOL, REPORT_HEADER, SHORTAGE_NOTIFICATION},
    dispenser::Dispenser,
    drink::Liquid,
    ingredient_sensor::IngredientSensor,
    instruction::{encode, encode_message},
    money::Money,
    notifier::Alerter,
    order::Order,
    pricing::missing_amount,
    report::ReportSink,
    sales_ledger::SalesLedger,
};

/// Como termino un pedido. Ninguno de los casos es un error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    InsufficientFunds { missing: Money },
    Shortage { base: Liquid },
    Fulfilled { command: String },
}

pub struct CoffeeMachine<D, S, A, R> {
    sales: SalesLedger,
    dispenser: D,
    sensor: S,
    alerter: A,
    printer: R,
}

impl<D, S, A, R> CoffeeMachine<D, S, A, R>
where
    D: Dispenser,
    S: IngredientSensor,
    A: Alerter,
    R: ReportSink,
{
    pub fn new(dispenser: D, sensor: S, alerter: A, printer: R) -> CoffeeMachine<D, S, A, R> {
        CoffeeMachine {
            sales: SalesLedger::new(),
            dispenser,
            sensor,
            alerter,
            printer,
        }
    }

    /// Procesa un pedido. Primero el pago, despues los faltantes y por ultimo la preparacion.
    pub fn order(&mut self, order: &Order) -> OrderOutcome {
        debug!("[MACHINE] Processing {}", order);
        let missing = missing_amount(order);
        if missing.is_positive() {
            info!("[MACHINE] Rejected {}, {}{} missing", order, missing, CURRENCY_SYMBOL);
            self.send(&format!("{}{} is missing", missing, CURRENCY_SYMBOL));
            return OrderOutcome::InsufficientFunds { missing };
        }

        if let ShortageResult::Shorted(base) = check_shortage(order.drink(), &mut self.sensor) {
            warn!("[MACHINE] Skipped {}, not enough {}", order, base);
            self.alerter.notify_missing_drink(base.name());
            self.send(&format!("{} {}", base.name(), SHORTAGE_NOTIFICATION));
            return OrderOutcome::Shortage { base };
        }

        self.sales.record(order.drink());
        let command = encode(order);
        self.dispenser.receive(&command);
        info!("[MACHINE] Served {}", order);
        OrderOutcome::Fulfilled { command }
    }

    /// Envia un mensaje al dispenser sin pasar por un pedido
    pub fn send(&mut self, text: &str) {
        self.dispenser.receive(&encode_message(text));
    }

    pub fn report(&mut self) {
        let report = self.sales.report();
        self.printer.print(REPORT_HEADER);
        for (drink, count) in report.lines {
            self.printer.print(&format!("{}: {}", drink, count));
        }
        self.printer.print(&format!(
            "Total revenue: {}{}",
            report.total_revenue, CURRENCY_SYMBOL
        ));
    }

    pub fn sales(&self) -> &SalesLedger {
        &self.sales
    }

    pub fn dispenser(&self) -> &D {
        &self.dispenser
    }
}
