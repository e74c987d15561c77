//! Registro de las ventas de la maquina
use std::collections::HashMap;

use log::debug;

use crate::{drink::Drink, money::Money};

/// Cantidad vendida de cada bebida del catalogo y lo recaudado.
/// Solo cambia al completar una venta y nunca se descuenta.
pub struct SalesLedger {
    sold: HashMap<Drink, u64>,
    total_revenue: Money,
}

/// Foto del registro en el orden del catalogo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub lines: Vec<(Drink, u64)>,
    pub total_revenue: Money,
}

impl SalesLedger {
    pub fn new() -> SalesLedger {
        SalesLedger {
            sold: Drink::ALL.into_iter().map(|drink| (drink, 0)).collect(),
            total_revenue: Money::zero(),
        }
    }

    pub fn record(&mut self, drink: Drink) {
        *self.sold.entry(drink).or_insert(0) += 1;
        self.total_revenue += drink.price();
        debug!(
            "[LEDGER] Sold {}, total {} | revenue {}",
            drink,
            self.count_of(drink),
            self.total_revenue
        );
    }

    pub fn count_of(&self, drink: Drink) -> u64 {
        self.sold.get(&drink).copied().unwrap_or(0)
    }

    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    pub fn report(&self) -> SalesReport {
        SalesReport {
            lines: Drink::ALL
                .into_iter()
                .map(|drink| (drink, self.count_of(drink)))
                .collect(),
            total_revenue: self.total_revenue,
        }
    }
}

impl Default for SalesLedger {
    fn default() -> Self {
        SalesLedger::new()
    }
}
