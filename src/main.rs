pub mod availability;
pub mod coffee_machine;
pub mod constants;
pub mod dispenser;
pub mod drink;
pub mod errors;
pub mod ingredient_sensor;
pub mod instruction;
pub mod money;
pub mod notifier;
pub mod order;
pub mod orders_reader;
pub mod pricing;
pub mod report;
pub mod sales_ledger;

use std::{env, process};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_machine::CoffeeMachine;
use constants::{CURRENCY_SYMBOL, ORDERS_FILE};
use dispenser::LoggingDispenser;
use errors::CoffeeMachineError;
use ingredient_sensor::SimulatedIngredientSensor;
use notifier::LogAlerter;
use orders_reader::read_orders;
use report::StdoutReportSink;

fn run(path: &str) -> Result<(), CoffeeMachineError> {
    let orders_file = read_orders(path)?;
    let sensor = SimulatedIngredientSensor::new(
        orders_file.empty_bases,
        orders_file.shortage_probability,
    )?;
    let mut machine = CoffeeMachine::new(LoggingDispenser::new(), sensor, LogAlerter, StdoutReportSink);

    if let Some(message) = &orders_file.welcome_message {
        machine.send(message);
    }
    for order in &orders_file.orders {
        machine.order(order);
    }
    machine.report();

    info!(
        "[MACHINE] Finished: {} instructions sent, {}{} collected",
        machine.dispenser().received(),
        machine.sales().total_revenue(),
        CURRENCY_SYMBOL
    );
    Ok(())
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let path = env::args().nth(1).unwrap_or_else(|| ORDERS_FILE.to_string());
    if let Err(err) = run(&path) {
        error!("[MACHINE] {}", err);
        process::exit(1);
    }
}
