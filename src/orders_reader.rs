//! Lectura del archivo de pedidos de la maquina
use log::{debug, error, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::SHORTAGE_PROBABILITY;
use crate::drink::Drink;
use crate::errors::CoffeeMachineError;
use crate::money::Money;
use crate::order::Order;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    drink: String,
    #[serde(default)]
    sugar: u32,
    money: String,
    #[serde(default)]
    extra_hot: bool,
}

#[derive(Deserialize)]
struct MachineConfiguration {
    orders: Vec<Value>,
    #[serde(default)]
    empty_bases: Vec<String>,
    #[serde(default = "default_shortage_probability")]
    shortage_probability: f64,
    #[serde(default)]
    welcome_message: Option<String>,
}

fn default_shortage_probability() -> f64 {
    SHORTAGE_PROBABILITY
}

/// Pedidos validos del archivo junto con la configuracion del sensor simulado
#[derive(Debug)]
pub struct OrdersFile {
    pub orders: Vec<Order>,
    pub empty_bases: Vec<String>,
    pub shortage_probability: f64,
    /// Mensaje que se manda al dispenser antes del primer pedido, si se configuro
    pub welcome_message: Option<String>,
}

fn to_order(entry: Value) -> Result<Order, CoffeeMachineError> {
    let json_order: JsonOrder = serde_json::from_value(entry)
        .map_err(|err| CoffeeMachineError::MalformedOrder(err.to_string()))?;
    let drink: Drink = json_order.drink.parse()?;
    let money: Money = json_order.money.parse()?;
    Ok(Order::new(drink, json_order.sugar, money, json_order.extra_hot)?)
}

/// Convierte los pedidos del archivo. Los que no se pueden preparar se informan y se descartan.
fn parse_orders(entries: Vec<Value>) -> Vec<Order> {
    let mut orders = Vec::new();
    for (id, entry) in entries.into_iter().enumerate() {
        match to_order(entry) {
            Ok(order) => {
                debug!("[READER] Added order {}: {}", id, order);
                orders.push(order);
            }
            Err(err) => error!("[READER] Discarded order {}: {}", id, err),
        }
    }
    info!("[READER] No more orders left, {} valid", orders.len());
    orders
}

pub fn read_orders_from<R: Read>(reader: R) -> Result<OrdersFile, CoffeeMachineError> {
    let configuration: MachineConfiguration = serde_json::from_reader(reader)
        .map_err(|err| CoffeeMachineError::FileReaderError(err.to_string()))?;
    Ok(OrdersFile {
        orders: parse_orders(configuration.orders),
        empty_bases: configuration.empty_bases,
        shortage_probability: configuration.shortage_probability,
        welcome_message: configuration.welcome_message,
    })
}

pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<OrdersFile, CoffeeMachineError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        CoffeeMachineError::FileReaderError(format!("{}: {}", path.as_ref().display(), err))
    })?;
    read_orders_from(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_orders_and_sensor_settings() {
        let json = r#"{
            "empty_bases": ["MILK"],
            "shortage_probability": 0.0,
            "orders": [
                { "drink": "COFFEE", "sugar": 1, "money": "1.00" },
                { "drink": "T", "money": "0.4", "extra_hot": true }
            ]
        }"#;

        let file = read_orders_from(json.as_bytes()).unwrap();

        assert_eq!(
            vec![
                Order::new(Drink::Coffee, 1, Money::from_cents(100), false).unwrap(),
                Order::new(Drink::Tea, 0, Money::from_cents(40), true).unwrap(),
            ],
            file.orders
        );
        assert_eq!(vec!["MILK".to_string()], file.empty_bases);
        assert_eq!(0.0, file.shortage_probability);
    }

    #[test]
    fn should_use_the_default_sensor_settings() {
        let file = read_orders_from(r#"{ "orders": [] }"#.as_bytes()).unwrap();
        assert!(file.orders.is_empty());
        assert!(file.empty_bases.is_empty());
        assert_eq!(SHORTAGE_PROBABILITY, file.shortage_probability);
        assert_eq!(None, file.welcome_message);
    }

    #[test]
    fn should_read_the_welcome_message() {
        let json = r#"{ "welcome_message": "Hello", "orders": [] }"#;
        let file = read_orders_from(json.as_bytes()).unwrap();
        assert_eq!(Some("Hello".to_string()), file.welcome_message);
    }

    #[test]
    fn should_keep_valid_orders_next_to_ill_typed_ones() {
        let json = r#"{ "orders": [
            { "drink": "COFFEE", "money": "1" },
            { "drink": "TEA", "sugar": -1, "money": "1" },
            { "drink": "TEA", "money": 0.4 },
            { "money": "1" },
            "CHOCOLATE",
            { "drink": "CHOCOLATE", "sugar": 2, "money": "0.50" }
        ] }"#;

        let file = read_orders_from(json.as_bytes()).unwrap();

        assert_eq!(
            vec![
                Order::simple(Drink::Coffee, 0, Money::from_cents(100)).unwrap(),
                Order::simple(Drink::Chocolate, 2, Money::from_cents(50)).unwrap(),
            ],
            file.orders
        );
    }

    #[test]
    fn should_discard_invalid_orders() {
        let json = r#"{ "orders": [
            { "drink": "ORANGE_JUICE", "sugar": 1, "money": "1" },
            { "drink": "ORANGE_JUICE", "money": "1", "extra_hot": true },
            { "drink": "MATE", "money": "1" },
            { "drink": "TEA", "money": "0.355" },
            { "drink": "ORANGE_JUICE", "money": "0.6" }
        ] }"#;

        let file = read_orders_from(json.as_bytes()).unwrap();

        assert_eq!(
            vec![Order::simple(Drink::OrangeJuice, 0, Money::from_cents(60)).unwrap()],
            file.orders
        );
    }

    #[test]
    fn should_fail_on_malformed_json() {
        assert!(matches!(
            read_orders_from("{ orders: ".as_bytes()),
            Err(CoffeeMachineError::FileReaderError(_))
        ));
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        assert!(matches!(
            read_orders("does-not-exist.json"),
            Err(CoffeeMachineError::FileReaderError(_))
        ));
    }
}
