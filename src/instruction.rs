//! Codificacion de las instrucciones que recibe el dispenser.
//!
//! Una instruccion es un pedido a preparar (`C:1:0`, `Th::`) o un mensaje
//! para mostrar (`M:texto`).
use crate::{
    constants::{EXTRA_HOT_SUFFIX, MESSAGE_PREFIX, STICK_MARKER},
    order::Order,
};

pub fn encode(order: &Order) -> String {
    let drink_code = if order.extra_hot() {
        format!("{}{}", order.drink().code(), EXTRA_HOT_SUFFIX)
    } else {
        order.drink().code().to_string()
    };
    let (sugar, stick) = if order.needs_stick() {
        (order.sugar().to_string(), STICK_MARKER)
    } else {
        (String::new(), "")
    };
    format!("{}:{}:{}", drink_code, sugar, stick)
}

pub fn encode_message(text: &str) -> String {
    format!("{}{}", MESSAGE_PREFIX, text)
}
