//! Control de faltantes de la base de una bebida
use crate::{
    drink::{Drink, Liquid},
    ingredient_sensor::IngredientSensor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortageResult {
    /// La bebida no lleva base, no se consulta al sensor
    NoBase,
    Available,
    Shorted(Liquid),
}

/// Consulta al sensor por la base de la bebida. Solo se llama con el pago ya aceptado.
pub fn check_shortage<S: IngredientSensor>(drink: Drink, sensor: &mut S) -> ShortageResult {
    match drink.base() {
        None => ShortageResult::NoBase,
        Some(base) if sensor.is_empty(base.name()) => ShortageResult::Shorted(base),
        Some(_) => ShortageResult::Available,
    }
}
