//! Sensor de nivel de las bases liquidas
use std::collections::HashSet;

use log::debug;
use rand::{rngs::ThreadRng, thread_rng, Rng};

use crate::errors::CoffeeMachineError;

/// Indica si el contenedor de una base (`WATER`, `MILK`) esta vacio
pub trait IngredientSensor {
    fn is_empty(&mut self, base: &str) -> bool;
}

/// Sensor simulado. Las bases configuradas como vacias siempre lo estan,
/// el resto se vacia al azar con la probabilidad indicada.
pub struct SimulatedIngredientSensor {
    empty_bases: HashSet<String>,
    shortage_probability: f64,
    rng: ThreadRng,
}

impl SimulatedIngredientSensor {
    pub fn new(
        empty_bases: Vec<String>,
        shortage_probability: f64,
    ) -> Result<SimulatedIngredientSensor, CoffeeMachineError> {
        if !(0.0..=1.0).contains(&shortage_probability) {
            return Err(CoffeeMachineError::InvalidConfiguration(format!(
                "shortage probability {} is not between 0 and 1",
                shortage_probability
            )));
        }
        Ok(SimulatedIngredientSensor {
            empty_bases: empty_bases
                .into_iter()
                .map(|base| base.trim().to_uppercase())
                .collect(),
            shortage_probability,
            rng: thread_rng(),
        })
    }
}

impl IngredientSensor for SimulatedIngredientSensor {
    fn is_empty(&mut self, base: &str) -> bool {
        let empty = self.empty_bases.contains(base) || self.rng.gen_bool(self.shortage_probability);
        debug!("[SENSOR] {} empty={}", base, empty);
        empty
    }
}
