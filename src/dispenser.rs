//! Dispenser de la maquina. Recibe las instrucciones ya codificadas.
use log::info;

/// Recibe pedidos a preparar o mensajes (`M:`). No distingue entre ambos.
pub trait Dispenser {
    fn receive(&mut self, command: &str);
}

/// Dispenser que solo registra en el log lo que recibe
pub struct LoggingDispenser {
    received: u64,
}

impl LoggingDispenser {
    pub fn new() -> LoggingDispenser {
        LoggingDispenser { received: 0 }
    }

    pub fn received(&self) -> u64 {
        self.received
    }
}

impl Default for LoggingDispenser {
    fn default() -> Self {
        LoggingDispenser::new()
    }
}

impl Dispenser for LoggingDispenser {
    fn receive(&mut self, command: &str) {
        self.received += 1;
        info!("[DISPENSER] Received {}", command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_the_received_commands() {
        let mut dispenser = LoggingDispenser::new();
        assert_eq!(0, dispenser.received());
        dispenser.receive("C:1:0");
        dispenser.receive("M:hello");
        assert_eq!(2, dispenser.received());
        assert_eq!(0, LoggingDispenser::default().received());
    }
}
