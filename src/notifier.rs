//! Aviso a la empresa de mantenimiento cuando se acaba una base
use log::warn;

pub trait Alerter {
    fn notify_missing_drink(&mut self, base: &str);
}

/// Deja el aviso en el log
pub struct LogAlerter;

impl Alerter for LogAlerter {
    fn notify_missing_drink(&mut self, base: &str) {
        warn!("[NOTIFIER] {} is empty, notifying the maintenance company", base);
    }
}
