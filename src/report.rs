//! Salida del reporte de ventas

pub trait ReportSink {
    fn print(&mut self, line: &str);
}

/// Imprime cada linea del reporte por pantalla
pub struct StdoutReportSink;

impl ReportSink for StdoutReportSink {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }
}
