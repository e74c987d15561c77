//! Parametros de configuracion de la maquina de bebidas

/// Archivo de pedidos que se lee si no se indica otro por linea de comandos
pub const ORDERS_FILE: &str = "orders.json";

/// Probabilidad de que el sensor simulado informe que una base esta vacia.
/// Se puede sobreescribir desde el archivo de pedidos.
pub const SHORTAGE_PROBABILITY: f64 = 0.05;

/// Simbolo de la moneda con la que se cobran las bebidas
pub const CURRENCY_SYMBOL: &str = "€";

/// Prefijo de los mensajes que se envian al dispenser
pub const MESSAGE_PREFIX: &str = "M:";

/// Marca de que hace falta un palito para revolver el azucar
pub const STICK_MARKER: &str = "0";

/// Sufijo del codigo de bebida cuando se pide extra caliente
pub const EXTRA_HOT_SUFFIX: &str = "h";

/// Texto que acompaña al nombre de la base cuando se acaba
pub const SHORTAGE_NOTIFICATION: &str =
    "shortage, a notification has been sent to the maintenance company";

/// Encabezado del reporte de ventas
pub const REPORT_HEADER: &str = "Beverage sales report:";
