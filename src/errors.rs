//! Errores de la maquina de bebidas
use thiserror::Error;

/// Pedido imposible de preparar segun las capacidades de la bebida.
/// Se detecta al construir el pedido, antes de llegar a la maquina.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidOrderError {
    #[error("sugar not allowed")]
    SugarNotAllowed,
    #[error("extra-hot not allowed")]
    ExtraHotNotAllowed,
    #[error("money tendered cannot be negative")]
    NegativeMoney,
}

/// Monto que no se puede interpretar como dinero con dos decimales
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount '{0}'")]
    InvalidFormat(String),
    #[error("amount '{0}' has more than two decimals")]
    TooManyDecimals(String),
    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Nombre o codigo que no esta en el catalogo
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown drink '{0}'")]
pub struct UnknownDrinkError(pub String);

#[derive(Debug, Error)]
pub enum CoffeeMachineError {
    #[error("could not read the orders file: {0}")]
    FileReaderError(String),
    #[error("malformed order: {0}")]
    MalformedOrder(String),
    #[error(transparent)]
    UnknownDrink(#[from] UnknownDrinkError),
    #[error(transparent)]
    InvalidMoney(#[from] MoneyParseError),
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
