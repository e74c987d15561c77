//! Calculo del dinero que le falta a un pedido
use crate::{money::Money, order::Order};

/// Diferencia entre el precio de la bebida y lo que pago el cliente.
/// Si es mayor a cero el pago no alcanza; el vuelto no se devuelve ni se registra.
pub fn missing_amount(order: &Order) -> Money {
    order.drink().price() - order.money()
}
