//! Pedido de un cliente, validado contra las capacidades de la bebida
use std::fmt;

use crate::{drink::Drink, errors::InvalidOrderError, money::Money};

/// Pedido inmutable. Solo se puede construir con [`Order::new`], que garantiza
/// que la bebida admite el azucar y la temperatura pedidos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    drink: Drink,
    sugar: u32,
    money: Money,
    extra_hot: bool,
}

impl Order {
    pub fn new(
        drink: Drink,
        sugar: u32,
        money: Money,
        extra_hot: bool,
    ) -> Result<Order, InvalidOrderError> {
        if sugar > 0 && !drink.allows_sugar() {
            return Err(InvalidOrderError::SugarNotAllowed);
        }
        if extra_hot && !drink.supports_extra_hot() {
            return Err(InvalidOrderError::ExtraHotNotAllowed);
        }
        if money.is_negative() {
            return Err(InvalidOrderError::NegativeMoney);
        }
        Ok(Order { drink, sugar, money, extra_hot })
    }

    /// Pedido sin extra caliente
    pub fn simple(drink: Drink, sugar: u32, money: Money) -> Result<Order, InvalidOrderError> {
        Order::new(drink, sugar, money, false)
    }

    pub fn drink(&self) -> Drink {
        self.drink
    }

    pub fn sugar(&self) -> u32 {
        self.sugar
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn extra_hot(&self) -> bool {
        self.extra_hot
    }

    pub fn needs_stick(&self) -> bool {
        self.sugar > 0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} with ", self.drink)?;
        match self.sugar {
            0 => write!(f, "no sugar")?,
            1 => write!(f, "1 sugar")?,
            sugar => write!(f, "{} sugars", sugar)?,
        }
        if self.extra_hot {
            write!(f, " extra hot")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_need_a_stick_given_one_sugar() {
        let order = Order::simple(Drink::Tea, 1, Money::zero()).unwrap();
        assert!(order.needs_stick());
    }

    #[test]
    fn should_need_a_stick_given_more_than_one_sugar() {
        let order = Order::simple(Drink::Tea, 2, Money::zero()).unwrap();
        assert!(order.needs_stick());
    }

    #[test]
    fn should_not_need_a_stick_given_no_sugar() {
        let order = Order::simple(Drink::Tea, 0, Money::zero()).unwrap();
        assert!(!order.needs_stick());
    }

    #[test]
    fn should_reject_sugar_on_an_orange_juice() {
        let result = Order::simple(Drink::OrangeJuice, 1, Money::from_cents(100));
        assert_eq!(Err(InvalidOrderError::SugarNotAllowed), result);
    }

    #[test]
    fn should_reject_an_extra_hot_orange_juice() {
        let result = Order::new(Drink::OrangeJuice, 0, Money::from_cents(100), true);
        assert_eq!(Err(InvalidOrderError::ExtraHotNotAllowed), result);
    }

    #[test]
    fn should_reject_negative_money() {
        let result = Order::simple(Drink::Coffee, 0, Money::from_cents(-10));
        assert_eq!(Err(InvalidOrderError::NegativeMoney), result);
    }

    #[test]
    fn should_accept_a_plain_orange_juice() {
        let order = Order::simple(Drink::OrangeJuice, 0, Money::from_cents(60)).unwrap();
        assert_eq!(Drink::OrangeJuice, order.drink());
        assert_eq!(0, order.sugar());
        assert_eq!(Money::from_cents(60), order.money());
        assert!(!order.extra_hot());
    }

    #[test]
    fn should_describe_the_order() {
        let coffee = Order::simple(Drink::Coffee, 2, Money::zero()).unwrap();
        let tea = Order::new(Drink::Tea, 1, Money::zero(), true).unwrap();
        let chocolate = Order::simple(Drink::Chocolate, 0, Money::zero()).unwrap();
        assert_eq!("a COFFEE with 2 sugars", coffee.to_string());
        assert_eq!("a TEA with 1 sugar extra hot", tea.to_string());
        assert_eq!("a CHOCOLATE with no sugar", chocolate.to_string());
    }
}
