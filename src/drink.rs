//! Catalogo de bebidas que vende la maquina
use std::{fmt, str::FromStr};

use crate::{errors::UnknownDrinkError, money::Money};

/// Liquido base con el que se prepara una bebida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Liquid {
    Water,
    Milk,
}

impl Liquid {
    pub fn name(&self) -> &'static str {
        match self {
            Liquid::Water => "WATER",
            Liquid::Milk => "MILK",
        }
    }
}

impl fmt::Display for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Atributos fijos de una bebida del catalogo
#[derive(Debug)]
pub struct DrinkSpec {
    pub name: &'static str,
    pub code: &'static str,
    pub price: Money,
    pub base: Option<Liquid>,
    pub supports_extra_hot: bool,
    pub allows_sugar: bool,
}

static TEA: DrinkSpec = DrinkSpec {
    name: "TEA",
    code: "T",
    price: Money::from_cents(40),
    base: Some(Liquid::Water),
    supports_extra_hot: true,
    allows_sugar: true,
};

static CHOCOLATE: DrinkSpec = DrinkSpec {
    name: "CHOCOLATE",
    code: "H",
    price: Money::from_cents(50),
    base: Some(Liquid::Milk),
    supports_extra_hot: true,
    allows_sugar: true,
};

static COFFEE: DrinkSpec = DrinkSpec {
    name: "COFFEE",
    code: "C",
    price: Money::from_cents(60),
    base: Some(Liquid::Water),
    supports_extra_hot: true,
    allows_sugar: true,
};

static ORANGE_JUICE: DrinkSpec = DrinkSpec {
    name: "ORANGE_JUICE",
    code: "O",
    price: Money::from_cents(60),
    base: None,
    supports_extra_hot: false,
    allows_sugar: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    Tea,
    Chocolate,
    Coffee,
    OrangeJuice,
}

impl Drink {
    /// Todas las bebidas en el orden del catalogo: primero las calientes, despues las frias
    pub const ALL: [Drink; 4] = [Drink::Tea, Drink::Chocolate, Drink::Coffee, Drink::OrangeJuice];

    pub fn spec(&self) -> &'static DrinkSpec {
        match self {
            Drink::Tea => &TEA,
            Drink::Chocolate => &CHOCOLATE,
            Drink::Coffee => &COFFEE,
            Drink::OrangeJuice => &ORANGE_JUICE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn code(&self) -> &'static str {
        self.spec().code
    }

    pub fn price(&self) -> Money {
        self.spec().price
    }

    pub fn base(&self) -> Option<Liquid> {
        self.spec().base
    }

    pub fn supports_extra_hot(&self) -> bool {
        self.spec().supports_extra_hot
    }

    pub fn allows_sugar(&self) -> bool {
        self.spec().allows_sugar
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Acepta el nombre (`COFFEE`, sin importar mayusculas) o el codigo de una letra (`C`)
impl FromStr for Drink {
    type Err = UnknownDrinkError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        Drink::ALL
            .into_iter()
            .find(|drink| drink.name().eq_ignore_ascii_case(text) || drink.code() == text)
            .ok_or_else(|| UnknownDrinkError(text.to_string()))
    }
}
