//! Sample data for reverse lookups: airport codes and a snack inventory whose
//! value type gets its equality from a hand-written impl.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snack {
    Gum,
    Cookie,
}

impl fmt::Display for Snack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snack::Gum => write!(f, "gum"),
            Snack::Cookie => write!(f, "cookie"),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Item {
    pub price: u32,
    pub quantity: u32,
}

impl Item {
    pub fn new(price: u32, quantity: u32) -> Self {
        Self { price, quantity }
    }
}

// Two items are the same stock entry when price and quantity both match.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price && self.quantity == other.quantity
    }
}

impl Eq for Item {}

pub fn airport_codes() -> HashMap<String, String> {
    HashMap::from([
        ("CDG".to_string(), "Charles de Gaulle".to_string()),
        (
            "HKG".to_string(),
            "Hong Kong International Airport".to_string(),
        ),
    ])
}

pub fn sample_inventory() -> HashMap<Snack, Item> {
    HashMap::from([
        (Snack::Gum, Item::new(1, 5)),
        (Snack::Cookie, Item::new(2, 3)),
    ])
}
