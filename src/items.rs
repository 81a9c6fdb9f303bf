//! Items

use rusty_money::{Money, iso::Currency};

/// A named, priced line entry in a basket.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'a> {
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> Item<'a> {
    /// Creates a new item with the given name and price
    pub fn new(name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Creates a zero-priced item, as handed out by promotions.
    pub fn complimentary(name: impl Into<String>, currency: &'a Currency) -> Self {
        Self::new(name, Money::from_minor(0, currency))
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
