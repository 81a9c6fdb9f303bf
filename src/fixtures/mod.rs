//! Fixtures
//!
//! Basket descriptions loaded from YAML.

use std::{fs, path::Path};

use jiff::{Zoned, civil::DateTime};
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;

use crate::{basket::Basket, items::Item};

pub mod items;

use self::items::{ItemFixture, parse_currency};

/// Demo basket bundled with the crate.
pub const DEMO_BASKET: &str = include_str!("../../fixtures/baskets/demo.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between the basket and one of its items
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Neither a basket currency nor any items were given
    #[error("No currency given and no items to infer it from")]
    NoCurrency,

    /// Basket creation error
    #[error("Failed to create basket: {0}")]
    Basket(#[from] crate::basket::BasketError),
}

/// Basket definition from YAML fixtures
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// ISO currency code; inferred from the first item when omitted
    #[serde(default)]
    pub currency: Option<String>,

    /// Creation time; the basket is created "now" when omitted
    #[serde(default)]
    pub created: Option<DateTime>,

    /// Items in the order they are added to the basket
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// A basket fixture with its prices and currency resolved.
#[derive(Debug, Clone)]
pub struct Fixture {
    currency: &'static Currency,
    created: Option<DateTime>,
    items: Vec<Item<'static>>,
}

impl Fixture {
    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price or currency cannot be parsed, or the
    /// items do not share the basket currency.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: BasketFixture = serde_norway::from_str(contents)?;

        fixture.try_into()
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// The bundled demo basket.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture cannot be parsed.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_yaml(DEMO_BASKET)
    }

    /// Basket currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Creation time from the fixture, if one was given.
    pub fn created(&self) -> Option<DateTime> {
        self.created
    }

    /// Get all items
    pub fn items(&self) -> &[Item<'static>] {
        &self.items
    }

    /// Build the basket, created at the fixture's creation time or now.
    ///
    /// # Errors
    ///
    /// Returns an error if the basket rejects an item.
    pub fn basket(&self) -> Result<Basket<'static>, FixtureError> {
        let created = self.created.unwrap_or_else(|| Zoned::now().datetime());

        self.basket_at(created)
    }

    /// Build the basket with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the basket rejects an item.
    pub fn basket_at(&self, created: DateTime) -> Result<Basket<'static>, FixtureError> {
        Ok(Basket::with_items(
            self.items.iter().cloned(),
            self.currency,
            created,
        )?)
    }
}

impl TryFrom<BasketFixture> for Fixture {
    type Error = FixtureError;

    fn try_from(fixture: BasketFixture) -> Result<Self, Self::Error> {
        let items = fixture
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let currency = match (&fixture.currency, items.first()) {
            (Some(code), _) => parse_currency(code)?,
            (None, Some(first)) => first.price().currency(),
            (None, None) => return Err(FixtureError::NoCurrency),
        };

        if let Some(item) = items
            .iter()
            .find(|item| item.price().currency() != currency)
        {
            return Err(FixtureError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                item.price().currency().iso_alpha_code.to_string(),
            ));
        }

        Ok(Self {
            currency,
            created: fixture.created,
            items,
        })
    }
}
