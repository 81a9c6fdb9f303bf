//! Item Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, items::Item};

/// Item definition from YAML fixtures
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Price string (e.g., "2.50 GBP")
    pub price: String,
}

impl TryFrom<ItemFixture> for Item<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ItemFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(Item::new(fixture.name, price))
    }
}

/// Parse a price string such as `"2.50 GBP"` into money.
///
/// # Errors
///
/// - [`FixtureError::InvalidPrice`]: the string is not `<amount> <currency>` or the amount is not
///   a decimal number.
/// - [`FixtureError::UnknownCurrency`]: the currency is not an ISO 4217 code.
pub fn parse_price(value: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let mut parts = value.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(value.to_string()));
    };

    let amount =
        Decimal::from_str(amount).map_err(|_err| FixtureError::InvalidPrice(value.to_string()))?;

    Ok(Money::from_decimal(amount, parse_currency(code)?))
}

/// Look up an ISO 4217 currency by its alphabetic code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] if the code is not known.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    iso::find(code).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("5.00 GBP")?, Money::from_minor(500, iso::GBP));
        assert_eq!(
            parse_price("1400 USD")?,
            Money::from_minor(140_000, iso::USD)
        );
        assert_eq!(
            parse_price(" 999.99   EUR ")?,
            Money::from_minor(99_999, iso::EUR)
        );

        Ok(())
    }

    #[test]
    fn rejects_malformed_prices() {
        for value in ["", "5.00", "GBP", "five GBP", "5.00 GBP extra"] {
            assert!(
                matches!(parse_price(value), Err(FixtureError::InvalidPrice(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_currency() {
        assert!(matches!(
            parse_price("5.00 XYZ"),
            Err(FixtureError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }

    #[test]
    fn item_fixture_converts_to_item() -> TestResult {
        let item: Item<'static> = ItemFixture {
            name: "Hereditary Bluray".to_string(),
            price: "15.00 GBP".to_string(),
        }
        .try_into()?;

        assert_eq!(item.name(), "Hereditary Bluray");
        assert_eq!(item.price(), &Money::from_minor(1_500, iso::GBP));

        Ok(())
    }
}
