//! Basket

use jiff::{Zoned, civil::DateTime};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::items::Item;

/// Errors related to basket mutation.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// An amount's currency differs from the basket currency (amount currency, basket currency).
    #[error("amount has currency {0}, but basket has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Basket
///
/// The total is a running sum: every added item increases it by the item's price and every
/// discount decreases it. It is never recomputed from the items, so it can drift below the item
/// sum (or below zero) once promotions have been applied.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    items: Vec<Item<'a>>,
    total: Money<'a, Currency>,
    created: DateTime,
    currency: &'static Currency,
}

impl<'a> Basket<'a> {
    /// Create a new, empty basket created at the current local time.
    pub fn new(currency: &'static Currency) -> Self {
        Self::created_at(currency, Zoned::now().datetime())
    }

    /// Create a new, empty basket with an explicit creation time.
    pub fn created_at(currency: &'static Currency, created: DateTime) -> Self {
        Basket {
            items: Vec::new(),
            total: Money::from_minor(0, currency),
            created,
            currency,
        }
    }

    /// Create a new basket with the given items, created at the given time.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if any item's currency differs from the basket currency.
    pub fn with_items(
        items: impl IntoIterator<Item = Item<'a>>,
        currency: &'static Currency,
        created: DateTime,
    ) -> Result<Self, BasketError> {
        let mut basket = Self::created_at(currency, created);

        items
            .into_iter()
            .try_for_each(|item| basket.add_item(item))?;

        Ok(basket)
    }

    /// Append an item and increase the running total by its price.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if the item is priced in a different currency.
    pub fn add_item(&mut self, item: Item<'a>) -> Result<(), BasketError> {
        self.check_currency(item.price())?;

        self.total = self.total.add(*item.price())?;
        self.items.push(item);

        Ok(())
    }

    /// Decrease the running total by `amount`.
    ///
    /// There is no floor: over-discounting leaves a negative total.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if the amount is in a different currency.
    pub fn decrease_total(&mut self, amount: Money<'a, Currency>) -> Result<(), BasketError> {
        self.check_currency(&amount)?;

        self.total = self.total.sub(amount)?;

        Ok(())
    }

    /// Running total of the basket.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// When the basket was created.
    pub fn created(&self) -> DateTime {
        self.created
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    /// Iterate over the items in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Item<'a>> {
        self.items.iter()
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the basket.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn check_currency(&self, amount: &Money<'_, Currency>) -> Result<(), BasketError> {
        let amount_currency = amount.currency();

        if amount_currency == self.currency {
            Ok(())
        } else {
            Err(BasketError::CurrencyMismatch(
                amount_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn created() -> DateTime {
        date(2024, 6, 1).at(12, 0, 0, 0)
    }

    fn test_items<'a>() -> [Item<'a>; 3] {
        [
            Item::new("The Shinning Book", Money::from_minor(500, iso::GBP)),
            Item::new("Hereditary Bluray", Money::from_minor(1500, iso::GBP)),
            Item::new("Phone", Money::from_minor(140_000, iso::GBP)),
        ]
    }

    #[test]
    fn new_basket_is_empty_with_zero_total() {
        let basket = Basket::new(iso::GBP);

        assert!(basket.is_empty());
        assert_eq!(basket.total(), Money::from_minor(0, iso::GBP));
        assert_eq!(basket.currency(), iso::GBP);
    }

    #[test]
    fn created_at_keeps_creation_time() {
        let basket = Basket::created_at(iso::GBP, created());

        assert_eq!(basket.created(), created());
    }

    #[test]
    fn add_item_appends_and_increments_total() -> TestResult {
        let mut basket = Basket::created_at(iso::GBP, created());

        for item in test_items() {
            basket.add_item(item)?;
        }

        assert_eq!(basket.len(), 3);
        assert_eq!(basket.total(), Money::from_minor(142_000, iso::GBP));

        let names: Vec<_> = basket.iter().map(Item::name).collect();

        assert_eq!(names, ["The Shinning Book", "Hereditary Bluray", "Phone"]);

        Ok(())
    }

    #[test]
    fn total_is_running_sum_of_prices_minus_discounts() -> TestResult {
        let mut basket = Basket::created_at(iso::GBP, created());

        basket.add_item(Item::new("a", Money::from_minor(1_000, iso::GBP)))?;
        basket.decrease_total(Money::from_minor(250, iso::GBP))?;
        basket.add_item(Item::new("b", Money::from_minor(330, iso::GBP)))?;
        basket.decrease_total(Money::from_minor(80, iso::GBP))?;

        assert_eq!(basket.total(), Money::from_minor(1_000, iso::GBP));

        Ok(())
    }

    #[test]
    fn decimal_prices_accumulate_exactly() -> TestResult {
        let mut basket = Basket::created_at(iso::USD, created());

        for _ in 0..10 {
            basket.add_item(Item::new("dime", Money::from_minor(10, iso::USD)))?;
        }

        assert_eq!(basket.total(), Money::from_minor(100, iso::USD));

        Ok(())
    }

    #[test]
    fn decrease_total_can_go_negative() -> TestResult {
        let mut basket = Basket::created_at(iso::GBP, created());

        basket.add_item(Item::new("sticker", Money::from_minor(500, iso::GBP)))?;
        basket.decrease_total(Money::from_minor(1_300, iso::GBP))?;

        assert_eq!(basket.total(), Money::from_minor(-800, iso::GBP));

        Ok(())
    }

    #[test]
    fn decrease_total_does_not_touch_items() -> TestResult {
        let mut basket = Basket::with_items(test_items(), iso::GBP, created())?;

        basket.decrease_total(Money::from_minor(10_000, iso::GBP))?;

        assert_eq!(basket.len(), 3);

        Ok(())
    }

    #[test]
    fn add_item_currency_mismatch_errors() {
        let mut basket = Basket::created_at(iso::GBP, created());

        let result = basket.add_item(Item::new("import", Money::from_minor(100, iso::USD)));

        assert_eq!(
            result,
            Err(BasketError::CurrencyMismatch(
                iso::USD.iso_alpha_code,
                iso::GBP.iso_alpha_code
            ))
        );
        assert!(basket.is_empty());
        assert_eq!(basket.total(), Money::from_minor(0, iso::GBP));
    }

    #[test]
    fn decrease_total_currency_mismatch_errors() -> TestResult {
        let mut basket = Basket::with_items(test_items(), iso::GBP, created())?;

        let result = basket.decrease_total(Money::from_minor(100, iso::EUR));

        assert!(matches!(result, Err(BasketError::CurrencyMismatch(_, _))));
        assert_eq!(basket.total(), Money::from_minor(142_000, iso::GBP));

        Ok(())
    }

    #[test]
    fn with_items_stops_at_first_mismatch() {
        let items = [
            Item::new("a", Money::from_minor(100, iso::GBP)),
            Item::new("b", Money::from_minor(100, iso::USD)),
        ];

        let result = Basket::with_items(items, iso::GBP, created());

        assert!(matches!(result, Err(BasketError::CurrencyMismatch(_, _))));
    }
}
