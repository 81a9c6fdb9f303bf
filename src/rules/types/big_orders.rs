//! Discount For Big Orders Promotion

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use rusty_money::Money;

use crate::{
    basket::Basket,
    rules::{BasketRule, RuleError, applications::RuleApplication},
};

/// 100.00 off baskets whose running total is above 1000.00.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountForBigOrdersPromotion;

impl DiscountForBigOrdersPromotion {
    /// Total that must be strictly exceeded, in major units.
    pub fn threshold() -> Decimal {
        Decimal::new(1000, 0)
    }

    /// Amount taken off the total, in major units.
    pub fn discount() -> Decimal {
        Decimal::new(100, 0)
    }
}

impl BasketRule for DiscountForBigOrdersPromotion {
    fn name(&self) -> &'static str {
        "DiscountForBigOrdersPromotion"
    }

    fn matches(&self, basket: &Basket<'_>, _now: DateTime) -> bool {
        *basket.total().amount() > Self::threshold()
    }

    fn apply<'a>(&self, basket: &mut Basket<'a>) -> Result<RuleApplication<'a>, RuleError> {
        let discount = Money::from_decimal(Self::discount(), basket.currency());

        basket.decrease_total(discount)?;

        Ok(RuleApplication::new(self.name(), discount))
    }
}
