//! Halloween Promotion

use jiff::civil::DateTime;
use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    rules::{BasketRule, RuleError, applications::RuleApplication, types::hand_out_gift},
};

const OCTOBER: i8 = 10;

/// Skeleton suit and 13.00 off for baskets started and checked out in October.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalloweenPromotion;

impl HalloweenPromotion {
    /// Complimentary item added to matching baskets.
    pub const GIFT: &'static str = "Promo - Creepy Skeleton Suit";

    /// Amount taken off the total, in major units.
    pub fn discount() -> Decimal {
        Decimal::new(13, 0)
    }
}

impl BasketRule for HalloweenPromotion {
    fn name(&self) -> &'static str {
        "HalloweenPromotion"
    }

    fn matches(&self, basket: &Basket<'_>, now: DateTime) -> bool {
        now.month() == OCTOBER && basket.created().month() == OCTOBER
    }

    fn apply<'a>(&self, basket: &mut Basket<'a>) -> Result<RuleApplication<'a>, RuleError> {
        hand_out_gift(self.name(), basket, Self::GIFT, Self::discount())
    }
}
