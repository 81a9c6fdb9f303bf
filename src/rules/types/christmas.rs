//! Christmas Promotion

use jiff::civil::DateTime;
use rust_decimal::Decimal;

use crate::{
    basket::Basket,
    rules::{BasketRule, RuleError, applications::RuleApplication, types::hand_out_gift},
};

const DECEMBER: i8 = 12;

/// Santa hat and 10.00 off for baskets started in the last days before Christmas.
///
/// Matches when both the evaluation time and the basket creation time fall in December, and the
/// basket was created after the 20th.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChristmasPromotion;

impl ChristmasPromotion {
    /// Complimentary item added to matching baskets.
    pub const GIFT: &'static str = "Promo - Santa Hat";

    /// Creation day-of-month that must be exceeded.
    pub const AFTER_DAY: i8 = 20;

    /// Amount taken off the total, in major units.
    pub fn discount() -> Decimal {
        Decimal::new(10, 0)
    }
}

impl BasketRule for ChristmasPromotion {
    fn name(&self) -> &'static str {
        "ChristmasPromotion"
    }

    fn matches(&self, basket: &Basket<'_>, now: DateTime) -> bool {
        let created = basket.created();

        now.month() == DECEMBER && created.month() == DECEMBER && created.day() > Self::AFTER_DAY
    }

    fn apply<'a>(&self, basket: &mut Basket<'a>) -> Result<RuleApplication<'a>, RuleError> {
        hand_out_gift(self.name(), basket, Self::GIFT, Self::discount())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::rules::types::test_support::{at, basket_created};

    use super::*;

    #[test]
    fn matches_late_december_basket_in_december() {
        let basket = basket_created(at(2024, 12, 25), 0);

        assert!(ChristmasPromotion.matches(&basket, at(2024, 12, 26)));
    }

    #[test]
    fn day_twenty_does_not_match_but_twenty_one_does() {
        let on_20th = basket_created(at(2024, 12, 20), 0);
        let on_21st = basket_created(at(2024, 12, 21), 0);

        assert!(!ChristmasPromotion.matches(&on_20th, at(2024, 12, 22)));
        assert!(ChristmasPromotion.matches(&on_21st, at(2024, 12, 22)));
    }

    #[test]
    fn november_basket_evaluated_in_december_does_not_match() {
        let basket = basket_created(at(2024, 11, 28), 0);

        assert!(!ChristmasPromotion.matches(&basket, at(2024, 12, 24)));
    }

    #[test]
    fn december_basket_evaluated_in_january_does_not_match() {
        let basket = basket_created(at(2024, 12, 30), 0);

        assert!(!ChristmasPromotion.matches(&basket, at(2025, 1, 2)));
    }

    #[test]
    fn apply_adds_santa_hat_and_takes_ten_off() -> TestResult {
        let mut basket = basket_created(at(2024, 12, 24), 5_000);

        let app = ChristmasPromotion.apply(&mut basket)?;

        assert_eq!(basket.len(), 2);
        assert_eq!(
            basket.items().last().map(|item| item.name()),
            Some(ChristmasPromotion::GIFT)
        );
        assert_eq!(basket.total(), Money::from_minor(4_000, iso::GBP));
        assert_eq!(app.discount, Money::from_minor(1_000, iso::GBP));
        assert_eq!(app.gift.as_deref(), Some(ChristmasPromotion::GIFT));

        Ok(())
    }
}
