//! Rule Applications

use rusty_money::{Money, iso::Currency};

/// Record of a single rule applied to a basket.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleApplication<'a> {
    /// Name of the rule that was applied
    pub rule: String,

    /// Amount taken off the basket total
    pub discount: Money<'a, Currency>,

    /// Name of the complimentary item added to the basket, if any
    pub gift: Option<String>,
}

impl<'a> RuleApplication<'a> {
    /// Create an application record for a plain discount.
    pub fn new(rule: impl Into<String>, discount: Money<'a, Currency>) -> Self {
        Self {
            rule: rule.into(),
            discount,
            gift: None,
        }
    }

    /// Record the complimentary item handed out alongside the discount.
    #[must_use]
    pub fn with_gift(mut self, gift: impl Into<String>) -> Self {
        self.gift = Some(gift.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn with_gift_records_item_name() {
        let app = RuleApplication::new("ChristmasPromotion", Money::from_minor(1000, iso::GBP))
            .with_gift("Promo - Santa Hat");

        assert_eq!(app.rule, "ChristmasPromotion");
        assert_eq!(app.discount, Money::from_minor(1000, iso::GBP));
        assert_eq!(app.gift.as_deref(), Some("Promo - Santa Hat"));
    }
}
