//! Basket rules prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    engine::{EngineError, PromotionEngine, PromotionOutcome},
    fixtures::{Fixture, FixtureError},
    items::Item,
    receipt::{Receipt, ReceiptError, write_basket_report},
    rules::{
        BasketRule, Rule, RuleError,
        applications::RuleApplication,
        rule, standard_rules,
        types::{ChristmasPromotion, DiscountForBigOrdersPromotion, HalloweenPromotion},
    },
};
