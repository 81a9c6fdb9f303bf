//! Promotion Rules
//!
//! A rule is a predicate/effect pair: [`BasketRule::matches`] decides whether a basket is eligible
//! and [`BasketRule::apply`] mutates it. Rules carry no state, so one instance can be shared by any
//! number of engines and threads.

use std::{fmt, sync::Arc};

use jiff::civil::DateTime;
use thiserror::Error;

use crate::basket::{Basket, BasketError};

pub mod applications;
pub mod prelude;
pub mod types;

use self::{
    applications::RuleApplication,
    types::{ChristmasPromotion, DiscountForBigOrdersPromotion, HalloweenPromotion},
};

/// Errors raised while applying a rule.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// The rule could not mutate the basket.
    #[error(transparent)]
    Basket(#[from] BasketError),
}

/// Promotion rule capability.
pub trait BasketRule: fmt::Debug + Send + Sync {
    /// Display name of the rule.
    fn name(&self) -> &'static str;

    /// Return whether the rule applies to `basket` when evaluated at `now`.
    ///
    /// Must not mutate anything.
    fn matches(&self, basket: &Basket<'_>, now: DateTime) -> bool;

    /// Apply the rule to `basket`.
    ///
    /// Only called after [`BasketRule::matches`] returned `true` for the same basket.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] if the basket rejects the mutation.
    fn apply<'a>(&self, basket: &mut Basket<'a>) -> Result<RuleApplication<'a>, RuleError>;
}

/// Rule object held by the engine.
pub type Rule = Arc<dyn BasketRule>;

/// Convert any rule implementation into a shared rule object.
pub fn rule<R>(rule: R) -> Rule
where
    R: BasketRule + 'static,
{
    Arc::new(rule)
}

/// The bundled promotions, in their registration order.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        rule(ChristmasPromotion),
        rule(DiscountForBigOrdersPromotion),
        rule(HalloweenPromotion),
    ]
}
