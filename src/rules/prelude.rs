//! Rule extension prelude.
//!
//! Use this when implementing custom rules.

pub use crate::{
    basket::{Basket, BasketError},
    items::Item,
    rules::{BasketRule, Rule, RuleError, applications::RuleApplication, rule},
};
