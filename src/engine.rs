//! Promotion Engine

use jiff::{Zoned, civil::DateTime};
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    basket::Basket,
    rules::{Rule, RuleError, applications::RuleApplication},
};

/// Errors raised while processing a basket.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A matching rule failed to apply. Rules after it were not attempted.
    #[error("failed to apply {rule}: {source}")]
    Rule {
        /// Name of the failing rule
        rule: String,

        /// Underlying rule error
        #[source]
        source: RuleError,
    },
}

/// Structured result of running the engine over one basket.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionOutcome<'a> {
    total_before: Money<'a, Currency>,
    total_after: Money<'a, Currency>,
    applications: SmallVec<[RuleApplication<'a>; 4]>,
}

impl<'a> PromotionOutcome<'a> {
    /// Basket total before any rule was applied.
    pub fn total_before(&self) -> Money<'a, Currency> {
        self.total_before
    }

    /// Basket total after all matching rules were applied.
    pub fn total_after(&self) -> Money<'a, Currency> {
        self.total_after
    }

    /// Applied rules, in application order.
    pub fn applications(&self) -> &[RuleApplication<'a>] {
        &self.applications
    }

    /// Names of the applied rules, in application order.
    pub fn applied_rules(&self) -> impl Iterator<Item = &str> {
        self.applications.iter().map(|app| app.rule.as_str())
    }

    /// Amount taken off the basket total by all applied rules.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.total_before.sub(self.total_after)
    }
}

/// Applies every matching rule to a basket, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PromotionEngine {
    rules: Vec<Rule>,
}

impl PromotionEngine {
    /// Create an engine over the given rules. Their order is kept as given.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Registered rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Process the basket, evaluating rules at the current local time.
    ///
    /// # Errors
    ///
    /// See [`PromotionEngine::process_at`].
    pub fn process<'a>(
        &self,
        basket: &mut Basket<'a>,
    ) -> Result<PromotionOutcome<'a>, EngineError> {
        self.process_at(basket, Zoned::now().datetime())
    }

    /// Process the basket, evaluating rules as of `now`.
    ///
    /// Each rule sees the basket as left by the rules before it; a rule that lowers the total can
    /// stop a later threshold rule from matching.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Rule`] for the first matching rule that fails to apply. The basket
    /// keeps the changes made by rules applied before it.
    #[tracing::instrument(
        name = "engine.process",
        skip_all,
        fields(rules = self.rules.len(), items = basket.len(), now = %now)
    )]
    pub fn process_at<'a>(
        &self,
        basket: &mut Basket<'a>,
        now: DateTime,
    ) -> Result<PromotionOutcome<'a>, EngineError> {
        let total_before = basket.total();
        let mut applications = SmallVec::new();

        for rule in &self.rules {
            if !rule.matches(basket, now) {
                debug!(rule = rule.name(), "rule did not match");
                continue;
            }

            let application = rule.apply(basket).map_err(|source| EngineError::Rule {
                rule: rule.name().to_string(),
                source,
            })?;

            info!(
                rule = %application.rule,
                discount = %application.discount,
                total = %basket.total(),
                "applied promotion"
            );

            applications.push(application);
        }

        Ok(PromotionOutcome {
            total_before,
            total_after: basket.total(),
            applications,
        })
    }
}
