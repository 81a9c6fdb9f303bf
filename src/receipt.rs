//! Receipt
//!
//! Presentation of a processed basket: a report of the basket before processing, one line per
//! applied promotion, and the basket and totals afterwards.

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{basket::Basket, engine::PromotionOutcome, rules::applications::RuleApplication};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Final receipt for a processed basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    outcome: PromotionOutcome<'a>,
}

impl<'a> Receipt<'a> {
    /// Create a receipt from the outcome of processing a basket.
    pub fn new(outcome: PromotionOutcome<'a>) -> Self {
        Self { outcome }
    }

    /// Total before any promotion was applied.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.outcome.total_before()
    }

    /// Total after all promotions were applied.
    pub fn total(&self) -> Money<'a, Currency> {
        self.outcome.total_after()
    }

    /// Calculate the savings made by applying promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.outcome.savings()
    }

    /// Write one notice per applied promotion, in application order.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_applications(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "Applying promotions")?;

        for app in self.outcome.applications() {
            writeln!(out, "{}", application_line(app))?;
        }

        writeln!(
            out,
            "Promotions applied: {}",
            self.outcome.applications().len()
        )?;

        Ok(())
    }

    /// Write the applied promotions, the processed basket and the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        basket: &Basket<'_>,
    ) -> Result<(), ReceiptError> {
        self.write_applications(&mut out)?;
        writeln!(out)?;

        write_basket_report(&mut out, "AFTER Promotions", basket)?;

        let savings = self.savings()?;

        writeln!(out, " Subtotal: {:>14}", self.subtotal().to_string())?;
        writeln!(out, " Savings:  {:>14}", savings.to_string())?;

        Ok(())
    }
}

/// Write a titled table of the basket items followed by its running total.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_basket_report(
    mut out: impl io::Write,
    title: &str,
    basket: &Basket<'_>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Price"]);

    for (idx, item) in basket.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            item.name().to_string(),
            item.price().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "=== {title} ===")?;
    writeln!(out, "Created: {}", basket.created())?;
    writeln!(out, "{table}")?;
    writeln!(out, " Total:    {:>14}", basket.total().to_string())?;

    Ok(())
}

fn application_line(app: &RuleApplication<'_>) -> String {
    match &app.gift {
        Some(gift) => format!(
            "Applying {} promotion -{} (added {gift})",
            app.rule, app.discount
        ),
        None => format!("Applying {} promotion -{}", app.rule, app.discount),
    }
}
