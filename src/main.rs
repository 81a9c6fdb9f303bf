//! Basket Rules CLI
//!
//! Loads a basket, runs the bundled promotions over it and prints the before/after report.

use std::io::{self, Write};

use anyhow::{Context, Result};
use basket_rules::{
    config::Config,
    engine::PromotionEngine,
    fixtures::Fixture,
    observability::init_subscriber,
    receipt::{Receipt, write_basket_report},
    rules::standard_rules,
};
use jiff::Zoned;
use tracing::info;

fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    init_subscriber(&config.logging)?;

    let fixture = match &config.fixture {
        Some(path) => Fixture::from_path(path)
            .with_context(|| format!("failed to load fixture {}", path.display()))?,
        None => Fixture::demo()?,
    };

    let created = config
        .created
        .or(fixture.created())
        .unwrap_or_else(|| Zoned::now().datetime());

    let mut basket = fixture.basket_at(created)?;

    let engine = PromotionEngine::new(standard_rules());

    let now = config.at.unwrap_or_else(|| Zoned::now().datetime());

    info!(
        rules = engine.len(),
        items = basket.len(),
        created = %basket.created(),
        now = %now,
        "processing basket"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_basket_report(&mut handle, "BEFORE Promotions", &basket)?;
    writeln!(handle)?;

    let outcome = engine.process_at(&mut basket, now)?;

    Receipt::new(outcome).write_to(&mut handle, &basket)?;

    Ok(())
}
