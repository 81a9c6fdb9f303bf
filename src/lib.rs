//! Basket Rules
//!
//! A small promotion engine: an ordered list of rules, each of which checks whether it applies to
//! a shopping basket and, when it does, adjusts the basket's running total.

pub mod basket;
pub mod config;
pub mod engine;
pub mod fixtures;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod receipt;
pub mod rules;
