//! Rule Types

use rust_decimal::Decimal;
use rusty_money::Money;

use crate::{
    basket::Basket,
    items::Item,
    rules::{RuleError, applications::RuleApplication},
};

pub mod big_orders;
pub mod christmas;
pub mod halloween;

#[cfg(test)]
pub(crate) mod test_support;

pub use big_orders::DiscountForBigOrdersPromotion;
pub use christmas::ChristmasPromotion;
pub use halloween::HalloweenPromotion;

/// Add a free item to the basket, then take `discount` (in major units) off the total.
fn hand_out_gift<'a>(
    rule: &str,
    basket: &mut Basket<'a>,
    gift: &str,
    discount: Decimal,
) -> Result<RuleApplication<'a>, RuleError> {
    let currency = basket.currency();

    basket.add_item(Item::complimentary(gift, currency))?;

    let discount = Money::from_decimal(discount, currency);
    basket.decrease_total(discount)?;

    Ok(RuleApplication::new(rule, discount).with_gift(gift))
}
