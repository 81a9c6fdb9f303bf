use jiff::civil::{DateTime, date};
use rusty_money::{Money, iso};

use crate::{basket::Basket, items::Item};

pub(crate) fn at(year: i16, month: i8, day: i8) -> DateTime {
    date(year, month, day).at(10, 0, 0, 0)
}

pub(crate) fn basket_created<'a>(created: DateTime, total_minor: i64) -> Basket<'a> {
    let mut basket = Basket::created_at(iso::GBP, created);

    if total_minor != 0 {
        let added = basket.add_item(Item::new("Thing", Money::from_minor(total_minor, iso::GBP)));
        assert!(added.is_ok(), "test basket must accept GBP items");
    }

    basket
}
