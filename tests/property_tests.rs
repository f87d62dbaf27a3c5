//! Property-based tests for derived values and field validators.
//!
//! These run without a database and exercise the pure parts of the schema
//! over a wide range of inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use logistics_schema::entities::choices::{Choice, OrderStatus, ShipmentStatus, UserType, VehicleType};
use logistics_schema::entities::order_item::{self, line_total};
use logistics_schema::validation::{non_negative, validate_dimensions, validate_order_status};

// Strategies for generating test data
fn quantity_strategy() -> impl Strategy<Value = i32> {
    0i32..100_000
}

fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn measure_strategy() -> impl Strategy<Value = String> {
    (1u32..10_000, proptest::option::of(0u32..100)).prop_map(|(whole, frac)| match frac {
        Some(frac) => format!("{}.{}", whole, frac),
        None => whole.to_string(),
    })
}

fn item(quantity: i32, unit_price: Decimal) -> order_item::Model {
    order_item::Model {
        id: 1,
        order_id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        quantity,
        unit_price,
    }
}

// Property: line totals are always quantity times unit price
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn total_price_is_quantity_times_unit_price(
        quantity in quantity_strategy(),
        unit_price in price_strategy(),
    ) {
        let line = item(quantity, unit_price);
        prop_assert_eq!(line.total_price(), Decimal::from(quantity) * unit_price);
        prop_assert_eq!(line.total_price(), line_total(quantity, unit_price));
        prop_assert!(line.total_price() >= Decimal::ZERO);
    }

    #[test]
    fn total_price_is_additive_in_quantity(
        a in 0i32..50_000,
        b in 0i32..50_000,
        unit_price in price_strategy(),
    ) {
        prop_assert_eq!(
            line_total(a + b, unit_price),
            line_total(a, unit_price) + line_total(b, unit_price)
        );
    }

    #[test]
    fn non_negative_prices_validate(price in price_strategy()) {
        prop_assert!(non_negative(&price).is_ok());
        if !price.is_zero() {
            prop_assert!(non_negative(&-price).is_err());
        }
    }
}

// Property: dimension strings
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn three_measures_are_valid_dimensions(
        l in measure_strategy(),
        w in measure_strategy(),
        h in measure_strategy(),
    ) {
        let dims = format!("{}x{}x{}", l, w, h);
        prop_assert!(validate_dimensions(&dims).is_ok(), "rejected {}", dims);
    }

    #[test]
    fn two_measures_are_never_valid(l in measure_strategy(), w in measure_strategy()) {
        let dims = format!("{}x{}", l, w);
        prop_assert!(validate_dimensions(&dims).is_err());
    }
}

// Property: choice sets
proptest! {
    #[test]
    fn only_declared_order_statuses_validate(value in "[a-z_]{1,12}") {
        let declared = OrderStatus::values().contains(&value.as_str());
        prop_assert_eq!(validate_order_status(&value).is_ok(), declared);
    }
}

#[test]
fn every_choice_value_round_trips_through_parse() {
    for value in UserType::values() {
        assert_eq!(UserType::parse(value).map(|c| c.to_string()), Some(value.to_string()));
    }
    for value in OrderStatus::values() {
        assert_eq!(OrderStatus::parse(value).map(|c| c.to_string()), Some(value.to_string()));
    }
    for value in VehicleType::values() {
        assert_eq!(VehicleType::parse(value).map(|c| c.to_string()), Some(value.to_string()));
    }
    for value in ShipmentStatus::values() {
        assert_eq!(
            ShipmentStatus::parse(value).map(|c| c.to_string()),
            Some(value.to_string())
        );
    }
}
