use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::investments::{AssetType, Investment};
use crate::transactions::reconciler::{reconcile, PositionEffect};
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::{TransactionEvent, TransactionSide};

fn event(side: TransactionSide, quantity: Decimal, price: Decimal, fees: Decimal) -> TransactionEvent {
    TransactionEvent {
        user_id: "user-1".to_string(),
        symbol: "AAPL".to_string(),
        side,
        quantity,
        price,
        fees,
        asset_type: AssetType::Stock,
        executed_at: Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0).unwrap(),
    }
}

fn position(units: Decimal, cost_basis: Decimal, avg: Decimal) -> Investment {
    Investment {
        id: "inv-1".to_string(),
        user_id: "user-1".to_string(),
        asset_type: AssetType::Stock,
        symbol: "AAPL".to_string(),
        units,
        avg_buy_price: avg,
        cost_basis,
        current_value: units * avg,
        last_price: avg,
        last_price_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn expect_upsert(effect: PositionEffect) -> Investment {
    match effect {
        PositionEffect::Upsert(inv) => inv,
        other => panic!("expected upsert, got {:?}", other),
    }
}

#[test]
fn first_buy_creates_position_with_fees_in_basis() {
    // The worked example: 10 units @ $100 + $5 fee.
    let effect = reconcile(None, &event(TransactionSide::Buy, dec!(10), dec!(100), dec!(5))).unwrap();
    let inv = expect_upsert(effect);

    assert!(inv.id.is_empty(), "new position id is assigned by storage");
    assert_eq!(inv.units, dec!(10));
    assert_eq!(inv.cost_basis, dec!(1005));
    assert_eq!(inv.avg_buy_price, dec!(100.5));
    assert_eq!(inv.current_value, dec!(1000));
    assert_eq!(inv.last_price, dec!(100));
    assert_eq!(inv.asset_type, AssetType::Stock);
}

#[test]
fn subsequent_buy_recomputes_average_from_basis() {
    let existing = position(dec!(10), dec!(1005), dec!(100.5));
    let effect = reconcile(
        Some(&existing),
        &event(TransactionSide::Buy, dec!(10), dec!(120), dec!(0)),
    )
    .unwrap();
    let inv = expect_upsert(effect);

    assert_eq!(inv.id, "inv-1");
    assert_eq!(inv.units, dec!(20));
    assert_eq!(inv.cost_basis, dec!(2205));
    assert_eq!(inv.avg_buy_price, dec!(110.25));
    // Mark-to-market at the buy price
    assert_eq!(inv.current_value, dec!(2400));
}

#[test]
fn buy_sequence_sums_quantities_and_costs() {
    // units == sum of quantities, cost_basis == sum of (qty*price + fees)
    let buys = [
        (dec!(3), dec!(50), dec!(1)),
        (dec!(2), dec!(55), dec!(0.5)),
        (dec!(7.5), dec!(48.2), dec!(2)),
    ];
    let mut current: Option<Investment> = None;
    for (qty, price, fees) in buys {
        let effect = reconcile(
            current.as_ref(),
            &event(TransactionSide::Buy, qty, price, fees),
        )
        .unwrap();
        current = Some(expect_upsert(effect));
    }
    let inv = current.unwrap();
    let expected_units: Decimal = buys.iter().map(|(q, _, _)| *q).sum();
    let expected_basis: Decimal = buys.iter().map(|(q, p, f)| q * p + f).sum();
    assert_eq!(inv.units, expected_units);
    assert_eq!(inv.cost_basis, expected_basis);
    assert_eq!(inv.avg_buy_price, expected_basis / expected_units);
}

#[test]
fn partial_sell_reduces_basis_proportionally() {
    // Worked example continued: sell 4 of 10 units @ $120.
    let existing = position(dec!(10), dec!(1005), dec!(100.5));
    let effect = reconcile(
        Some(&existing),
        &event(TransactionSide::Sell, dec!(4), dec!(120), dec!(0)),
    )
    .unwrap();
    let inv = expect_upsert(effect);

    assert_eq!(inv.units, dec!(6));
    assert_eq!(inv.cost_basis, dec!(603.0));
    // Average is NOT recomputed on sells.
    assert_eq!(inv.avg_buy_price, dec!(100.5));
    assert_eq!(inv.current_value, dec!(720));
    assert_eq!(inv.last_price, dec!(120));
}

#[test]
fn sell_proportionality_invariant_holds() {
    // remaining_basis / old_basis == remaining_units / old_units
    let existing = position(dec!(7), dec!(941.33), dec!(134.49));
    let effect = reconcile(
        Some(&existing),
        &event(TransactionSide::Sell, dec!(2.5), dec!(150), dec!(0)),
    )
    .unwrap();
    let inv = expect_upsert(effect);

    let basis_ratio = inv.cost_basis / existing.cost_basis;
    let unit_ratio = (existing.units - dec!(2.5)) / existing.units;
    let diff = (basis_ratio - unit_ratio).abs();
    assert!(diff < dec!(0.0000000001), "ratio drift: {}", diff);
}

#[test]
fn full_sell_deletes_position_regardless_of_price() {
    for price in [dec!(0.01), dec!(120), dec!(99999)] {
        let existing = position(dec!(10), dec!(1005), dec!(100.5));
        let effect = reconcile(
            Some(&existing),
            &event(TransactionSide::Sell, dec!(10), price, dec!(0)),
        )
        .unwrap();
        assert_eq!(
            effect,
            PositionEffect::Delete {
                investment_id: "inv-1".to_string()
            }
        );
    }
}

#[test]
fn oversell_fails_without_touching_position() {
    let existing = position(dec!(10), dec!(1005), dec!(100.5));
    let before = existing.clone();
    let err = reconcile(
        Some(&existing),
        &event(TransactionSide::Sell, dec!(10.000001), dec!(120), dec!(0)),
    )
    .unwrap_err();
    assert_eq!(err, TransactionError::InsufficientUnits);
    assert_eq!(existing, before);
}

#[test]
fn sell_without_position_is_insufficient_units() {
    let err = reconcile(None, &event(TransactionSide::Sell, dec!(1), dec!(10), dec!(0))).unwrap_err();
    assert_eq!(err, TransactionError::InsufficientUnits);
}

#[test]
fn non_positive_quantity_rejected_before_anything_else() {
    for qty in [dec!(0), dec!(-5)] {
        let err = reconcile(None, &event(TransactionSide::Buy, qty, dec!(100), dec!(0))).unwrap_err();
        assert_eq!(err, TransactionError::InvalidQuantity);
    }
}

#[test]
fn non_positive_price_rejected() {
    for price in [dec!(0), dec!(-1)] {
        let err = reconcile(None, &event(TransactionSide::Buy, dec!(1), price, dec!(0))).unwrap_err();
        assert_eq!(err, TransactionError::InvalidPrice);
    }
}

#[test]
fn negative_fees_rejected() {
    let err = reconcile(None, &event(TransactionSide::Buy, dec!(1), dec!(100), dec!(-0.5)))
        .unwrap_err();
    assert_eq!(err, TransactionError::InvalidFees);
}
