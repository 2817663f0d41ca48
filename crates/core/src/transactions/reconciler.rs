//! Position reconciler: folds one buy/sell event into the aggregate
//! position held for a (user, symbol) pair.
//!
//! Pure function from (old state, event) to (new state | deletion). The
//! surrounding service persists the appended event together with the
//! position delta as a single atomic unit; nothing here performs I/O.

use rust_decimal::Decimal;

use crate::investments::Investment;
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::{TransactionEvent, TransactionSide};

/// Outcome of reconciling one event against the current position.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionEffect {
    /// Create or replace the investment row. A new position carries an empty
    /// id; the storage layer assigns one on insert.
    Upsert(Investment),
    /// Remove the investment row (a sell reduced units to exactly zero).
    Delete { investment_id: String },
}

/// Applies a single buy/sell event to the existing position, if any.
///
/// Validation order: quantity, then price, then (for sells) sufficient
/// units. The existing position is never mutated; failures leave it
/// untouched by construction.
///
/// Average buy price is recomputed on buys only. Sells reduce the cost
/// basis proportionally (`sold_qty / held_units` of the basis) and leave
/// the average where it was - weighted-average-cost accounting without lot
/// tracking. A sell that empties the position deletes it rather than
/// keeping a zero-unit row around for every symbol a user ever exited.
pub fn reconcile(
    existing: Option<&Investment>,
    event: &TransactionEvent,
) -> Result<PositionEffect, TransactionError> {
    if event.quantity <= Decimal::ZERO {
        return Err(TransactionError::InvalidQuantity);
    }
    if event.price <= Decimal::ZERO {
        return Err(TransactionError::InvalidPrice);
    }
    if event.fees < Decimal::ZERO {
        return Err(TransactionError::InvalidFees);
    }

    match event.side {
        TransactionSide::Buy => Ok(PositionEffect::Upsert(apply_buy(existing, event))),
        TransactionSide::Sell => apply_sell(existing, event),
        // Cash-flow sides never reach the reconciler.
        _ => unreachable!("reconcile called with non-position side"),
    }
}

fn apply_buy(existing: Option<&Investment>, event: &TransactionEvent) -> Investment {
    match existing {
        Some(position) => {
            let new_units = position.units + event.quantity;
            let new_cost_basis = position.cost_basis + event.total_cost();
            // new_units > 0 here: existing units are non-negative and the
            // event quantity was validated positive.
            let new_avg_price = new_cost_basis / new_units;
            Investment {
                id: position.id.clone(),
                user_id: position.user_id.clone(),
                asset_type: position.asset_type,
                symbol: position.symbol.clone(),
                units: new_units,
                avg_buy_price: new_avg_price,
                cost_basis: new_cost_basis,
                // Mark-to-market with the transaction's own price; the
                // periodic refresh supersedes this.
                current_value: new_units * event.price,
                last_price: event.price,
                last_price_at: event.executed_at,
            }
        }
        None => Investment {
            id: String::new(),
            user_id: event.user_id.clone(),
            asset_type: event.asset_type,
            symbol: event.symbol.clone(),
            units: event.quantity,
            // Basis includes fees, so the average reflects the all-in cost
            // per unit from the first fill onwards.
            avg_buy_price: event.total_cost() / event.quantity,
            cost_basis: event.total_cost(),
            current_value: event.quantity * event.price,
            last_price: event.price,
            last_price_at: event.executed_at,
        },
    }
}

fn apply_sell(
    existing: Option<&Investment>,
    event: &TransactionEvent,
) -> Result<PositionEffect, TransactionError> {
    let position = existing.ok_or(TransactionError::InsufficientUnits)?;

    if event.quantity > position.units {
        return Err(TransactionError::InsufficientUnits);
    }

    let new_units = position.units - event.quantity;
    if new_units.is_zero() {
        return Ok(PositionEffect::Delete {
            investment_id: position.id.clone(),
        });
    }

    // Proportional cost-basis reduction: the sold fraction of the holding
    // carries the same fraction of the basis out with it.
    let cost_basis_sold = (event.quantity / position.units) * position.cost_basis;
    let new_cost_basis = position.cost_basis - cost_basis_sold;

    Ok(PositionEffect::Upsert(Investment {
        id: position.id.clone(),
        user_id: position.user_id.clone(),
        asset_type: position.asset_type,
        symbol: position.symbol.clone(),
        units: new_units,
        // Unchanged on sells.
        avg_buy_price: position.avg_buy_price,
        cost_basis: new_cost_basis,
        current_value: new_units * event.price,
        last_price: event.price,
        last_price_at: event.executed_at,
    }))
}
