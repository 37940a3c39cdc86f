//! Multi-round purchase cost allocation.
//!
//! The sale prices tokens across an ordered list of capped rounds. A quote
//! walks the rounds starting from the current one, filling each round's
//! remaining capacity before spilling into the next, and sums the cost of
//! every slice taken. A sold-out round contributes nothing but never halts
//! the walk. All balance math is integer; cost division floors.

use anchor_lang::prelude::*;

use crate::constants::TOKEN_UNIT;
use crate::errors::IcoError;
use crate::state::Round;

/// Result of pricing a requested amount against a round snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Payment base units owed for the filled portion.
    pub cost: u64,
    /// Token base units actually allocatable. Less than the request when
    /// the remaining rounds run out of capacity.
    pub filled: u64,
    /// First round that contributed tokens.
    pub round_start: u8,
    /// Last round that contributed tokens.
    pub round_end: u8,
}

/// Cost of one slice taken from a round: `price * take / TOKEN_UNIT`,
/// floored, with the multiplication widened to u128.
fn slice_cost(price: u64, take: u64) -> Result<u64> {
    let cost = (price as u128)
        .checked_mul(take as u128)
        .ok_or(IcoError::Overflow)?
        / TOKEN_UNIT as u128;
    if cost > u64::MAX as u128 {
        return err!(IcoError::Overflow);
    }
    Ok(cost as u64)
}

/// Prices `requested` token base units against the rounds from
/// `start_round` onward without touching them.
///
/// A zero request yields a zero quote. Exhausting every round while tokens
/// remain unfilled is not an error either: the quote reports the smaller
/// `filled` and the cost for that portion, and callers decide what a
/// partial fill means. The only failure mode is arithmetic overflow.
pub fn quote(requested: u64, rounds: &[Round], start_round: usize) -> Result<Quote> {
    let mut remaining = requested;
    let mut cost: u64 = 0;
    let mut round_start = start_round;
    let mut round_end = start_round;
    let mut touched = false;

    for (idx, round) in rounds.iter().enumerate().skip(start_round) {
        if remaining == 0 {
            break;
        }
        let available = round.available();
        if available == 0 {
            continue;
        }
        let take = remaining.min(available);
        cost = cost
            .checked_add(slice_cost(round.price, take)?)
            .ok_or(IcoError::Overflow)?;
        remaining -= take;
        if !touched {
            round_start = idx;
            touched = true;
        }
        round_end = idx;
    }

    Ok(Quote {
        cost,
        filled: requested - remaining,
        round_start: round_start as u8,
        round_end: round_end as u8,
    })
}

/// Token base units still sellable from `start_round` to the end of the
/// round list. Callers that must reject partial fills check this before
/// committing a purchase.
pub fn remaining_capacity(rounds: &[Round], start_round: usize) -> u64 {
    rounds
        .iter()
        .skip(start_round)
        .fold(0u64, |acc, round| acc.saturating_add(round.available()))
}

/// Walks the rounds exactly like [`quote`] but records each slice taken in
/// `round.sold`. Returns the same quote the read-only walk would have
/// produced for the same snapshot.
pub fn commit(requested: u64, rounds: &mut [Round], start_round: usize) -> Result<Quote> {
    let mut remaining = requested;
    let mut cost: u64 = 0;
    let mut round_start = start_round;
    let mut round_end = start_round;
    let mut touched = false;

    for (idx, round) in rounds.iter_mut().enumerate().skip(start_round) {
        if remaining == 0 {
            break;
        }
        let available = round.available();
        if available == 0 {
            continue;
        }
        let take = remaining.min(available);
        cost = cost
            .checked_add(slice_cost(round.price, take)?)
            .ok_or(IcoError::Overflow)?;
        round.sold = round.sold.checked_add(take).ok_or(IcoError::Overflow)?;
        remaining -= take;
        if !touched {
            round_start = idx;
            touched = true;
        }
        round_end = idx;
    }

    Ok(Quote {
        cost,
        filled: requested - remaining,
        round_start: round_start as u8,
        round_end: round_end as u8,
    })
}

/// Index of the first round from `start_round` with capacity left, used to
/// advance the sale's current round after a purchase. Sticks to the last
/// round once everything is sold out.
pub fn next_open_round(rounds: &[Round], start_round: usize) -> usize {
    rounds
        .iter()
        .enumerate()
        .skip(start_round)
        .find(|(_, round)| round.available() > 0)
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| rounds.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whole tokens in base units.
    fn tok(amount: u64) -> u64 {
        amount * TOKEN_UNIT
    }

    /// Whole USDT in 6-decimal base units.
    fn usdt(amount: u64) -> u64 {
        amount * 1_000_000
    }

    fn demo_rounds() -> Vec<Round> {
        vec![
            Round {
                price: usdt(1),
                cap: tok(1_000_000),
                sold: tok(750_000),
            },
            Round {
                price: usdt(2),
                cap: tok(500_000),
                sold: tok(50_000),
            },
            Round {
                price: usdt(3),
                cap: tok(250_000),
                sold: 0,
            },
        ]
    }

    #[test]
    fn request_spanning_two_rounds_sums_per_round_cost() {
        // 250k left at $1, then 50k more at $2 = 250k + 100k USDT.
        let q = quote(tok(300_000), &demo_rounds(), 0).unwrap();
        assert_eq!(q.cost, usdt(350_000));
        assert_eq!(q.filled, tok(300_000));
        assert_eq!(q.round_start, 0);
        assert_eq!(q.round_end, 1);
    }

    #[test]
    fn zero_request_costs_nothing() {
        let q = quote(0, &demo_rounds(), 0).unwrap();
        assert_eq!(q.cost, 0);
        assert_eq!(q.filled, 0);
    }

    #[test]
    fn sold_out_round_is_skipped_not_terminal() {
        let rounds = vec![
            Round {
                price: usdt(1),
                cap: tok(100),
                sold: tok(100),
            },
            Round {
                price: usdt(2),
                cap: tok(100),
                sold: 0,
            },
        ];
        let q = quote(tok(10), &rounds, 0).unwrap();
        assert_eq!(q.cost, usdt(20));
        assert_eq!(q.filled, tok(10));
        assert_eq!(q.round_start, 1);
        assert_eq!(q.round_end, 1);
    }

    #[test]
    fn start_round_closes_earlier_rounds() {
        // Round 0 still has capacity but the sale has moved past it.
        let q = quote(tok(10), &demo_rounds(), 1).unwrap();
        assert_eq!(q.cost, usdt(20));
        assert_eq!(q.round_start, 1);
    }

    #[test]
    fn partial_fill_reports_cost_of_fillable_portion_only() {
        let rounds = demo_rounds();
        let capacity = remaining_capacity(&rounds, 0);
        assert_eq!(capacity, tok(950_000));

        let q = quote(capacity + tok(1), &rounds, 0).unwrap();
        assert_eq!(q.filled, capacity);
        // 250k @ $1 + 450k @ $2 + 250k @ $3.
        assert_eq!(q.cost, usdt(250_000 + 900_000 + 750_000));
    }

    #[test]
    fn cost_is_monotonic_in_requested_amount() {
        let rounds = demo_rounds();
        let mut last_cost = 0;
        for amount in (0..=1_000_000u64).step_by(100_000) {
            let q = quote(tok(amount), &rounds, 0).unwrap();
            assert!(q.cost >= last_cost);
            last_cost = q.cost;
        }
    }

    #[test]
    fn cost_division_floors() {
        // 5 USDT base units per token, a third of a token requested:
        // 5 * 333_333_333 / 1e9 = 1.666... -> 1.
        let rounds = vec![Round {
            price: 5,
            cap: tok(1),
            sold: 0,
        }];
        let q = quote(333_333_333, &rounds, 0).unwrap();
        assert_eq!(q.cost, 1);
    }

    #[test]
    fn start_round_past_end_yields_zero_quote() {
        let q = quote(tok(10), &demo_rounds(), 9).unwrap();
        assert_eq!(q.cost, 0);
        assert_eq!(q.filled, 0);
    }

    #[test]
    fn commit_matches_quote_and_conserves_supply() {
        let mut rounds = demo_rounds();
        let before: u64 = rounds.iter().map(|r| r.sold).sum();

        let expected = quote(tok(300_000), &rounds, 0).unwrap();
        let actual = commit(tok(300_000), &mut rounds, 0).unwrap();
        assert_eq!(actual, expected);

        let after: u64 = rounds.iter().map(|r| r.sold).sum();
        assert_eq!(after - before, actual.filled);
        for round in &rounds {
            assert!(round.sold <= round.cap);
        }
    }

    #[test]
    fn next_open_round_advances_past_filled_rounds() {
        let mut rounds = demo_rounds();
        commit(tok(250_000), &mut rounds, 0).unwrap();
        assert_eq!(next_open_round(&rounds, 0), 1);

        commit(remaining_capacity(&rounds, 0), &mut rounds, 1).unwrap();
        assert_eq!(next_open_round(&rounds, 0), 2);
    }
}
