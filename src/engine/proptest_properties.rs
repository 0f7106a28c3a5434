//! Property-based tests using `proptest` for the engine invariants.
//!
//! Covers the properties the accounting core must hold under arbitrary
//! inputs:
//!
//! 1. **Invariant non-decrease** — `reserve_x · reserve_y` never shrinks
//!    across a swap sequence.
//! 2. **No dilution on deposit** — the per-share claim on each reserve
//!    never drops when someone deposits.
//! 3. **No overpayment on withdraw** — payouts never exceed the exact
//!    proportional share.
//! 4. **Round-trip bound** — deposit then withdraw of the same shares
//!    never returns more than was paid in.
//! 5. **Slippage enforcement** — bounds tighter than the computed
//!    amounts always reject.
//! 6. **Bootstrap hint** — the geometric-mean hint brackets the product.

use proptest::prelude::*;

use crate::domain::{Amount, DepositIntent, Identity, Shares, SwapDirection, SwapIntent, WithdrawIntent};
use crate::error::PoolError;
use crate::math::integer_sqrt;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn id(byte: u8) -> Identity {
    Identity::from_bytes([byte; 32])
}

/// A funded 30 bp pool with the given reserves and share supply.
fn make_pool(rx: u64, ry: u64, supply: u64) -> Option<Pool> {
    let mut pool = Pool::initialize(1, id(1), id(2), 30, id(9)).ok()?;
    let intent =
        DepositIntent::new(Shares::new(supply), Amount::new(rx), Amount::new(ry)).ok()?;
    pool.deposit(&intent).ok()?;
    Some(pool)
}

/// Reserve values kept away from the u64 edge so swap inputs cannot
/// overflow the input-side reserve.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000u64
}

fn supply_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000u64
}

// ---------------------------------------------------------------------------
// Property 1: Invariant non-decrease across swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_product_non_decreasing(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        amounts in proptest::collection::vec(1u64..=1_000_000u64, 1..8),
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };

        let mut k = pool.state().invariant_product();
        for (i, amount) in amounts.iter().enumerate() {
            let direction = if i % 2 == 0 {
                SwapDirection::XToY
            } else {
                SwapDirection::YToX
            };
            let Ok(intent) = SwapIntent::new(direction, Amount::new(*amount), Amount::ZERO)
            else {
                continue;
            };
            if pool.swap(&intent).is_err() {
                continue;
            }
            let k_after = pool.state().invariant_product();
            prop_assert!(
                k_after >= k,
                "invariant product shrank: {} -> {}",
                k, k_after
            );
            k = k_after;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No dilution on deposit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_never_dilutes(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        shares in 1u64..=1_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };

        let Ok(intent) = DepositIntent::new(Shares::new(shares), Amount::MAX, Amount::MAX)
        else {
            return Ok(());
        };
        let Ok(receipt) = pool.deposit(&intent) else {
            return Ok(());
        };

        // (rx + paid_x) / (supply + shares) >= rx / supply, cross-multiplied
        // in u128 to stay exact.
        let paid_x = receipt.amount_x().get() as u128;
        let paid_y = receipt.amount_y().get() as u128;
        prop_assert!(paid_x * supply as u128 >= rx as u128 * shares as u128);
        prop_assert!(paid_y * supply as u128 >= ry as u128 * shares as u128);
    }
}

// ---------------------------------------------------------------------------
// Property 3: No overpayment on withdraw
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdraw_never_overpays(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        shares in 1u64..=1_000_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };
        let shares = shares.min(supply);

        let Ok(intent) = WithdrawIntent::new(Shares::new(shares), Amount::ZERO, Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(receipt) = pool.withdraw(&intent) else {
            return Ok(());
        };

        // out_x / shares <= rx / supply, cross-multiplied in u128.
        let out_x = receipt.amount_x().get() as u128;
        let out_y = receipt.amount_y().get() as u128;
        prop_assert!(out_x * supply as u128 <= rx as u128 * shares as u128);
        prop_assert!(out_y * supply as u128 <= ry as u128 * shares as u128);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Round-trip bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_round_trip_loses_or_breaks_even(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        shares in 1u64..=1_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };

        let Ok(deposit) = DepositIntent::new(Shares::new(shares), Amount::MAX, Amount::MAX)
        else {
            return Ok(());
        };
        let Ok(paid) = pool.deposit(&deposit) else {
            return Ok(());
        };

        let Ok(withdraw) = WithdrawIntent::new(Shares::new(shares), Amount::ZERO, Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(returned) = pool.withdraw(&withdraw) else {
            return Ok(());
        };

        prop_assert!(
            returned.amount_x() <= paid.amount_x(),
            "round trip minted value on X: paid {} got {}",
            paid.amount_x(), returned.amount_x()
        );
        prop_assert!(
            returned.amount_y() <= paid.amount_y(),
            "round trip minted value on Y: paid {} got {}",
            paid.amount_y(), returned.amount_y()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Slippage enforcement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_slippage_bound_enforced(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        shares in 1u64..=1_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };

        let Ok(generous) = DepositIntent::new(Shares::new(shares), Amount::MAX, Amount::MAX)
        else {
            return Ok(());
        };
        let Ok(quote) = pool.deposit_quote(&generous) else {
            return Ok(());
        };

        // One unit below the requirement must reject without mutating.
        let before = *pool.state();
        let Some(short_x) = quote.amount_x().checked_sub(&Amount::new(1)) else {
            return Ok(());
        };
        let Ok(tight) = DepositIntent::new(Shares::new(shares), short_x, quote.amount_y())
        else {
            return Ok(());
        };
        prop_assert_eq!(
            pool.deposit(&tight).map(|r| r.shares_minted()),
            Err(PoolError::SlippageExceeded("deposit requires more of asset X"))
        );
        prop_assert_eq!(before, *pool.state());
    }

    #[test]
    fn prop_swap_slippage_bound_enforced(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        amount_in in 1u64..=1_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };

        let Ok(loose) = SwapIntent::new(SwapDirection::XToY, Amount::new(amount_in), Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(quote) = pool.swap_quote(&loose) else {
            return Ok(());
        };

        let before = *pool.state();
        let Some(min_above) = quote.amount_out().checked_add(&Amount::new(1)) else {
            return Ok(());
        };
        let Ok(tight) = SwapIntent::new(SwapDirection::XToY, Amount::new(amount_in), min_above)
        else {
            return Ok(());
        };
        prop_assert_eq!(
            pool.swap(&tight).map(|r| r.amount_out()),
            Err(PoolError::SlippageExceeded("swap output below minimum"))
        );
        prop_assert_eq!(before, *pool.state());
    }

    #[test]
    fn prop_withdraw_slippage_bound_enforced(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        supply in supply_strategy(),
        shares in 1u64..=1_000_000_000u64,
    ) {
        let Some(mut pool) = make_pool(rx, ry, supply) else {
            return Ok(());
        };
        let shares = shares.min(supply);

        let Ok(loose) = WithdrawIntent::new(Shares::new(shares), Amount::ZERO, Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(quote) = pool.withdraw_quote(&loose) else {
            return Ok(());
        };

        let before = *pool.state();
        let Some(min_above) = quote.amount_x().checked_add(&Amount::new(1)) else {
            return Ok(());
        };
        let Ok(tight) = WithdrawIntent::new(Shares::new(shares), min_above, Amount::ZERO)
        else {
            return Ok(());
        };
        prop_assert_eq!(
            pool.withdraw(&tight).map(|r| r.amount_x()),
            Err(PoolError::SlippageExceeded("withdrawal pays less of asset X"))
        );
        prop_assert_eq!(before, *pool.state());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Bootstrap hint brackets the product
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_bootstrap_hint_is_floor_sqrt(
        x in 1u64..=u64::MAX,
        y in 1u64..=u64::MAX,
    ) {
        let hint = Pool::bootstrap_shares_hint(Amount::new(x), Amount::new(y)).get() as u128;
        let product = x as u128 * y as u128;
        prop_assert!(hint * hint <= product);
        // (hint + 1)² > product, guarding against an off-by-one sqrt.
        let next = hint + 1;
        prop_assert!(next.checked_mul(next).map_or(true, |sq| sq > product));
    }

    #[test]
    fn prop_integer_sqrt_round_trips_squares(n in 0u64..=u64::MAX) {
        prop_assert_eq!(integer_sqrt(n as u128 * n as u128), n);
    }
}
