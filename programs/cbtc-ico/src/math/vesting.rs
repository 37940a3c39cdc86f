//! Vesting tranche evaluation.
//!
//! Each tranche releases a fixed basis-point share of a wallet's total
//! purchase during a `[start, end]` claim window. Status derivation and the
//! claimable-amount math are pure functions of a data snapshot and a
//! caller-supplied `now`, so they evaluate identically on-chain and in an
//! off-chain dashboard refreshing on a timer.

use crate::constants::BPS_DENOMINATOR;
use crate::state::{ClaimRecord, Tranche};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrancheStatus {
    Disabled,
    Claimed,
    Upcoming,
    Active,
    Expired,
}

/// Derives a tranche's claim status. Precedence is fixed: a disabled
/// tranche reports `Disabled` even when its claim bit is set, and a claimed
/// tranche reports `Claimed` regardless of where `now` falls in the window.
pub fn tranche_status(
    tranche: &Tranche,
    index: usize,
    now: i64,
    claimed: &ClaimRecord,
) -> TrancheStatus {
    if !tranche.enabled {
        return TrancheStatus::Disabled;
    }
    if claimed.is_claimed(index) {
        return TrancheStatus::Claimed;
    }
    if now < tranche.start {
        return TrancheStatus::Upcoming;
    }
    if now > tranche.end {
        return TrancheStatus::Expired;
    }
    TrancheStatus::Active
}

/// The tranche's share of a wallet's total purchase:
/// `floor(purchased * percent_bps / 10_000)`. Status-independent; callers
/// decide whether to surface it.
pub fn claimable_amount(purchased: u64, percent_bps: u16) -> u64 {
    ((purchased as u128 * percent_bps as u128) / BPS_DENOMINATOR as u128) as u64
}

/// Wallet-level rollup across all tranches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VestingSummary {
    /// Sum of claimable amounts over tranches already claimed.
    pub total_claimed: u64,
    /// Sum of claimable amounts over active, unclaimed tranches.
    pub total_available: u64,
    pub claimed_count: u32,
    pub active_count: u32,
}

/// Pure reduction over the tranche list at a single `now`.
pub fn summarize(
    tranches: &[Tranche],
    purchased: u64,
    now: i64,
    claimed: &ClaimRecord,
) -> VestingSummary {
    let mut summary = VestingSummary::default();
    for (idx, tranche) in tranches.iter().enumerate() {
        let amount = claimable_amount(purchased, tranche.percent_bps);
        if claimed.is_claimed(idx) {
            summary.total_claimed = summary.total_claimed.saturating_add(amount);
            summary.claimed_count += 1;
        } else if tranche_status(tranche, idx, now, claimed) == TrancheStatus::Active {
            summary.total_available = summary.total_available.saturating_add(amount);
            summary.active_count += 1;
        }
    }
    summary
}

/// Human-scale breakdown of the time remaining until a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

/// Breaks `target - now` into days, hours and minutes. `None` once the
/// target has passed.
pub fn countdown(target: i64, now: i64) -> Option<Countdown> {
    let diff = target.saturating_sub(now);
    if diff <= 0 {
        return None;
    }
    Some(Countdown {
        days: diff / 86_400,
        hours: (diff % 86_400) / 3_600,
        minutes: (diff % 3_600) / 60,
    })
}

impl core::fmt::Display for Countdown {
    /// "Nd Mh" while days remain, then "Nh Mm", then a bare "Nm".
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.days > 0 {
            write!(f, "{}d {}h", self.days, self.hours)
        } else if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOKEN_UNIT;

    const DAY: i64 = 86_400;
    const NOW: i64 = 1_700_000_000;

    fn tok(amount: u64) -> u64 {
        amount * TOKEN_UNIT
    }

    fn tranche(percent_bps: u16, start: i64, end: i64, enabled: bool) -> Tranche {
        Tranche {
            percent_bps,
            start,
            end,
            enabled,
        }
    }

    /// A typical launch schedule: 30/20/20/15/15 percent,
    /// back-to-back 30-day windows, first window already open.
    fn demo_tranches() -> Vec<Tranche> {
        vec![
            tranche(3000, NOW - 30 * DAY, NOW + 30 * DAY, true),
            tranche(2000, NOW + 30 * DAY, NOW + 60 * DAY, true),
            tranche(2000, NOW + 60 * DAY, NOW + 90 * DAY, true),
            tranche(1500, NOW + 90 * DAY, NOW + 120 * DAY, true),
            tranche(1500, NOW + 120 * DAY, NOW + 150 * DAY, true),
        ]
    }

    #[test]
    fn disabled_takes_precedence_over_claimed() {
        let t = tranche(1000, NOW - DAY, NOW + DAY, false);
        let mut claimed = ClaimRecord::default();
        claimed.mark_claimed(0);

        assert_eq!(
            tranche_status(&t, 0, NOW, &claimed),
            TrancheStatus::Disabled
        );
    }

    #[test]
    fn claimed_takes_precedence_over_window() {
        // Window long gone, but the claim already happened.
        let t = tranche(1000, NOW - 10 * DAY, NOW - 5 * DAY, true);
        let mut claimed = ClaimRecord::default();
        claimed.mark_claimed(3);

        assert_eq!(tranche_status(&t, 3, NOW, &claimed), TrancheStatus::Claimed);
    }

    #[test]
    fn window_position_drives_remaining_statuses() {
        let claimed = ClaimRecord::default();
        let t = tranche(1000, NOW, NOW + DAY, true);

        assert_eq!(
            tranche_status(&t, 0, NOW - 1, &claimed),
            TrancheStatus::Upcoming
        );
        // Both window edges are claimable.
        assert_eq!(tranche_status(&t, 0, NOW, &claimed), TrancheStatus::Active);
        assert_eq!(
            tranche_status(&t, 0, NOW + DAY, &claimed),
            TrancheStatus::Active
        );
        assert_eq!(
            tranche_status(&t, 0, NOW + DAY + 1, &claimed),
            TrancheStatus::Expired
        );
    }

    #[test]
    fn active_tranche_releases_bps_share_of_purchase() {
        let t = tranche(3000, NOW - 30 * DAY, NOW + 30 * DAY, true);
        let claimed = ClaimRecord::default();

        assert_eq!(tranche_status(&t, 0, NOW, &claimed), TrancheStatus::Active);
        assert_eq!(claimable_amount(tok(50_000), t.percent_bps), tok(15_000));
    }

    #[test]
    fn claimable_amount_floors() {
        // 3 base units at 3333 bps: floor(9999 / 10000) = 0.
        assert_eq!(claimable_amount(3, 3333), 0);
        assert_eq!(claimable_amount(4, 3333), 1);
    }

    #[test]
    fn summary_rolls_up_demo_schedule() {
        let mut claimed = ClaimRecord::default();
        claimed.mark_claimed(0);

        let summary = summarize(&demo_tranches(), tok(50_000), NOW + 35 * DAY, &claimed);
        assert_eq!(summary.total_claimed, tok(15_000));
        assert_eq!(summary.total_available, tok(10_000));
        assert_eq!(summary.claimed_count, 1);
        assert_eq!(summary.active_count, 1);
    }

    #[test]
    fn claimed_amount_counts_even_when_tranche_later_disabled() {
        let mut tranches = demo_tranches();
        tranches[0].enabled = false;
        let mut claimed = ClaimRecord::default();
        claimed.mark_claimed(0);

        let summary = summarize(&tranches, tok(50_000), NOW, &claimed);
        assert_eq!(summary.total_claimed, tok(15_000));
        assert_eq!(summary.claimed_count, 1);
    }

    #[test]
    fn per_tranche_floors_bound_total_drift() {
        let tranches = demo_tranches();
        let purchased: u64 = 999_999_999_999_999;

        let per_tranche: u64 = tranches
            .iter()
            .map(|t| claimable_amount(purchased, t.percent_bps))
            .sum();
        let total_bps: u64 = tranches.iter().map(|t| t.percent_bps as u64).sum();
        let proportional =
            (purchased as u128 * total_bps as u128 / BPS_DENOMINATOR as u128) as u64;

        assert!(per_tranche <= proportional);
        assert!(proportional - per_tranche <= tranches.len() as u64);
    }

    #[test]
    fn countdown_formats_by_largest_unit() {
        assert_eq!(countdown(NOW, NOW), None);
        assert_eq!(countdown(NOW - 1, NOW), None);

        // Exactly 30 days out.
        let cd = countdown(NOW + 30 * DAY, NOW).unwrap();
        assert_eq!((cd.days, cd.hours, cd.minutes), (30, 0, 0));
        assert_eq!(cd.to_string(), "30d 0h");

        let cd = countdown(NOW + 3 * 3_600 + 5 * 60, NOW).unwrap();
        assert_eq!(cd.to_string(), "3h 5m");

        let cd = countdown(NOW + 12 * 60 + 30, NOW).unwrap();
        assert_eq!(cd.to_string(), "12m");
    }
}
