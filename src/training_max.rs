//! Training-max resolution
//!
//! Derives the effective training max for a lift from whatever the user
//! supplied: a manual override, an explicit 1RM, or a weight x reps test.
//! A lift with no usable base has no training max (`None`), which downstream
//! consumers treat as "no sets this cycle" - never as a TM of zero.

use crate::rounding::RoundingConfig;
use crate::state::{Lift, LiftEntry, WizardState};

/// Fallback TM percent when neither the lift nor the snapshot carries one
pub const DEFAULT_TM_PERCENT: f64 = 0.90;

/// ---------------------------------------------------------------------------
/// One-Rep-Max Estimation
/// ---------------------------------------------------------------------------

/// Epley-style estimate: `weight * reps * 0.0333 + weight`.
/// Non-finite or non-positive inputs yield 0.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
  if !weight.is_finite() || weight <= 0.0 || reps < 1 {
    return 0.0;
  }
  weight * reps as f64 * 0.0333 + weight
}

/// ---------------------------------------------------------------------------
/// Effective Training Max
/// ---------------------------------------------------------------------------

/// TM percent for one lift: per-lift decimal if in (0, 1], else the global
/// snapshot percent if in (0, 1], else 0.90.
fn resolve_percent(entry: &LiftEntry, state: &WizardState) -> f64 {
  valid_percent(entry.tm_percent)
    .or_else(|| valid_percent(state.tm_percent))
    .unwrap_or(DEFAULT_TM_PERCENT)
}

fn valid_percent(percent: Option<f64>) -> Option<f64> {
  percent.filter(|p| p.is_finite() && *p > 0.0 && *p <= 1.0)
}

/// A usable one-rep max for the entry: the explicit 1RM when positive,
/// otherwise an estimate from the rep test when both fields are usable.
fn usable_one_rep_max(entry: &LiftEntry) -> Option<f64> {
  if let Some(one_rm) = entry.one_rep_max {
    if one_rm.is_finite() && one_rm > 0.0 {
      return Some(one_rm);
    }
  }
  match (entry.test_weight, entry.test_reps) {
    (Some(weight), Some(reps)) if weight.is_finite() && weight > 0.0 && reps >= 1 => {
      Some(estimate_one_rep_max(weight, reps))
    }
    _ => None,
  }
}

/// Resolve the effective training max for `lift`, rounded to the snapshot's
/// increment. `None` when no manual override exists and no 1RM can be derived.
pub fn effective_tm(lift: Lift, state: &WizardState) -> Option<f64> {
  let entry = state.lifts.get(lift);

  let base = match entry.manual_tm {
    Some(tm) if tm.is_finite() && tm > 0.0 => Some(tm),
    _ => {
      let percent = resolve_percent(entry, state);
      usable_one_rep_max(entry).map(|one_rm| one_rm * percent)
    }
  };

  let rounding = RoundingConfig::resolve(state.rounding.as_ref(), state.units);
  base.map(|b| rounding.round(b))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
