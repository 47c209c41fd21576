//! Main-set loading schemes
//!
//! The fixed (option, week) percent tables for the 3 main work sets, plus
//! the programming-mode overrides that modulate rep counts and AMRAP. Week 4
//! is always the 40/50/60 deload row and never carries an AMRAP set, under
//! any option or mode.

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingConfig;

/// ---------------------------------------------------------------------------
/// Programming Mode
/// ---------------------------------------------------------------------------

/// Approach-level overrides applied on top of the base scheme. The variants
/// are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgrammingMode {
  /// Base scheme: week's natural reps, AMRAP on the top set of weeks 1-3
  #[default]
  Standard,
  /// "5s PRO": every set is exactly 5 reps, no AMRAP anywhere
  FivesPro,
  /// Leader phase: natural rep counts kept, AMRAP disabled
  Leader,
}

/// ---------------------------------------------------------------------------
/// Scheme Tables
/// ---------------------------------------------------------------------------

/// One row of a weekly scheme before rounding is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetScheme {
  pub percent: f64,
  pub reps: u32,
  pub amrap: bool,
}

const fn scheme(percent: f64, reps: u32, amrap: bool) -> SetScheme {
  SetScheme { percent, reps, amrap }
}

/// Classic 5/3/1 progression (option 1), week 4 deload
const OPTION_ONE: [[SetScheme; 3]; 4] = [
  [scheme(65.0, 5, false), scheme(75.0, 5, false), scheme(85.0, 5, true)],
  [scheme(70.0, 3, false), scheme(80.0, 3, false), scheme(90.0, 3, true)],
  [scheme(75.0, 5, false), scheme(85.0, 3, false), scheme(95.0, 1, true)],
  [scheme(40.0, 5, false), scheme(50.0, 5, false), scheme(60.0, 5, false)],
];

/// Option 2 shifts weeks 1-3 roughly 10 points higher; same deload
const OPTION_TWO: [[SetScheme; 3]; 4] = [
  [scheme(75.0, 5, false), scheme(80.0, 5, false), scheme(85.0, 5, true)],
  [scheme(80.0, 3, false), scheme(85.0, 3, false), scheme(90.0, 3, true)],
  [scheme(85.0, 5, false), scheme(90.0, 3, false), scheme(95.0, 1, true)],
  [scheme(40.0, 5, false), scheme(50.0, 5, false), scheme(60.0, 5, false)],
];

pub const DELOAD_WEEK: u8 = 4;

/// Clamp option into {1, 2} (anything else behaves as 1) and week into 1..=4
fn clamp_inputs(option: u8, week: u8) -> (u8, u8) {
  let option = if option == 2 { 2 } else { 1 };
  let week = week.clamp(1, 4);
  (option, week)
}

/// Main-set scheme for `(option, week)` with mode overrides applied.
/// Out-of-range inputs clamp to the nearest valid value rather than failing.
pub fn main_set_scheme(option: u8, week: u8, mode: ProgrammingMode) -> [SetScheme; 3] {
  let (option, week) = clamp_inputs(option, week);
  let table = if option == 2 { &OPTION_TWO } else { &OPTION_ONE };
  let mut sets = table[(week - 1) as usize];

  for set in sets.iter_mut() {
    match mode {
      ProgrammingMode::Standard => {}
      ProgrammingMode::FivesPro => {
        set.reps = 5;
        set.amrap = false;
      }
      ProgrammingMode::Leader => {
        set.amrap = false;
      }
    }
  }
  sets
}

/// Bare percent triple for `(option, week)`, for preview surfaces
pub fn main_set_percents(option: u8, week: u8) -> [f64; 3] {
  let sets = main_set_scheme(option, week, ProgrammingMode::Standard);
  [sets[0].percent, sets[1].percent, sets[2].percent]
}

/// ---------------------------------------------------------------------------
/// Set Prescriptions
/// ---------------------------------------------------------------------------

/// A fully specified work set: scheme row plus the rounded weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPrescription {
  pub percent: f64,
  pub reps: u32,
  pub amrap: bool,
  pub weight: f64,
}

/// The 3 main sets for a training max, weights rounded per `rounding`
pub fn main_sets_for(
  tm: f64,
  option: u8,
  week: u8,
  mode: ProgrammingMode,
  rounding: &RoundingConfig,
) -> Vec<SetPrescription> {
  main_set_scheme(option, week, mode)
    .iter()
    .map(|set| SetPrescription {
      percent: set.percent,
      reps: set.reps,
      amrap: set.amrap,
      weight: rounding.round(tm * set.percent / 100.0),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
