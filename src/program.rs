//! Program assembly
//!
//! Composes training-max resolution, the loading tables, the schedule
//! rotation, and supplemental selection into the complete 4-week program
//! structure. The output is plain data, serializable to JSON with no cycles,
//! ready for export by whatever I/O layer sits above this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::loading::{main_sets_for, SetPrescription};
use crate::rounding::RoundingConfig;
use crate::schedule::preview_weeks;
use crate::state::{Frequency, Lift, LiftClass, Units, WizardState};
use crate::supplemental::{supplemental_for, Supplemental, Template};
use crate::training_max::effective_tm;

/// ---------------------------------------------------------------------------
/// Warm-up Scheme
/// ---------------------------------------------------------------------------

/// Wendler standard warm-up: 40/50/60% of TM for 5/5/3
pub const WARMUP_PERCENTS: [f64; 3] = [40.0, 50.0, 60.0];
pub const WARMUP_REPS: [u32; 3] = [5, 5, 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupSet {
  pub percent: f64,
  pub reps: u32,
  pub weight: f64,
}

fn warmups_for(tm: f64, rounding: &RoundingConfig) -> Vec<WarmupSet> {
  WARMUP_PERCENTS
    .iter()
    .zip(WARMUP_REPS.iter())
    .map(|(percent, reps)| WarmupSet {
      percent: *percent,
      reps: *reps,
      weight: rounding.round(tm * percent / 100.0),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Output Structure
/// ---------------------------------------------------------------------------

/// One scheduled training day. A lift with no resolvable TM is still present,
/// with empty set lists and no supplemental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
  pub lift: Lift,
  pub tm: Option<f64>,
  pub warmups: Vec<WarmupSet>,
  pub main_sets: Vec<SetPrescription>,
  pub supplemental: Option<Supplemental>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWeek {
  pub week: u8,
  pub is_deload: bool,
  pub days: Vec<ProgramDay>,
}

/// Per-cycle TM progression increments by lift class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Increments {
  pub upper: f64,
  pub lower: f64,
}

impl Increments {
  pub fn default_for(units: Units) -> Self {
    match units {
      Units::Lb => Increments { upper: 5.0, lower: 10.0 },
      Units::Kg => Increments { upper: 2.5, lower: 5.0 },
    }
  }

  pub fn for_lift(&self, lift: Lift) -> f64 {
    match lift.classify() {
      LiftClass::Upper => self.upper,
      LiftClass::Lower => self.lower,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMeta {
  pub template: Template,
  pub frequency: Frequency,
  pub order: Vec<Lift>,
  pub rounding: RoundingConfig,
  pub increments: Increments,
}

/// The complete assembled program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
  pub units: Units,
  pub meta: ProgramMeta,
  pub tms: BTreeMap<Lift, Option<f64>>,
  pub weeks: Vec<ProgramWeek>,
}

/// ---------------------------------------------------------------------------
/// Assembly
/// ---------------------------------------------------------------------------

/// Build the full preview program from one wizard-state snapshot.
///
/// Total over all inputs: missing lift data degrades to sparse days, never
/// to an error.
pub fn build_program(state: &WizardState) -> Program {
  let rounding = RoundingConfig::resolve(state.rounding.as_ref(), state.units);
  let order = state.schedule.lift_order();
  let week_lifts = preview_weeks(state.schedule.frequency, &order);

  let tms: BTreeMap<Lift, Option<f64>> = Lift::CANONICAL_ORDER
    .iter()
    .map(|lift| (*lift, effective_tm(*lift, state)))
    .collect();

  let weeks = week_lifts
    .iter()
    .enumerate()
    .map(|(index, lifts)| {
      let week = (index + 1) as u8;
      let is_deload = week == 4 && state.loading.include_deload;
      let days = lifts
        .iter()
        .map(|lift| {
          let tm = tms.get(lift).copied().flatten();
          let (warmups, main_sets) = match tm {
            Some(tm) => (
              warmups_for(tm, &rounding),
              main_sets_for(tm, state.loading.option, week, state.programming, &rounding),
            ),
            None => (Vec::new(), Vec::new()),
          };
          ProgramDay {
            lift: *lift,
            tm,
            warmups,
            main_sets,
            supplemental: supplemental_for(*lift, state),
          }
        })
        .collect();
      ProgramWeek { week, is_deload, days }
    })
    .collect();

  Program {
    units: state.units,
    meta: ProgramMeta {
      template: state.template,
      frequency: state.schedule.frequency,
      order: order.to_vec(),
      rounding,
      increments: Increments::default_for(state.units),
    },
    tms,
    weeks,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::LiftEntry;
  use crate::supplemental::Pairing;

  fn full_state() -> WizardState {
    let mut state = WizardState::default();
    state.lifts.press = LiftEntry { manual_tm: Some(135.0), ..Default::default() };
    state.lifts.deadlift = LiftEntry { manual_tm: Some(315.0), ..Default::default() };
    state.lifts.bench = LiftEntry { manual_tm: Some(200.0), ..Default::default() };
    state.lifts.squat = LiftEntry { manual_tm: Some(270.0), ..Default::default() };
    state.template = Template::Bbb { percent: 50.0, pairing: Pairing::Same };
    state
  }

  #[test]
  fn test_four_week_structure() {
    let program = build_program(&full_state());
    assert_eq!(program.weeks.len(), 4);
    for (i, week) in program.weeks.iter().enumerate() {
      assert_eq!(week.week as usize, i + 1);
      assert_eq!(week.days.len(), 4);
    }
    assert!(!program.weeks[0].is_deload);
    assert!(program.weeks[3].is_deload);
  }

  #[test]
  fn test_deload_flag_follows_config() {
    let mut state = full_state();
    state.loading.include_deload = false;
    let program = build_program(&state);
    // Still 4 preview weeks; week 4 just loses the flag
    assert_eq!(program.weeks.len(), 4);
    assert!(!program.weeks[3].is_deload);
  }

  #[test]
  fn test_warmup_weights() {
    let program = build_program(&full_state());
    let squat_day = program.weeks[0]
      .days
      .iter()
      .find(|d| d.lift == Lift::Squat)
      .expect("squat day");
    // TM 270: 40% -> 108 -> 110, 50% -> 135, 60% -> 162 -> 160
    let weights: Vec<f64> = squat_day.warmups.iter().map(|w| w.weight).collect();
    assert_eq!(weights, vec![110.0, 135.0, 160.0]);
    let reps: Vec<u32> = squat_day.warmups.iter().map(|w| w.reps).collect();
    assert_eq!(reps, vec![5, 5, 3]);
  }

  #[test]
  fn test_missing_tm_day_is_present_but_empty() {
    let mut state = full_state();
    state.lifts.press = LiftEntry::default();
    let program = build_program(&state);

    assert_eq!(program.tms[&Lift::Press], None);
    let press_day = program.weeks[0]
      .days
      .iter()
      .find(|d| d.lift == Lift::Press)
      .expect("press day still scheduled");
    assert_eq!(press_day.tm, None);
    assert!(press_day.warmups.is_empty());
    assert!(press_day.main_sets.is_empty());
    assert!(press_day.supplemental.is_none());
  }

  #[test]
  fn test_three_day_weeks_have_three_days() {
    let mut state = full_state();
    state.schedule.frequency = Frequency::ThreeDay;
    let program = build_program(&state);
    for week in &program.weeks {
      assert_eq!(week.days.len(), 3);
    }
    assert_eq!(program.weeks[0].days[0].lift, Lift::Press);
    assert_eq!(program.weeks[1].days[0].lift, Lift::Squat);
  }

  #[test]
  fn test_no_amrap_on_deload_week() {
    let program = build_program(&full_state());
    for day in &program.weeks[3].days {
      assert!(day.main_sets.iter().all(|s| !s.amrap));
    }
    // And the top set is AMRAP on week 1
    let day_one = &program.weeks[0].days[0];
    assert!(day_one.main_sets[2].amrap);
  }

  #[test]
  fn test_supplemental_present_when_template_chosen() {
    let program = build_program(&full_state());
    for day in &program.weeks[0].days {
      match day.supplemental {
        Some(Supplemental::Bbb { lift, .. }) => assert_eq!(lift, day.lift),
        ref other => panic!("expected BBB block, got {:?}", other),
      }
    }
  }

  #[test]
  fn test_increments_by_units() {
    let lb = Increments::default_for(Units::Lb);
    assert_eq!((lb.upper, lb.lower), (5.0, 10.0));
    assert_eq!(lb.for_lift(Lift::Bench), 5.0);
    assert_eq!(lb.for_lift(Lift::Deadlift), 10.0);

    let kg = Increments::default_for(Units::Kg);
    assert_eq!((kg.upper, kg.lower), (2.5, 5.0));
  }

  #[test]
  fn test_program_serializes_to_json() {
    let program = build_program(&full_state());
    let json = serde_json::to_value(&program).expect("program should serialize");

    assert_eq!(json["units"], "lb");
    assert_eq!(json["meta"]["frequency"], "4day");
    assert_eq!(json["meta"]["template"]["id"], "bbb");
    assert_eq!(json["tms"]["squat"], 270.0);
    assert_eq!(json["weeks"][3]["is_deload"], true);

    // Round-trips cleanly
    let back: Program = serde_json::from_value(json).expect("program should deserialize");
    assert_eq!(back, program);
  }
}
