//! Wizard-state snapshot types
//!
//! A `WizardState` is the single input contract for the whole engine: every
//! computation is a pure function of one immutable snapshot. All sections are
//! optional in serialized form and fall back to documented defaults, so a
//! partially-filled snapshot always deserializes and always produces a
//! well-formed (possibly sparse) program.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::loading::ProgrammingMode;
use crate::rounding::RoundingConfig;
use crate::supplemental::{AssistanceExercise, Template};

/// ---------------------------------------------------------------------------
/// Units
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
  #[default]
  #[serde(alias = "lbs")]
  Lb,
  Kg,
}

impl Units {
  /// Default plate increment for this unit system
  pub fn default_increment(&self) -> f64 {
    match self {
      Units::Lb => 5.0,
      Units::Kg => 2.5,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Units::Lb => "lb",
      Units::Kg => "kg",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Lifts
/// ---------------------------------------------------------------------------

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
  Press,
  Deadlift,
  Bench,
  Squat,
}

/// Upper/lower classification, used for progression increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftClass {
  Upper,
  Lower,
}

impl Lift {
  /// Canonical 4-day order: Press -> Deadlift -> Bench -> Squat
  pub const CANONICAL_ORDER: [Lift; 4] = [Lift::Press, Lift::Deadlift, Lift::Bench, Lift::Squat];

  /// Paired opposite lift (bench<->press, squat<->deadlift)
  pub fn opposite(&self) -> Lift {
    match self {
      Lift::Press => Lift::Bench,
      Lift::Bench => Lift::Press,
      Lift::Squat => Lift::Deadlift,
      Lift::Deadlift => Lift::Squat,
    }
  }

  pub fn classify(&self) -> LiftClass {
    match self {
      Lift::Press | Lift::Bench => LiftClass::Upper,
      Lift::Squat | Lift::Deadlift => LiftClass::Lower,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Lift::Press => "press",
      Lift::Deadlift => "deadlift",
      Lift::Bench => "bench",
      Lift::Squat => "squat",
    }
  }
}

impl std::fmt::Display for Lift {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Lift {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "press" => Ok(Lift::Press),
      "deadlift" => Ok(Lift::Deadlift),
      "bench" => Ok(Lift::Bench),
      "squat" => Ok(Lift::Squat),
      _ => Err(format!("Unknown lift: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Per-Lift Max Data
/// ---------------------------------------------------------------------------

/// Raw numbers the user supplied for one lift. Any combination may be absent;
/// training-max resolution decides what is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftEntry {
  /// Explicit tested or known one-rep max
  pub one_rep_max: Option<f64>,

  /// Rep-test pair: estimate a 1RM from weight x reps
  pub test_weight: Option<f64>,
  pub test_reps: Option<u32>,

  /// Manual training-max override; wins over any derived value
  pub manual_tm: Option<f64>,

  /// Per-lift TM percent as a decimal in (0, 1]
  pub tm_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftEntries {
  pub press: LiftEntry,
  pub deadlift: LiftEntry,
  pub bench: LiftEntry,
  pub squat: LiftEntry,
}

impl LiftEntries {
  pub fn get(&self, lift: Lift) -> &LiftEntry {
    match lift {
      Lift::Press => &self.press,
      Lift::Deadlift => &self.deadlift,
      Lift::Bench => &self.bench,
      Lift::Squat => &self.squat,
    }
  }

  pub fn get_mut(&mut self, lift: Lift) -> &mut LiftEntry {
    match lift {
      Lift::Press => &mut self.press,
      Lift::Deadlift => &mut self.deadlift,
      Lift::Bench => &mut self.bench,
      Lift::Squat => &mut self.squat,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Schedule
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
  #[serde(rename = "1day")]
  OneDay,
  #[serde(rename = "2day")]
  TwoDay,
  #[serde(rename = "3day")]
  ThreeDay,
  #[default]
  #[serde(rename = "4day")]
  FourDay,
}

impl Frequency {
  pub fn days_per_week(&self) -> usize {
    match self {
      Frequency::OneDay => 1,
      Frequency::TwoDay => 2,
      Frequency::ThreeDay => 3,
      Frequency::FourDay => 4,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Frequency::OneDay => "1day",
      Frequency::TwoDay => "2day",
      Frequency::ThreeDay => "3day",
      Frequency::FourDay => "4day",
    }
  }
}

impl std::fmt::Display for Frequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Frequency {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "1day" => Ok(Frequency::OneDay),
      "2day" => Ok(Frequency::TwoDay),
      "3day" => Ok(Frequency::ThreeDay),
      "4day" => Ok(Frequency::FourDay),
      _ => Err(format!("Unknown frequency: {}", s)),
    }
  }
}

/// One configured training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlot {
  pub id: String,
  pub lift: Lift,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
  pub frequency: Frequency,
  pub days: Vec<DaySlot>,
}

impl Default for ScheduleConfig {
  fn default() -> Self {
    let days = Lift::CANONICAL_ORDER
      .iter()
      .enumerate()
      .map(|(i, lift)| DaySlot {
        id: format!("D{}", i + 1),
        lift: *lift,
      })
      .collect();
    Self {
      frequency: Frequency::FourDay,
      days,
    }
  }
}

impl ScheduleConfig {
  /// The 4-lift rotation order. Taken from the configured days when they
  /// cover all four lifts, otherwise the canonical order.
  pub fn lift_order(&self) -> [Lift; 4] {
    let lifts: Vec<Lift> = self.days.iter().map(|d| d.lift).collect();
    if lifts.len() == 4 {
      let mut seen = [false; 4];
      for l in &lifts {
        seen[*l as usize] = true;
      }
      if seen.iter().all(|s| *s) {
        return [lifts[0], lifts[1], lifts[2], lifts[3]];
      }
    }
    Lift::CANONICAL_ORDER
  }
}

/// ---------------------------------------------------------------------------
/// Loading
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
  /// Loading option 1 or 2; anything else behaves as 1
  pub option: u8,

  /// Week the UI is currently previewing; clamped into 1..=4
  pub preview_week: u8,

  /// Whether week 4 is flagged as a deload
  pub include_deload: bool,
}

impl Default for LoadingConfig {
  fn default() -> Self {
    Self {
      option: 1,
      preview_week: 1,
      include_deload: true,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Assistance Overrides
/// ---------------------------------------------------------------------------

/// User-chosen assistance picks, keyed by main lift. Overrides the
/// template's default picks where present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistancePlan {
  pub selections: BTreeMap<Lift, Vec<AssistanceExercise>>,
}

/// ---------------------------------------------------------------------------
/// Wizard State Snapshot
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardState {
  pub units: Units,

  /// Rounding section; `None` resolves to the unit default (5 lb / 2.5 kg)
  pub rounding: Option<RoundingConfig>,

  /// Global TM percent as a decimal in (0, 1]; falls back to 0.90
  pub tm_percent: Option<f64>,

  pub lifts: LiftEntries,
  pub template: Template,
  pub schedule: ScheduleConfig,
  pub loading: LoadingConfig,
  pub programming: ProgrammingMode,
  pub assistance: AssistancePlan,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
