//! Supplemental and assistance selection
//!
//! Dispatches on the chosen template to produce the day's supplemental block.
//! Templates are a tagged sum type so each variant carries only the fields it
//! needs; an unknown template id in a stored snapshot deserializes to
//! `Template::None` and yields no block rather than an error.

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingConfig;
use crate::state::{Lift, LiftClass, WizardState};
use crate::training_max::effective_tm;

/// ---------------------------------------------------------------------------
/// Template Selection
/// ---------------------------------------------------------------------------

/// BBB supplemental target: the same lift or its paired opposite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pairing {
  #[default]
  Same,
  Opposite,
}

fn default_bbb_percent() -> f64 {
  60.0
}

fn default_bodyweight_target() -> u32 {
  75
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "id")]
pub enum Template {
  #[serde(rename = "bbb")]
  Bbb {
    /// Percent of the target lift's TM, e.g. 50/60/70
    #[serde(default = "default_bbb_percent")]
    percent: f64,
    #[serde(default)]
    pairing: Pairing,
  },
  #[serde(rename = "triumvirate")]
  Triumvirate,
  #[serde(rename = "periodizationBible")]
  PeriodizationBible,
  #[serde(rename = "bodyweight")]
  Bodyweight {
    /// Shared target-rep count per movement
    #[serde(default = "default_bodyweight_target")]
    target_reps: u32,
  },
  #[serde(rename = "jackShit")]
  JackShit,
  #[default]
  #[serde(rename = "none", other)]
  None,
}

impl Template {
  pub fn is_chosen(&self) -> bool {
    !matches!(self, Template::None)
  }

  pub fn id(&self) -> &'static str {
    match self {
      Template::Bbb { .. } => "bbb",
      Template::Triumvirate => "triumvirate",
      Template::PeriodizationBible => "periodizationBible",
      Template::Bodyweight { .. } => "bodyweight",
      Template::JackShit => "jackShit",
      Template::None => "none",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Supplemental Blocks
/// ---------------------------------------------------------------------------

/// A named assistance pick with its set/rep scheme, e.g. Dips 5x15
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistanceExercise {
  pub name: String,
  pub scheme: String,
}

impl AssistanceExercise {
  fn new(name: &str, scheme: &str) -> Self {
    Self {
      name: name.to_string(),
      scheme: scheme.to_string(),
    }
  }
}

/// A Periodization Bible category bucket; the exercise is a placeholder the
/// user refines later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
  pub bucket: String,
  pub example: String,
  pub scheme: String,
}

impl CategoryBucket {
  fn new(bucket: &str, example: &str, scheme: &str) -> Self {
    Self {
      bucket: bucket.to_string(),
      example: example.to_string(),
      scheme: scheme.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyweightMovement {
  pub name: String,
  pub target_reps: u32,
}

/// The variant-specific supplemental block for one training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Supplemental {
  Bbb {
    lift: Lift,
    percent: f64,
    sets: u32,
    reps: u32,
    weight: f64,
  },
  Triumvirate {
    picks: Vec<AssistanceExercise>,
  },
  PeriodizationBible {
    buckets: Vec<CategoryBucket>,
  },
  Bodyweight {
    movements: Vec<BodyweightMovement>,
  },
  /// Main lift only, nothing extra
  JackShit,
}

/// ---------------------------------------------------------------------------
/// Template Defaults (book-accurate pairings)
/// ---------------------------------------------------------------------------

fn default_triumvirate(lift: Lift) -> Vec<AssistanceExercise> {
  match lift {
    Lift::Press => vec![
      AssistanceExercise::new("Dips", "5x15"),
      AssistanceExercise::new("Chin-ups", "5x10"),
    ],
    Lift::Bench => vec![
      AssistanceExercise::new("DB Rows", "5x10"),
      AssistanceExercise::new("Dips", "5x15"),
    ],
    Lift::Deadlift => vec![
      AssistanceExercise::new("Good Mornings", "5x10"),
      AssistanceExercise::new("Hanging Leg Raises", "5x15"),
    ],
    Lift::Squat => vec![
      AssistanceExercise::new("Leg Curls", "5x10"),
      AssistanceExercise::new("Leg Raises", "5x15"),
    ],
  }
}

fn periodization_bible_buckets(lift: Lift) -> Vec<CategoryBucket> {
  match lift.classify() {
    LiftClass::Upper => vec![
      CategoryBucket::new("Shoulders/Chest", "DB Press", "5x12-15"),
      CategoryBucket::new("Lats/Upper Back", "Rows/Chins", "5x10-15"),
      CategoryBucket::new("Triceps", "Extensions", "5x12-20"),
    ],
    LiftClass::Lower => vec![
      CategoryBucket::new("Posterior", "RDL/GHR", "5x10-15"),
      CategoryBucket::new("Quads", "Leg Press/Lunges", "5x12-20"),
      CategoryBucket::new("Abs", "Hanging Leg Raises", "5x12-20"),
    ],
  }
}

fn bodyweight_movements(target_reps: u32) -> Vec<BodyweightMovement> {
  ["Chin-ups", "Dips or Push-ups", "Hanging Leg Raises"]
    .iter()
    .map(|name| BodyweightMovement {
      name: name.to_string(),
      target_reps,
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Dispatch
/// ---------------------------------------------------------------------------

/// Supplemental block for a main-lift day, or `None` when no template is
/// chosen or the day's lift has no resolvable training max.
pub fn supplemental_for(lift: Lift, state: &WizardState) -> Option<Supplemental> {
  let tm = effective_tm(lift, state)?;
  let rounding = RoundingConfig::resolve(state.rounding.as_ref(), state.units);

  match state.template {
    Template::None => None,
    Template::JackShit => Some(Supplemental::JackShit),
    Template::Bbb { percent, pairing } => {
      let target = match pairing {
        Pairing::Same => lift,
        Pairing::Opposite => lift.opposite(),
      };
      // Fall back to the day's own TM when the paired lift has none
      let target_tm = effective_tm(target, state).unwrap_or(tm);
      Some(Supplemental::Bbb {
        lift: target,
        percent,
        sets: 5,
        reps: 10,
        weight: rounding.round(target_tm * percent / 100.0),
      })
    }
    Template::Triumvirate => {
      let picks = state
        .assistance
        .selections
        .get(&lift)
        .filter(|picks| !picks.is_empty())
        .cloned()
        .unwrap_or_else(|| default_triumvirate(lift));
      Some(Supplemental::Triumvirate { picks })
    }
    Template::PeriodizationBible => Some(Supplemental::PeriodizationBible {
      buckets: periodization_bible_buckets(lift),
    }),
    Template::Bodyweight { target_reps } => Some(Supplemental::Bodyweight {
      movements: bodyweight_movements(target_reps),
    }),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::LiftEntry;

  fn state_with_tms() -> WizardState {
    let mut state = WizardState::default();
    state.lifts.squat = LiftEntry { manual_tm: Some(270.0), ..Default::default() };
    state.lifts.deadlift = LiftEntry { manual_tm: Some(315.0), ..Default::default() };
    state.lifts.bench = LiftEntry { manual_tm: Some(200.0), ..Default::default() };
    state.lifts.press = LiftEntry { manual_tm: Some(135.0), ..Default::default() };
    state
  }

  #[test]
  fn test_bbb_same_lift() {
    let mut state = state_with_tms();
    state.template = Template::Bbb { percent: 50.0, pairing: Pairing::Same };

    match supplemental_for(Lift::Squat, &state) {
      Some(Supplemental::Bbb { lift, percent, sets, reps, weight }) => {
        assert_eq!(lift, Lift::Squat);
        assert_eq!(percent, 50.0);
        assert_eq!((sets, reps), (5, 10));
        assert_eq!(weight, 135.0); // 270 * 0.50
      }
      other => panic!("expected BBB block, got {:?}", other),
    }
  }

  #[test]
  fn test_bbb_opposite_uses_paired_tm() {
    let mut state = state_with_tms();
    state.template = Template::Bbb { percent: 60.0, pairing: Pairing::Opposite };

    // Squat day pulls from the deadlift TM, not the squat TM
    match supplemental_for(Lift::Squat, &state) {
      Some(Supplemental::Bbb { lift, weight, .. }) => {
        assert_eq!(lift, Lift::Deadlift);
        assert_eq!(weight, 190.0); // 315 * 0.60 = 189, nearest 5 -> 190
      }
      other => panic!("expected BBB block, got {:?}", other),
    }
  }

  #[test]
  fn test_bbb_opposite_missing_tm_falls_back_to_own() {
    let mut state = state_with_tms();
    state.lifts.deadlift = LiftEntry::default();
    state.template = Template::Bbb { percent: 50.0, pairing: Pairing::Opposite };

    match supplemental_for(Lift::Squat, &state) {
      Some(Supplemental::Bbb { lift, weight, .. }) => {
        assert_eq!(lift, Lift::Deadlift);
        assert_eq!(weight, 135.0); // squat TM 270 * 0.50
      }
      other => panic!("expected BBB block, got {:?}", other),
    }
  }

  #[test]
  fn test_triumvirate_book_pairings() {
    let mut state = state_with_tms();
    state.template = Template::Triumvirate;

    match supplemental_for(Lift::Press, &state) {
      Some(Supplemental::Triumvirate { picks }) => {
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].name, "Dips");
        assert_eq!(picks[1].name, "Chin-ups");
      }
      other => panic!("expected triumvirate, got {:?}", other),
    }
  }

  #[test]
  fn test_triumvirate_user_override() {
    let mut state = state_with_tms();
    state.template = Template::Triumvirate;
    state.assistance.selections.insert(
      Lift::Press,
      vec![AssistanceExercise::new("Push Press", "5x5")],
    );

    match supplemental_for(Lift::Press, &state) {
      Some(Supplemental::Triumvirate { picks }) => {
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].name, "Push Press");
      }
      other => panic!("expected triumvirate, got {:?}", other),
    }
  }

  #[test]
  fn test_periodization_bible_buckets_by_class() {
    let mut state = state_with_tms();
    state.template = Template::PeriodizationBible;

    match supplemental_for(Lift::Bench, &state) {
      Some(Supplemental::PeriodizationBible { buckets }) => {
        assert_eq!(
          buckets.iter().map(|b| b.bucket.as_str()).collect::<Vec<_>>(),
          vec!["Shoulders/Chest", "Lats/Upper Back", "Triceps"]
        );
      }
      other => panic!("expected buckets, got {:?}", other),
    }

    match supplemental_for(Lift::Deadlift, &state) {
      Some(Supplemental::PeriodizationBible { buckets }) => {
        assert_eq!(
          buckets.iter().map(|b| b.bucket.as_str()).collect::<Vec<_>>(),
          vec!["Posterior", "Quads", "Abs"]
        );
      }
      other => panic!("expected buckets, got {:?}", other),
    }
  }

  #[test]
  fn test_bodyweight_target_reps() {
    let mut state = state_with_tms();
    state.template = Template::Bodyweight { target_reps: 100 };

    match supplemental_for(Lift::Squat, &state) {
      Some(Supplemental::Bodyweight { movements }) => {
        assert_eq!(movements.len(), 3);
        assert!(movements.iter().all(|m| m.target_reps == 100));
      }
      other => panic!("expected bodyweight, got {:?}", other),
    }
  }

  #[test]
  fn test_jack_shit_and_none() {
    let mut state = state_with_tms();
    state.template = Template::JackShit;
    assert_eq!(supplemental_for(Lift::Bench, &state), Some(Supplemental::JackShit));

    state.template = Template::None;
    assert_eq!(supplemental_for(Lift::Bench, &state), None);
  }

  #[test]
  fn test_no_tm_means_no_block() {
    let mut state = WizardState::default();
    state.template = Template::Triumvirate;
    assert_eq!(supplemental_for(Lift::Press, &state), None);
  }

  #[test]
  fn test_unknown_template_id_deserializes_to_none() {
    let template: Template =
      serde_json::from_str(r#"{ "id": "futureTemplate" }"#).expect("unknown id should parse");
    assert_eq!(template, Template::None);
  }

  #[test]
  fn test_bbb_defaults_from_partial_json() {
    let template: Template = serde_json::from_str(r#"{ "id": "bbb" }"#).unwrap();
    assert_eq!(template, Template::Bbb { percent: 60.0, pairing: Pairing::Same });
  }
}
