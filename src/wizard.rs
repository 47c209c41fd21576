//! Wizard step graph
//!
//! The configuration wizard is an ordered list of step descriptors, each with
//! a visibility predicate and a validator over the same wizard-state snapshot
//! the program assembler consumes. Everything here is derived on every query;
//! no current-step or status is ever stored, so the same snapshot always
//! yields the same answers.
//!
//! Navigation rule: a target step is reachable iff it is visible and every
//! visible prerequisite step currently validates clean.

use serde::{Deserialize, Serialize};

use crate::state::{Lift, WizardState};
use crate::supplemental::Template;
use crate::training_max::effective_tm;

/// ---------------------------------------------------------------------------
/// Step Identity
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
  Fundamentals,
  Template,
  Schedule,
  Loading,
  Assistance,
  Review,
}

impl StepId {
  pub fn as_str(&self) -> &'static str {
    match self {
      StepId::Fundamentals => "fundamentals",
      StepId::Template => "template",
      StepId::Schedule => "schedule",
      StepId::Loading => "loading",
      StepId::Assistance => "assistance",
      StepId::Review => "review",
    }
  }
}

impl std::fmt::Display for StepId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Validation Result
/// ---------------------------------------------------------------------------

/// Errors are user-facing sentences; `errors` is empty iff `is_valid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
  pub is_valid: bool,
  pub errors: Vec<String>,
}

impl Validation {
  pub fn ok() -> Self {
    Self { is_valid: true, errors: Vec::new() }
  }

  pub fn from_errors(errors: Vec<String>) -> Self {
    Self { is_valid: errors.is_empty(), errors }
  }
}

/// Derived step status; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
  Complete,
  Error,
  Incomplete,
}

/// ---------------------------------------------------------------------------
/// Step Descriptors
/// ---------------------------------------------------------------------------

pub struct StepDescriptor {
  pub id: StepId,
  pub title: &'static str,
  /// Steps that must be complete (when visible) before this one is reachable
  pub prerequisites: &'static [StepId],
  pub visible: fn(&WizardState) -> bool,
  pub validate: fn(&WizardState) -> Validation,
}

fn always_visible(_state: &WizardState) -> bool {
  true
}

fn template_visible(state: &WizardState) -> bool {
  // Template selection opens once the fundamentals validate
  validate_fundamentals(state).is_valid
}

fn template_chosen(state: &WizardState) -> bool {
  state.template.is_chosen()
}

fn assistance_visible(state: &WizardState) -> bool {
  // Jack Shit skips the assistance step entirely
  state.template.is_chosen() && state.template != Template::JackShit
}

const STEPS: [StepDescriptor; 6] = [
  StepDescriptor {
    id: StepId::Fundamentals,
    title: "Program Fundamentals",
    prerequisites: &[],
    visible: always_visible,
    validate: validate_fundamentals,
  },
  StepDescriptor {
    id: StepId::Template,
    title: "Template Selection",
    prerequisites: &[StepId::Fundamentals],
    visible: template_visible,
    validate: validate_template,
  },
  StepDescriptor {
    id: StepId::Schedule,
    title: "Schedule & Warm-up",
    prerequisites: &[StepId::Fundamentals, StepId::Template],
    visible: template_chosen,
    validate: validate_schedule,
  },
  StepDescriptor {
    id: StepId::Loading,
    title: "Cycle Structure & Loading",
    prerequisites: &[StepId::Fundamentals, StepId::Template, StepId::Schedule],
    visible: always_visible,
    validate: validate_loading,
  },
  StepDescriptor {
    id: StepId::Assistance,
    title: "Assistance",
    prerequisites: &[StepId::Fundamentals, StepId::Template, StepId::Schedule, StepId::Loading],
    visible: assistance_visible,
    validate: validate_assistance,
  },
  StepDescriptor {
    id: StepId::Review,
    title: "Review & Export",
    prerequisites: &[
      StepId::Fundamentals,
      StepId::Template,
      StepId::Schedule,
      StepId::Loading,
      StepId::Assistance,
    ],
    visible: always_visible,
    validate: validate_review,
  },
];

pub fn steps() -> &'static [StepDescriptor] {
  &STEPS
}

fn descriptor(id: StepId) -> &'static StepDescriptor {
  // STEPS is declared in StepId order.
  &STEPS[id as usize]
}

/// ---------------------------------------------------------------------------
/// Validators
/// ---------------------------------------------------------------------------

pub fn validate_fundamentals(state: &WizardState) -> Validation {
  let mut errors = Vec::new();

  if let Some(percent) = state.tm_percent {
    if !(percent.is_finite() && percent > 0.0 && percent <= 1.0) {
      errors.push("Training max percent must be a decimal between 0 and 1 (e.g. 0.90)".to_string());
    }
  }

  for lift in Lift::CANONICAL_ORDER {
    if effective_tm(lift, state).is_none() {
      errors.push(format!("Enter a 1RM or rep test for {}", lift));
    }
  }

  Validation::from_errors(errors)
}

pub fn validate_template(state: &WizardState) -> Validation {
  let mut errors = Vec::new();

  match state.template {
    Template::None => errors.push("Select a template".to_string()),
    Template::Bbb { percent, .. } => {
      if !(percent.is_finite() && percent > 0.0 && percent <= 100.0) {
        errors.push("Choose a BBB percent between 0 and 100".to_string());
      }
    }
    Template::Bodyweight { target_reps } => {
      if target_reps == 0 {
        errors.push("Set a bodyweight rep target".to_string());
      }
    }
    Template::Triumvirate | Template::PeriodizationBible | Template::JackShit => {}
  }

  Validation::from_errors(errors)
}

pub fn validate_schedule(state: &WizardState) -> Validation {
  let mut errors = Vec::new();

  if state.schedule.days.is_empty() {
    errors.push("Define at least one training day".to_string());
  }
  let expected = state.schedule.frequency.days_per_week();
  if !state.schedule.days.is_empty() && state.schedule.days.len() < expected {
    errors.push(format!(
      "A {} schedule needs {} training days",
      state.schedule.frequency, expected
    ));
  }

  Validation::from_errors(errors)
}

pub fn validate_loading(state: &WizardState) -> Validation {
  let mut errors = Vec::new();

  if !matches!(state.loading.option, 1 | 2) {
    errors.push("Choose a loading option (1 or 2)".to_string());
  }
  if !(1..=4).contains(&state.loading.preview_week) {
    errors.push("Preview week must be between 1 and 4".to_string());
  }

  Validation::from_errors(errors)
}

pub fn validate_assistance(state: &WizardState) -> Validation {
  // Templates with fixed picks are complete by construction; only a custom
  // (no-template) path needs per-day selections, and Jack Shit skips out.
  match state.template {
    Template::None => {
      let mut errors = Vec::new();
      for day in &state.schedule.days {
        let covered = state
          .assistance
          .selections
          .get(&day.lift)
          .is_some_and(|picks| !picks.is_empty());
        if !covered {
          errors.push(format!("Assistance not set for the {} day", day.lift));
        }
      }
      Validation::from_errors(errors)
    }
    _ => Validation::ok(),
  }
}

fn validate_review(_state: &WizardState) -> Validation {
  Validation::ok()
}

/// ---------------------------------------------------------------------------
/// Derived Queries
/// ---------------------------------------------------------------------------

pub fn is_step_visible(id: StepId, state: &WizardState) -> bool {
  (descriptor(id).visible)(state)
}

pub fn validate_step(id: StepId, state: &WizardState) -> Validation {
  (descriptor(id).validate)(state)
}

pub fn step_status(id: StepId, state: &WizardState) -> StepStatus {
  let validation = validate_step(id, state);
  if validation.is_valid {
    StepStatus::Complete
  } else if !validation.errors.is_empty() {
    StepStatus::Error
  } else {
    StepStatus::Incomplete
  }
}

/// Ids of the currently visible steps, in wizard order
pub fn visible_steps(state: &WizardState) -> Vec<StepId> {
  STEPS
    .iter()
    .filter(|step| (step.visible)(state))
    .map(|step| step.id)
    .collect()
}

/// Status for every visible step, in wizard order
pub fn step_statuses(state: &WizardState) -> Vec<(StepId, StepStatus)> {
  visible_steps(state)
    .into_iter()
    .map(|id| (id, step_status(id, state)))
    .collect()
}

/// Whether navigation to `id` is currently allowed: the step itself must be
/// visible and every visible prerequisite must be complete.
pub fn can_advance_to_step(id: StepId, state: &WizardState) -> bool {
  let step = descriptor(id);
  if !(step.visible)(state) {
    return false;
  }
  step
    .prerequisites
    .iter()
    .filter(|prereq| is_step_visible(**prereq, state))
    .all(|prereq| step_status(*prereq, state) == StepStatus::Complete)
}

/// The first visible step with no unmet prerequisite
pub fn first_reachable_step(state: &WizardState) -> Option<StepId> {
  visible_steps(state)
    .into_iter()
    .find(|id| can_advance_to_step(*id, state))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
