//! Increment rounding for barbell loads
//!
//! Every derived weight in the engine funnels through `round_to_increment`,
//! so plate-increment rounding happens in exactly one place. All invalid
//! input paths degrade to a deterministic numeric fallback; nothing in this
//! module returns an error or panics.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::state::Units;

/// ---------------------------------------------------------------------------
/// Rounding Mode
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundMode {
  #[default]
  Nearest,
  Floor,
  Ceiling,
}

impl RoundMode {
  /// Normalize a mode token, absorbing the legacy aliases that historical
  /// call shapes used (`ceil`/`up` -> ceiling, `down` -> floor).
  /// Unrecognized tokens default to nearest.
  pub fn normalize(token: &str) -> Self {
    match token {
      "floor" | "down" => RoundMode::Floor,
      "ceiling" | "ceil" | "up" => RoundMode::Ceiling,
      _ => RoundMode::Nearest,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      RoundMode::Nearest => "nearest",
      RoundMode::Floor => "floor",
      RoundMode::Ceiling => "ceiling",
    }
  }
}

impl std::fmt::Display for RoundMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Serialize for RoundMode {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

// Stored snapshots may carry legacy alias tokens; deserialization runs them
// through the same normalization as the canonical ones.
impl<'de> Deserialize<'de> for RoundMode {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let token = String::deserialize(deserializer)?;
    Ok(RoundMode::normalize(&token))
  }
}

/// ---------------------------------------------------------------------------
/// Rounding Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
  pub increment: f64,
  pub mode: RoundMode,
}

impl Default for RoundingConfig {
  fn default() -> Self {
    Self {
      increment: Units::Lb.default_increment(),
      mode: RoundMode::Nearest,
    }
  }
}

impl RoundingConfig {
  /// Resolve the effective rounding config for a snapshot: the stored
  /// section if present, otherwise the unit default (5 lb / 2.5 kg, nearest).
  /// This is the single place increment/mode defaults are computed.
  pub fn resolve(rounding: Option<&RoundingConfig>, units: Units) -> RoundingConfig {
    match rounding {
      Some(config) => *config,
      None => RoundingConfig {
        increment: units.default_increment(),
        mode: RoundMode::Nearest,
      },
    }
  }

  pub fn round(&self, value: f64) -> f64 {
    round_to_increment(value, self.increment, self.mode)
  }
}

/// ---------------------------------------------------------------------------
/// Rounding Functions
/// ---------------------------------------------------------------------------

/// Round `value` to a multiple of `increment` under `mode`.
///
/// A non-finite value rounds to 0. A non-finite or non-positive increment
/// falls back to plain nearest-integer rounding of the value.
pub fn round_to_increment(value: f64, increment: f64, mode: RoundMode) -> f64 {
  if !value.is_finite() {
    return 0.0;
  }
  if !increment.is_finite() || increment <= 0.0 {
    return value.round();
  }
  let x = value / increment;
  let steps = match mode {
    RoundMode::Floor => x.floor(),
    RoundMode::Ceiling => x.ceil(),
    RoundMode::Nearest => x.round(),
  };
  steps * increment
}

/// Ceiling convenience wrapper
pub fn round_up_to_increment(value: f64, increment: f64) -> f64 {
  round_to_increment(value, increment, RoundMode::Ceiling)
}

/// Floor convenience wrapper
pub fn round_down_to_increment(value: f64, increment: f64) -> f64 {
  round_to_increment(value, increment, RoundMode::Floor)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
