//! Schedule rotation
//!
//! Decides which lift appears on which day for each of the 4 preview weeks.
//! Lower frequencies roll the remaining lifts into later weeks instead of
//! dropping them; no lift is ever skipped permanently.

use crate::state::{Frequency, Lift};

/// The preview horizon. The 4-week rotation is authoritative; no longer
/// cycle is promised.
pub const PREVIEW_WEEKS: usize = 4;

/// Fixed alternating pairs used by the 1-day and 2-day frequencies
const PAIR_A: [Lift; 2] = [Lift::Squat, Lift::Bench];
const PAIR_B: [Lift; 2] = [Lift::Deadlift, Lift::Press];

/// Per-week lift assignments for the 4 preview weeks.
///
/// - 4-day: the same 4-lift order every week.
/// - 3-day: each week is a cyclic shift of `order`, dropping a different
///   lift; over the 4 weeks every lift gets equal exposure.
/// - 2-day / 1-day: {squat, bench} and {deadlift, press} alternate.
pub fn preview_weeks(frequency: Frequency, order: &[Lift; 4]) -> Vec<Vec<Lift>> {
  match frequency {
    Frequency::FourDay => (0..PREVIEW_WEEKS).map(|_| order.to_vec()).collect(),
    Frequency::ThreeDay => (0..PREVIEW_WEEKS)
      .map(|week| {
        // Walking the start index backwards each week drops a different
        // trailing lift: W1 P-DL-B, W2 SQ-P-DL, W3 B-SQ-P, W4 DL-B-SQ
        let start = (4 - week) % 4;
        (0..3).map(|i| order[(start + i) % 4]).collect()
      })
      .collect(),
    Frequency::TwoDay | Frequency::OneDay => {
      vec![PAIR_A.to_vec(), PAIR_B.to_vec(), PAIR_A.to_vec(), PAIR_B.to_vec()]
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
