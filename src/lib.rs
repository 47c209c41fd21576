//! liftplan - deterministic 5/3/1 program engine
//!
//! Turns one immutable wizard-state snapshot into a fully specified 4-week
//! training program, and derives wizard step visibility/status/navigation
//! from the same snapshot. The core is pure and synchronous; the snapshot
//! store in [`store`] is the only module that touches I/O.

pub mod loading;
pub mod program;
pub mod rounding;
pub mod schedule;
pub mod state;
pub mod store;
pub mod supplemental;
pub mod training_max;
pub mod wizard;

#[cfg(test)]
mod test_utils;

pub use program::{build_program, Program};
pub use state::WizardState;
