//! Components of user interface, passing user input to calculations and
//! reactions back.
//!
//! The user either types in a tempo, or taps it in. Tapped tempo is
//! estimated once enough taps are collected and can be then forwarded to
//! the calculation of the duration table:
//!
//! ```text
//!      [ Tempo input ]        [ Tap button ]
//!             |                     |
//!   (SetTempo, Calculate)     (Tap, RestartTapping)
//!             |                     |
//!             V                     V
//!        [ Store {Cache} ] <-- (CalculateFromTaps)
//!             |     |
//!             |     +--> {TapTempoEstimator} --> (Advisory)
//!             V
//!      {DurationTable} --> (Reaction) --> [ Display ]
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod action;
pub mod cache;
mod log;
pub mod store;

pub use spacetime_calc::{DurationTable, InvalidTempo, Modifier, NoteDuration, Subdivision, Tempo};

pub use crate::action::ControlAction;
pub use crate::cache::{
    Advisory, Configuration, EstimateUnavailable, Recompute, Tap, TapRejected, TapState,
    TapTempoEstimator,
};
pub use crate::store::{Reaction, Store};
