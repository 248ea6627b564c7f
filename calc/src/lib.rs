//! Conversion of musical tempo into time values for reverb and delay.
//!
//! Everything here is a pure calculation. There is no state kept between
//! calls, so the components are safe to use from any loop, at any rate.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod note;
pub mod table;
pub mod tempo;

pub use note::{Modifier, NoteDuration, Subdivision};
pub use table::DurationTable;
pub use tempo::{InvalidTempo, Tempo};
