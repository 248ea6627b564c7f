//! Validated tempo in beats per minute.

use crate::note::{Modifier, Subdivision};

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Tempo in beats per minute.
///
/// It is guaranteed to be finite and above zero, so any duration derived
/// from it is finite and positive too.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo(f64);

/// The given tempo is zero, negative, not a number at all, or so slow that
/// the longest note would not fit into a finite number.
///
/// Carries the rejected value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidTempo(pub f64);

impl Tempo {
    /// # Errors
    ///
    /// This fails with `InvalidTempo` when `bpm` is not a finite positive
    /// number, or when the dotted whole note would overflow. Such tempo
    /// would yield infinite or negative durations.
    pub fn new(bpm: f64) -> Result<Self, InvalidTempo> {
        let longest = Modifier::Dotted.apply(MS_PER_MINUTE / bpm * Subdivision::Whole.beats());
        if bpm.is_finite() && bpm > 0.0 && longest.is_finite() {
            Ok(Self(bpm))
        } else {
            Err(InvalidTempo(bpm))
        }
    }

    /// Derive tempo from the length of a single beat.
    ///
    /// # Errors
    ///
    /// This fails with `InvalidTempo` when the interval is not positive, or
    /// when it is so short that the tempo would not be finite.
    pub fn from_beat_interval(interval_ms: f64) -> Result<Self, InvalidTempo> {
        Self::new(MS_PER_MINUTE / interval_ms)
    }

    #[must_use]
    pub fn bpm(self) -> f64 {
        self.0
    }

    /// Length of a single beat, a quarter note, in milliseconds.
    #[must_use]
    pub fn beat_interval(self) -> f64 {
        MS_PER_MINUTE / self.0
    }
}

impl TryFrom<f64> for Tempo {
    type Error = InvalidTempo;

    fn try_from(bpm: f64) -> Result<Self, Self::Error> {
        Self::new(bpm)
    }
}

impl From<Tempo> for f64 {
    fn from(tempo: Tempo) -> Self {
        tempo.0
    }
}
