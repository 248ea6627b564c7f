use spacetime_calc::Tempo;

use super::advisory::Advisory;
use super::configuration::{Configuration, Recompute};
use super::interval_detector::{IntervalDetector, TapRejected};
use crate::log;

/// Estimate tempo being tapped in by the user.
///
/// Taps too close to the previous one are ignored as bounces. Once enough
/// taps are collected, the tempo is derived from the mean interval between
/// them. The estimate is held until `reset`.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapTempoEstimator {
    detector: IntervalDetector,
    taps_required: usize,
    recompute: Recompute,
    estimate: Option<Tempo>,
    advisory: Advisory,
}

/// Not enough taps were collected to estimate tempo yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EstimateUnavailable;

/// Phase of the tap session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapState {
    Collecting,
    /// Carries the number of taps accepted so far.
    Accumulating(usize),
    Ready(Tempo),
}

/// Outcome of an accepted tap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tap {
    /// The tap was recorded, carries the total of accepted taps.
    Accepted(usize),
    /// The tap was recorded and a tempo estimate is available.
    Estimated(Tempo),
}

impl Default for TapTempoEstimator {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl TapTempoEstimator {
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        let taps_required = configuration.taps_required();
        Self {
            detector: IntervalDetector::new(configuration.minimum_tap_interval()),
            taps_required,
            recompute: configuration.recompute,
            estimate: None,
            advisory: Advisory::Instructions(taps_required),
        }
    }

    /// Register a tap happening at `now` milliseconds.
    ///
    /// # Errors
    ///
    /// This fails with `TapRejected` when the tap arrived within the minimum
    /// interval after the last accepted one. Only the advisory is changed
    /// in such case.
    pub fn register_tap(&mut self, now: f64) -> Result<Tap, TapRejected> {
        let accepted = match self.detector.trigger(now) {
            Ok(accepted) => accepted,
            Err(rejected) => {
                log::debug!("Ignoring tap after interval={:?}", rejected.interval);
                self.advisory = Advisory::TapIgnored;
                return Err(rejected);
            }
        };

        if accepted < self.taps_required {
            self.advisory = Advisory::MoreTaps(self.taps_required - accepted);
            return Ok(Tap::Accepted(accepted));
        }

        if accepted == self.taps_required || self.recompute.is_every_tap() {
            self.estimate();
        }

        match self.estimate {
            Some(tempo) => {
                self.advisory = Advisory::Estimated(tempo);
                Ok(Tap::Estimated(tempo))
            }
            None => Ok(Tap::Accepted(accepted)),
        }
    }

    fn estimate(&mut self) {
        let tempo = self
            .detector
            .mean_interval()
            .and_then(|interval| Tempo::from_beat_interval(interval).ok());
        if let Some(tempo) = tempo {
            log::info!("Estimated tapped tempo={:?}", tempo.bpm());
            self.estimate = Some(tempo);
        } else {
            log::debug!("Failed to estimate tempo from taps");
        }
    }

    /// # Errors
    ///
    /// This fails with `EstimateUnavailable` until the required number of
    /// taps is accepted.
    pub fn estimate_tempo(&self) -> Result<Tempo, EstimateUnavailable> {
        match self.estimate {
            Some(tempo) if self.detector.accepted() >= self.taps_required => Ok(tempo),
            _ => Err(EstimateUnavailable),
        }
    }

    pub fn reset(&mut self) {
        self.detector.reset();
        self.estimate = None;
        self.advisory = Advisory::Instructions(self.taps_required);
    }

    pub fn state(&self) -> TapState {
        match (self.detector.accepted(), self.estimate) {
            (0, _) => TapState::Collecting,
            (accepted, None) => TapState::Accumulating(accepted),
            (_, Some(tempo)) => TapState::Ready(tempo),
        }
    }

    pub fn accepted_taps(&self) -> usize {
        self.detector.accepted()
    }

    pub fn taps_required(&self) -> usize {
        self.taps_required
    }

    pub fn advisory(&self) -> Advisory {
        self.advisory
    }

    pub fn last_tap(&self) -> Option<f64> {
        self.detector.last()
    }
}
