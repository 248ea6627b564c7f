//! Reducer wiring tempo input, tap tempo and the duration table together.

use spacetime_calc::{DurationTable, InvalidTempo, Tempo};

use crate::action::ControlAction;
use crate::cache::{Advisory, Cache, Configuration, TapTempoEstimator};
use crate::log;

/// The main store of the calculator state.
///
/// It takes `ControlAction` from the user interface, applies it on the
/// cache, and responds with a `Reaction` that the interface should render.
/// The state can be also polled at any time.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub(crate) cache: Cache,
}

/// Response of the store after processing an action.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reaction {
    TempoSet,
    TableCalculated(DurationTable),
    TempoRejected(InvalidTempo),
    /// Tapping state changed, carries the new instructions.
    Tapped(Advisory),
    /// Calculation from taps was requested before the tempo was estimated.
    EstimateUnavailable,
}

impl Store {
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self {
            cache: Cache::new(configuration),
        }
    }

    pub fn apply_control_action(&mut self, action: ControlAction) -> Reaction {
        match action {
            ControlAction::SetTempo(bpm) => {
                self.cache.tempo_input = bpm;
                Reaction::TempoSet
            }
            ControlAction::Calculate => self.calculate(),
            ControlAction::Tap(now) => {
                // Rejection is reported through the advisory.
                let _ = self.cache.tap_estimator.register_tap(now);
                Reaction::Tapped(self.cache.tap_estimator.advisory())
            }
            ControlAction::RestartTapping => {
                log::info!("Restarting tap tempo");
                self.cache.tap_estimator.reset();
                Reaction::Tapped(self.cache.tap_estimator.advisory())
            }
            ControlAction::CalculateFromTaps => self.calculate_from_taps(),
        }
    }

    fn calculate(&mut self) -> Reaction {
        match DurationTable::from_bpm(self.cache.tempo_input) {
            Ok(table) => {
                log::info!("Calculated table for tempo={:?}", self.cache.tempo_input);
                self.cache.table = Some(table);
                Reaction::TableCalculated(table)
            }
            Err(invalid) => {
                log::debug!("Rejecting tempo={:?}", invalid.0);
                Reaction::TempoRejected(invalid)
            }
        }
    }

    fn calculate_from_taps(&mut self) -> Reaction {
        match self.cache.tap_estimator.estimate_tempo() {
            Ok(tempo) => {
                self.cache.tempo_input = tempo.bpm();
                let table = DurationTable::calculate(tempo);
                self.cache.table = Some(table);
                Reaction::TableCalculated(table)
            }
            Err(_) => Reaction::EstimateUnavailable,
        }
    }

    pub fn tempo_input(&self) -> f64 {
        self.cache.tempo_input
    }

    /// The validated tempo input, if it is valid.
    pub fn tempo(&self) -> Option<Tempo> {
        Tempo::new(self.cache.tempo_input).ok()
    }

    /// The latest successfully calculated table.
    pub fn table(&self) -> Option<&DurationTable> {
        self.cache.table.as_ref()
    }

    pub fn tap_estimator(&self) -> &TapTempoEstimator {
        &self.cache.tap_estimator
    }

    pub fn advisory(&self) -> Advisory {
        self.cache.tap_estimator.advisory()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.cache.configuration
    }
}
