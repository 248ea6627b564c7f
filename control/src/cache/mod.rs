pub mod advisory;
pub mod configuration;
mod interval_detector;
pub mod tap_estimator;

use spacetime_calc::DurationTable;

pub use self::advisory::Advisory;
pub use self::configuration::{Configuration, Recompute};
pub use self::interval_detector::TapRejected;
pub use self::tap_estimator::{EstimateUnavailable, Tap, TapState, TapTempoEstimator};

/// Cache keeping the state of the calculator.
///
/// This information should be sufficient for the host to render the
/// current tempo input, tapping instructions and the latest table.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cache {
    pub configuration: Configuration,
    pub tempo_input: TempoInput,
    pub tap_estimator: TapTempoEstimator,
    pub table: Option<DurationTable>,
}

/// Raw tempo as entered by the user, not validated yet.
pub type TempoInput = f64;

impl Cache {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            tempo_input: 0.0,
            tap_estimator: TapTempoEstimator::new(configuration),
            table: None,
        }
    }
}
