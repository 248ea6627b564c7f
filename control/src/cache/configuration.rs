/// Tweaking of the tap tempo behavior.
///
/// The defaults follow the classic behavior of the calculator: 8 taps are
/// needed, taps closer than 10 ms to the previous one are ignored as
/// bounces, and the tempo is estimated only once per session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Taps this close or closer to the previous one in milliseconds are
    /// ignored. Negative values are treated as zero.
    pub minimum_tap_interval: f64,
    /// Number of accepted taps needed for an estimate. Kept within
    /// `MIN_TAPS_REQUIRED..=MAX_TAPS_REQUIRED`.
    pub taps_required: usize,
    pub recompute: Recompute,
}

/// What happens with the estimate once enough taps were collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Recompute {
    /// Estimate once on the last required tap, then hold it until reset.
    /// Later taps are still accepted.
    Once,
    /// Estimate again on every accepted tap, averaging all intervals since
    /// the first tap of the session.
    EveryTap,
}

pub const MIN_TAPS_REQUIRED: usize = 2;
pub const MAX_TAPS_REQUIRED: usize = 32;

impl Default for Configuration {
    fn default() -> Self {
        Self {
            minimum_tap_interval: 10.0,
            taps_required: 8,
            recompute: Recompute::Once,
        }
    }
}

impl Configuration {
    pub(crate) fn minimum_tap_interval(&self) -> f64 {
        if self.minimum_tap_interval > 0.0 {
            self.minimum_tap_interval
        } else {
            0.0
        }
    }

    pub(crate) fn taps_required(&self) -> usize {
        self.taps_required.clamp(MIN_TAPS_REQUIRED, MAX_TAPS_REQUIRED)
    }
}

impl Recompute {
    pub fn is_every_tap(&self) -> bool {
        matches!(self, Self::EveryTap)
    }
}
