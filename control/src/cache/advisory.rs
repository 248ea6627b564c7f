//! Instructions shown to the user while tapping.

use core::fmt;

use spacetime_calc::Tempo;

/// Message describing the state of tap tempo estimation.
///
/// This is purely informational, nothing in the control logic depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advisory {
    /// Initial prompt, carries the number of taps required.
    Instructions(usize),
    /// Some taps were accepted, carries how many are still missing.
    MoreTaps(usize),
    TapIgnored,
    Estimated(Tempo),
}

impl Advisory {
    pub fn is_tap_ignored(&self) -> bool {
        matches!(self, Self::TapIgnored)
    }

    pub fn estimated_tempo(&self) -> Option<Tempo> {
        match self {
            Self::Estimated(tempo) => Some(*tempo),
            _ => None,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instructions(taps) => {
                write!(f, "Press the tap button {taps} times to calculate BPM")
            }
            Self::MoreTaps(1) => write!(f, "Tap 1 more time to calculate BPM"),
            Self::MoreTaps(taps) => write!(f, "Tap {taps} more times to calculate BPM"),
            Self::TapIgnored => write!(f, "Tap ignored (too fast). Please tap again."),
            // Whole BPM, cut rather than rounded.
            Self::Estimated(tempo) => write!(f, "Calculated BPM: {}", tempo.bpm() as u32),
        }
    }
}
