//! Note values and their lengths in time.

use crate::tempo::MS_PER_MINUTE;

/// Division of the beat, from the longest to the shortest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subdivision {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
}

/// Modification of the straight note value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modifier {
    Straight,
    /// Extended by half of its own length.
    Dotted,
    /// Three fitting in the time of two.
    Triplet,
}

/// Length of a single note value in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteDuration {
    pub subdivision: Subdivision,
    pub modifier: Modifier,
    pub milliseconds: f64,
}

impl Subdivision {
    pub const ALL: [Self; 7] = [
        Self::Whole,
        Self::Half,
        Self::Quarter,
        Self::Eighth,
        Self::Sixteenth,
        Self::ThirtySecond,
        Self::SixtyFourth,
    ];

    /// Number of quarter notes fitting into the straight note.
    #[must_use]
    pub fn beats(self) -> f64 {
        match self {
            Self::Whole => 4.0,
            Self::Half => 2.0,
            Self::Quarter => 1.0,
            Self::Eighth => 1.0 / 2.0,
            Self::Sixteenth => 1.0 / 4.0,
            Self::ThirtySecond => 1.0 / 8.0,
            Self::SixtyFourth => 1.0 / 16.0,
        }
    }

    /// Title of the group of all modifications of this subdivision.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Whole => "Whole Notes",
            Self::Half => "Half Notes",
            Self::Quarter => "Quarter Notes",
            Self::Eighth => "Eighth Notes",
            Self::Sixteenth => "Sixteenth Notes",
            Self::ThirtySecond => "Thirty-second Notes",
            Self::SixtyFourth => "Sixty-fourth Notes",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Modifier {
    pub const ALL: [Self; 3] = [Self::Straight, Self::Dotted, Self::Triplet];

    /// Apply the modifier on the length of a straight note.
    #[must_use]
    pub fn apply(self, straight: f64) -> f64 {
        match self {
            Self::Straight => straight,
            Self::Dotted => straight * 1.5,
            Self::Triplet => straight * 2.0 / 3.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// Indexed by [subdivision][modifier].
const LABELS: [[&str; 3]; 7] = [
    ["Whole Note", "Dotted Whole Note", "Triplet Whole Note"],
    ["Half Note", "Dotted Half Note", "Triplet Half Note"],
    ["Quarter Note", "Dotted Quarter Note", "Triplet Quarter Note"],
    ["Eighth Note", "Dotted Eighth Note", "Triplet Eighth Note"],
    [
        "Sixteenth Note",
        "Dotted Sixteenth Note",
        "Triplet Sixteenth Note",
    ],
    [
        "Thirty-second Note",
        "Dotted Thirty-second Note",
        "Triplet Thirty-second Note",
    ],
    [
        "Sixty-fourth Note",
        "Dotted Sixty-fourth Note",
        "Triplet Sixty-fourth Note",
    ],
];

impl NoteDuration {
    /// Calculate the length of the given note for a beat of `quarter_ms`.
    ///
    /// The modifier is applied on the straight value of the same
    /// subdivision, not derived from the quarter note.
    #[must_use]
    pub fn new(subdivision: Subdivision, modifier: Modifier, quarter_ms: f64) -> Self {
        let straight = quarter_ms * subdivision.beats();
        Self {
            subdivision,
            modifier,
            milliseconds: modifier.apply(straight),
        }
    }

    /// Human readable name of the note value, e.g. "Dotted Quarter Note".
    #[must_use]
    pub fn label(&self) -> &'static str {
        LABELS[self.subdivision.index()][self.modifier.index()]
    }

    /// The duration rounded to the closest whole number of samples.
    ///
    /// Useful to size delay lines running at the given sample rate.
    #[must_use]
    pub fn samples(&self, sample_rate: f64) -> usize {
        libm::round(self.milliseconds / 1000.0 * sample_rate) as usize
    }

    /// How many times per second would this note repeat.
    #[must_use]
    pub fn hertz(&self) -> f64 {
        1000.0 / self.milliseconds
    }

    /// How many of these notes fit into one minute.
    #[must_use]
    pub fn per_minute(&self) -> f64 {
        MS_PER_MINUTE / self.milliseconds
    }
}
