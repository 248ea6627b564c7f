//! Table of all note lengths for a given tempo.

use core::slice;

use crate::note::{Modifier, NoteDuration, Subdivision};
use crate::tempo::{InvalidTempo, Tempo};

const TIERS: usize = Subdivision::ALL.len();
const PER_TIER: usize = Modifier::ALL.len();
const LEN: usize = TIERS * PER_TIER;

/// Lengths of whole through sixty-fourth notes, each straight, dotted
/// and as a triplet.
///
/// Entries are ordered from the longest subdivision to the shortest.
/// Within each subdivision, the straight value goes first, followed
/// by dotted and triplet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationTable {
    entries: [NoteDuration; LEN],
}

impl DurationTable {
    pub const LEN: usize = LEN;

    #[must_use]
    pub fn calculate(tempo: Tempo) -> Self {
        let quarter_ms = tempo.beat_interval();
        let mut entries =
            [NoteDuration::new(Subdivision::Whole, Modifier::Straight, quarter_ms); Self::LEN];
        for (i, subdivision) in Subdivision::ALL.iter().enumerate() {
            for (j, modifier) in Modifier::ALL.iter().enumerate() {
                entries[i * PER_TIER + j] = NoteDuration::new(*subdivision, *modifier, quarter_ms);
            }
        }
        Self { entries }
    }

    /// # Errors
    ///
    /// This fails with `InvalidTempo` when `bpm` is zero, negative or not
    /// finite. No table is calculated in such case.
    pub fn from_bpm(bpm: f64) -> Result<Self, InvalidTempo> {
        Tempo::new(bpm).map(Self::calculate)
    }

    #[must_use]
    pub fn entries(&self) -> &[NoteDuration; Self::LEN] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NoteDuration> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, NoteDuration> {
        self.entries.iter()
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn len(&self) -> usize {
        Self::LEN
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn find(&self, subdivision: Subdivision, modifier: Modifier) -> &NoteDuration {
        &self.entries[subdivision as usize * PER_TIER + modifier as usize]
    }

    /// Iterate entries grouped by their subdivision.
    pub fn tiers(&self) -> impl Iterator<Item = (Subdivision, [NoteDuration; PER_TIER])> + '_ {
        Subdivision::ALL
            .into_iter()
            .zip(self.entries.chunks_exact(PER_TIER))
            .map(|(subdivision, chunk)| (subdivision, [chunk[0], chunk[1], chunk[2]]))
    }
}

impl<'a> IntoIterator for &'a DurationTable {
    type Item = &'a NoteDuration;
    type IntoIter = slice::Iter<'a, NoteDuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ms(table: &DurationTable, subdivision: Subdivision, modifier: Modifier) -> f64 {
        table.find(subdivision, modifier).milliseconds
    }

    #[test]
    fn at_120_bpm_it_matches_known_values() {
        let table = DurationTable::from_bpm(120.0).unwrap();
        assert_relative_eq!(ms(&table, Subdivision::Quarter, Modifier::Straight), 500.0);
        assert_relative_eq!(ms(&table, Subdivision::Whole, Modifier::Straight), 2000.0);
        assert_relative_eq!(ms(&table, Subdivision::Quarter, Modifier::Dotted), 750.0);
        assert_relative_eq!(
            ms(&table, Subdivision::Quarter, Modifier::Triplet),
            333.333,
            epsilon = 0.001
        );
        assert_relative_eq!(ms(&table, Subdivision::Sixteenth, Modifier::Straight), 125.0);
    }

    #[test]
    fn entries_are_ordered_by_subdivision_then_modifier() {
        let table = DurationTable::from_bpm(120.0).unwrap();
        let labels: [&str; 6] = [
            table.entries()[0].label(),
            table.entries()[1].label(),
            table.entries()[2].label(),
            table.entries()[3].label(),
            table.entries()[19].label(),
            table.entries()[20].label(),
        ];
        assert_eq!(
            labels,
            [
                "Whole Note",
                "Dotted Whole Note",
                "Triplet Whole Note",
                "Half Note",
                "Dotted Sixty-fourth Note",
                "Triplet Sixty-fourth Note",
            ]
        );
    }

    #[test]
    fn it_reproduces_values_of_all_tiers() {
        let table = DurationTable::from_bpm(120.0).unwrap();
        let expected = [
            2000.0, 3000.0, 4000.0 / 3.0, // whole
            1000.0, 1500.0, 2000.0 / 3.0, // half
            500.0, 750.0, 1000.0 / 3.0, // quarter
            250.0, 375.0, 500.0 / 3.0, // eighth
            125.0, 187.5, 250.0 / 3.0, // sixteenth
            62.5, 93.75, 125.0 / 3.0, // thirty-second
            31.25, 46.875, 62.5 / 3.0, // sixty-fourth
        ];
        for (entry, expected) in table.iter().zip(expected) {
            assert_relative_eq!(entry.milliseconds, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn tiers_group_three_modifiers_under_each_subdivision() {
        let table = DurationTable::from_bpm(90.0).unwrap();
        let mut count = 0;
        for (i, (subdivision, notes)) in table.tiers().enumerate() {
            assert_eq!(subdivision, Subdivision::ALL[i]);
            for (note, modifier) in notes.iter().zip(Modifier::ALL) {
                assert_eq!(note.subdivision, subdivision);
                assert_eq!(note.modifier, modifier);
            }
            count += 1;
        }
        assert_eq!(count, 7);
        assert_eq!(
            table.tiers().map(|(s, _)| s.heading()).last(),
            Some("Sixty-fourth Notes")
        );
    }

    #[test]
    fn when_given_zero_tempo_it_is_rejected() {
        assert_eq!(DurationTable::from_bpm(0.0), Err(InvalidTempo(0.0)));
    }

    #[test]
    fn when_given_negative_tempo_it_is_rejected() {
        assert_eq!(DurationTable::from_bpm(-120.0), Err(InvalidTempo(-120.0)));
    }

    #[test]
    fn when_given_tempo_at_the_edge_of_overflow_all_entries_are_finite() {
        assert_eq!(DurationTable::from_bpm(1e-305), Err(InvalidTempo(1e-305)));

        for bpm in [1e-300, f64::MAX] {
            let table = DurationTable::from_bpm(bpm).unwrap();
            for entry in &table {
                assert!(entry.milliseconds.is_finite() && entry.milliseconds > 0.0);
            }
        }
    }

    #[test]
    fn entries_can_be_accessed_by_index() {
        let table = DurationTable::from_bpm(120.0).unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get(7).unwrap().label(), "Dotted Quarter Note");
        assert_relative_eq!(table.get(20).unwrap().milliseconds, 62.5 / 3.0);
        assert_eq!(table.get(21), None);
    }

    #[test]
    fn when_calculated_twice_it_returns_identical_tables() {
        let tempo = Tempo::new(133.7).unwrap();
        assert_eq!(DurationTable::calculate(tempo), DurationTable::calculate(tempo));
    }

    proptest! {
        #[test]
        fn for_any_positive_tempo_quarter_note_is_exactly_one_beat(bpm in 0.001f64..10_000.0) {
            let table = DurationTable::from_bpm(bpm).unwrap();
            prop_assert_eq!(table.len(), 21);
            prop_assert_eq!(table.iter().count(), 21);
            prop_assert_eq!(table.entries()[6].label(), "Quarter Note");
            prop_assert_eq!(table.entries()[6].milliseconds, 60_000.0 / bpm);
        }

        #[test]
        fn for_any_positive_tempo_modifiers_keep_their_ratio(bpm in 0.001f64..10_000.0) {
            let table = DurationTable::from_bpm(bpm).unwrap();
            for (_, [straight, dotted, triplet]) in table.tiers() {
                prop_assert!(relative_eq!(
                    dotted.milliseconds,
                    straight.milliseconds * 1.5,
                    max_relative = 1e-9
                ));
                prop_assert!(relative_eq!(
                    triplet.milliseconds,
                    straight.milliseconds * 2.0 / 3.0,
                    max_relative = 1e-9
                ));
                prop_assert!(straight.milliseconds.is_finite() && straight.milliseconds > 0.0);
            }
        }
    }
}
