//! Requests passed from the user interface to the store.

/// Action triggered by the user.
///
/// Timestamps and tempo are given in milliseconds and beats per minute
/// respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    /// Tempo typed in by the user, validated only on `Calculate`.
    SetTempo(f64),
    Calculate,
    /// Tap button was pressed at the given time.
    Tap(f64),
    RestartTapping,
    /// Use the tapped tempo as the tempo input and calculate the table.
    CalculateFromTaps,
}
