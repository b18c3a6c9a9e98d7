//! Composition of waves into the parameter set sent to a display.

use serde::Serialize;

use super::wave::{Wave, create_color_cycle_wave, create_moving_wave};

/// Number of wave slots a display renders.
pub const NUM_WAVES: usize = 4;
/// Ticks in one full temporal cycle.
pub const TIME_PERIOD: u8 = 255;
/// Pixels in one full spatial cycle.
pub const DISTANCE_PERIOD: u8 = 32;

/// Error returned when waves cannot be composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveParametersError {
    /// More waves were supplied than a display has slots for.
    TooManyWaves(usize),
}

impl std::fmt::Display for WaveParametersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyWaves(count) => {
                write!(f, "at most {NUM_WAVES} waves may be supplied, got {count}")
            }
        }
    }
}

impl std::error::Error for WaveParametersError {}

/// A complete animation: the ordered wave layers plus the periods they are
/// evaluated over.
///
/// # Invariants
/// - `waves` holds exactly [`NUM_WAVES`] entries; unused slots are
///   [`Wave::empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveParameters {
    pub time_period: u8,
    pub distance_period: u8,
    pub waves: [Wave; NUM_WAVES],
}

impl WaveParameters {
    /// The layers that were actually supplied, in order.
    pub fn active_waves(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter().filter(|wave| !wave.is_empty())
    }
}

/// Compose `waves` in order, bottom layer first.
///
/// # Errors
/// Returns `WaveParametersError::TooManyWaves` if more than [`NUM_WAVES`]
/// waves are supplied.
pub fn create_wave_parameters(waves: &[Wave]) -> Result<WaveParameters, WaveParametersError> {
    if waves.len() > NUM_WAVES {
        return Err(WaveParametersError::TooManyWaves(waves.len()));
    }

    let mut slots = [Wave::empty(); NUM_WAVES];
    slots[..waves.len()].copy_from_slice(waves);

    Ok(WaveParameters {
        time_period: TIME_PERIOD,
        distance_period: DISTANCE_PERIOD,
        waves: slots,
    })
}

/// The pattern served to authorized displays: a cyan band moving along the
/// strip over a fully opaque, slow color cycle.
///
/// # Errors
/// Propagates composition errors from [`create_wave_parameters`].
pub fn led_pattern() -> Result<WaveParameters, WaveParametersError> {
    create_wave_parameters(&[
        create_moving_wave(180, 255, 8, 1),
        create_color_cycle_wave(2, 255),
    ])
}
