//! Wave-based animation descriptions for remote LED displays.
//!
//! An animation is a stack of up to four [`Wave`] layers. Each layer drives
//! the hue, saturation, value and alpha of every pixel with its own
//! periodic [`WaveChannel`]. The display evaluates the channels itself; this
//! module only describes them.
//!
//! # Invariants
//! - Every constructor is pure: identical arguments yield identical values.
//! - A [`WaveParameters`] always carries exactly [`NUM_WAVES`] waves.

pub mod parameters;
pub mod wave;

pub use parameters::{
    DISTANCE_PERIOD, NUM_WAVES, TIME_PERIOD, WaveParameters, WaveParametersError,
    create_wave_parameters, led_pattern,
};
pub use wave::{
    Wave, WaveChannel, create_color_cycle_wave, create_moving_wave, create_pulsing_wave,
    create_solid_color_wave,
};
