//! Single animation layers and their channel descriptions.

use serde::Serialize;

/// One periodic channel of a wave.
///
/// The display computes the channel at time `t` and pixel `x` from a sine of
/// `w_t * t + w_x * x + phi`, scaled by `a` and offset by `b`. A channel with
/// `a == 0` is constant at `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct WaveChannel {
    /// Amplitude.
    pub a: u8,
    /// Offset.
    pub b: u8,
    /// Temporal frequency.
    pub w_t: u8,
    /// Spatial frequency.
    pub w_x: u8,
    /// Phase.
    pub phi: u8,
}

impl WaveChannel {
    /// A channel that holds `value` for every pixel at every instant.
    #[must_use]
    pub const fn constant(value: u8) -> Self {
        Self {
            a: 0,
            b: value,
            w_t: 0,
            w_x: 0,
            phi: 0,
        }
    }

    /// A full-range sine that advances by `rate` per tick and by `spacing`
    /// per pixel.
    #[must_use]
    pub const fn oscillating(rate: u8, spacing: u8) -> Self {
        Self {
            a: u8::MAX,
            b: 0,
            w_t: rate,
            w_x: spacing,
            phi: 0,
        }
    }
}

/// One animation layer: a channel each for hue, saturation, value and alpha.
///
/// Layers are blended in order, so an opaque layer hides everything below it
/// and a transparent one lets lower layers show through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Wave {
    pub h: WaveChannel,
    pub s: WaveChannel,
    pub v: WaveChannel,
    pub a: WaveChannel,
}

impl Wave {
    /// The layer that contributes nothing. Used to pad unused slots.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            h: WaveChannel::constant(0),
            s: WaveChannel::constant(0),
            v: WaveChannel::constant(0),
            a: WaveChannel::constant(0),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

/// A single color that does not change.
#[must_use]
pub const fn create_solid_color_wave(hue: u8, saturation: u8, alpha: u8) -> Wave {
    Wave {
        h: WaveChannel::constant(hue),
        s: WaveChannel::constant(saturation),
        v: WaveChannel::constant(u8::MAX),
        a: WaveChannel::constant(alpha),
    }
}

/// A fixed color whose brightness travels along the strip.
///
/// `rate` sets how fast the bands move and `spacing` how tightly they are
/// packed.
#[must_use]
pub const fn create_moving_wave(hue: u8, saturation: u8, rate: u8, spacing: u8) -> Wave {
    Wave {
        h: WaveChannel::constant(hue),
        s: WaveChannel::constant(saturation),
        v: WaveChannel::oscillating(rate, spacing),
        a: WaveChannel::constant(u8::MAX),
    }
}

/// A fixed color whose brightness rises and falls in unison on every pixel.
#[must_use]
pub const fn create_pulsing_wave(hue: u8, saturation: u8, rate: u8) -> Wave {
    Wave {
        h: WaveChannel::constant(hue),
        s: WaveChannel::constant(saturation),
        v: WaveChannel::oscillating(rate, 0),
        a: WaveChannel::constant(u8::MAX),
    }
}

/// Cycles the whole strip through the color wheel at `rate`.
#[must_use]
pub const fn create_color_cycle_wave(rate: u8, alpha: u8) -> Wave {
    Wave {
        h: WaveChannel::oscillating(rate, 0),
        s: WaveChannel::constant(u8::MAX),
        v: WaveChannel::constant(u8::MAX),
        a: WaveChannel::constant(alpha),
    }
}
