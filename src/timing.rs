//! Step tables and integer timing arithmetic for the animations.
//!
//! Every animation divides its cycle time into a fixed number of steps. The
//! counts below are the single source of truth for those divisions.
//!
//! | Animation       | Steps per cycle   |
//! |-----------------|-------------------|
//! | random picks    | 1                 |
//! | explode/implode | 3                 |
//! | scroll, jump    | 4 (+1 pause step) |
//! | bounce          | 8                 |
//! | scroll_fade     | 4                 |
//! | scroll_knight   | 8                 |
//! | glow            | 51                |
//! | swing           | 2 × 51            |
//! | heart_beat      | six phases, see [`HEARTBEAT`] |
//!
//! The trailing patterns light `4 + fade` windows per pass (see
//! [`fade_steps`]) but keep the step length of scroll and bounce, so a long
//! trail stretches the cycle instead of shortening each window.

use crate::led::INTENSITY_MAX;

/// Steps in one explode or implode cycle.
pub const BURST_STEPS: u32 = 3;

/// Steps in one scroll or jump pass, one per LED.
pub const SCROLL_STEPS: u32 = 4;

/// Steps in one bounce cycle, forward then back.
pub const BOUNCE_STEPS: u32 = 8;

/// Intensity steps in a full 0 to 255 ramp.
pub const RAMP_STEPS: u32 = 51;

/// Windows lit in one trailing pass with a trail of `fade` LEDs.
#[inline]
pub const fn fade_steps(fade: u8) -> u32 {
    SCROLL_STEPS + fade as u32
}

/// Divides `numerator` by `denominator`, rounding half away from zero.
///
/// A zero denominator yields zero.
#[inline]
pub const fn div_round(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator + denominator / 2) / denominator
}

/// Sleep for each of `steps` equal steps filling `total_ms`.
///
/// Rounded to the nearest millisecond; zero steps means no delay.
#[inline]
pub fn step_delay(total_ms: u32, steps: u32) -> u32 {
    div_round(u64::from(total_ms), u64::from(steps)) as u32
}

/// Intensity at `percent` of full brightness, rounded.
#[inline]
pub const fn percent_of_full(percent: u8) -> u8 {
    div_round(INTENSITY_MAX as u64 * percent as u64, 100) as u8
}

/// Linear intensity ramp from a starting level to a target level.
///
/// Yields `steps` values; the last one is exactly `to`. The starting level
/// itself is not yielded since the previous phase already shows it.
#[derive(Debug, Clone)]
pub struct Ramp {
    from: u8,
    to: u8,
    steps: u32,
    step: u32,
}

impl Ramp {
    /// Creates a ramp of `steps` steps from `from` to `to`.
    pub const fn new(from: u8, to: u8, steps: u32) -> Self {
        Self {
            from,
            to,
            steps,
            step: 0,
        }
    }
}

impl Iterator for Ramp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;

        let from = i64::from(self.from);
        let span = i64::from(self.to) - from;
        let steps = i64::from(self.steps);
        let step = i64::from(self.step);
        // Round the level itself so rising and falling ramps mirror
        let doubled = 2 * (from * steps + span * step) + steps;
        Some((doubled / (2 * steps)) as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ramp {}

/// One phase of the heartbeat waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Hold the current level for the phase duration.
    Flat,
    /// Ramp linearly to `target` in `steps` steps.
    Ramp {
        /// Intensity reached at the end of the phase.
        target: u8,
        /// Number of intensity writes.
        steps: u32,
    },
}

/// A heartbeat phase together with its share of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPhase {
    /// What the phase does.
    pub phase: Phase,
    /// Share of the cycle, in 48ths before normalization.
    pub weight: u32,
}

const fn flat(weight: u32) -> WeightedPhase {
    WeightedPhase {
        phase: Phase::Flat,
        weight,
    }
}

const fn ramp(target: u8, steps: u32, weight: u32) -> WeightedPhase {
    WeightedPhase {
        phase: Phase::Ramp { target, steps },
        weight,
    }
}

/// The heartbeat waveform:
///
/// ```text
///       /\
///    /\/  \
/// __/      \__
/// ```
///
/// Weights are 1/6, 1/8, 1/16, 1/12, 1/4 and 1/6 expressed in 48ths. They
/// add up to 41/48, so each phase receives `weight / 41` of the cycle. Every
/// phase therefore runs 48/41 times longer than its nominal fraction: the
/// flat phases take 8/41 of `delay_ms` rather than 1/6.
pub const HEARTBEAT: [WeightedPhase; 6] = [
    flat(8),
    ramp(percent_of_full(60), 30, 6),
    ramp(percent_of_full(30), 24, 3),
    ramp(INTENSITY_MAX, 45, 4),
    ramp(0, RAMP_STEPS, 12),
    flat(8),
];

/// Sum of the [`HEARTBEAT`] weights.
pub const HEARTBEAT_TOTAL_WEIGHT: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < HEARTBEAT.len() {
        total += HEARTBEAT[i].weight;
        i += 1;
    }
    total
};

/// Splits `delay_ms` across the heartbeat phases.
///
/// Phase boundaries are rounded from the exact cumulative fraction, so the
/// six durations always add up to exactly `delay_ms`.
pub fn heartbeat_phase_ms(delay_ms: u32) -> [u32; 6] {
    let total = u64::from(HEARTBEAT_TOTAL_WEIGHT);
    let mut durations = [0; 6];
    let mut cumulative = 0;
    let mut previous_boundary = 0;
    for (duration, phase) in durations.iter_mut().zip(HEARTBEAT.iter()) {
        cumulative += u64::from(phase.weight);
        let boundary = div_round(u64::from(delay_ms) * cumulative, total);
        *duration = (boundary - previous_boundary) as u32;
        previous_boundary = boundary;
    }
    durations
}
