//! Command-based control for the animator.

use crate::types::{DelayMode, Dimmable, Direction, Trail};

/// An animation with its parameters, for dispatch through
/// [`LedAnimator::play`](crate::LedAnimator::play).
///
/// All times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// Turn every LED off.
    AllOff,
    /// Turn every LED on.
    AllOn,
    /// Flash one random LED at a time.
    RandomSingle {
        delay_ms: u32,
        duration_ms: u32,
        mode: DelayMode,
    },
    /// Switch random LEDs on or off, letting them accumulate.
    RandomMultiple {
        delay_ms: u32,
        duration_ms: u32,
        mode: DelayMode,
    },
    /// Light from the inner pair outwards.
    Explode { delay_ms: u32, duration_ms: u32 },
    /// Light from the outer pair inwards.
    Implode { speed_ms: u32, duration_ms: u32 },
    /// Walk along the LEDs.
    Scroll {
        speed_ms: u32,
        duration_ms: u32,
        trail: Trail,
        direction: Direction,
    },
    /// Alternate between the unvisited ends.
    Jump {
        speed_ms: u32,
        duration_ms: u32,
        trail: Trail,
        direction: Direction,
    },
    /// Sweep to the far end and back.
    Bounce {
        speed_ms: u32,
        duration_ms: u32,
        direction: Direction,
    },
    /// Scroll leaving a trail of `fade` lit LEDs.
    ScrollFade {
        speed_ms: u32,
        duration_ms: u32,
        fade: u8,
        direction: Direction,
    },
    /// Trailing scroll there and back.
    ScrollKnight {
        speed_ms: u32,
        duration_ms: u32,
        fade: u8,
        direction: Direction,
    },
    /// Ramp the dimmable LEDs up to full brightness.
    Glow {
        delay_ms: u32,
        duration_ms: u32,
        leds: Dimmable,
    },
    /// Cross-fade orange and blue.
    Swing {
        delay_ms: u32,
        duration_ms: u32,
        direction: Direction,
    },
    /// Pulse the dimmable LEDs like a heartbeat.
    HeartBeat {
        delay_ms: u32,
        duration_ms: u32,
        leds: Dimmable,
    },
}

impl Animation {
    /// Requested run time, zero for the instant all-on/all-off commands.
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Animation::AllOff | Animation::AllOn => 0,
            Animation::RandomSingle { duration_ms, .. }
            | Animation::RandomMultiple { duration_ms, .. }
            | Animation::Explode { duration_ms, .. }
            | Animation::Implode { duration_ms, .. }
            | Animation::Scroll { duration_ms, .. }
            | Animation::Jump { duration_ms, .. }
            | Animation::Bounce { duration_ms, .. }
            | Animation::ScrollFade { duration_ms, .. }
            | Animation::ScrollKnight { duration_ms, .. }
            | Animation::Glow { duration_ms, .. }
            | Animation::Swing { duration_ms, .. }
            | Animation::HeartBeat { duration_ms, .. } => duration_ms,
        }
    }
}
