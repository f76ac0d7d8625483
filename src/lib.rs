#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedAnimator`**: Runs one blocking animation at a time over the four LEDs
//! - **`LedArray`**: The board's red, green, orange and blue LEDs in fixed order
//! - **`Led`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`RandomSource`**: Uniform integers, implemented for every `rand_core::RngCore`
//! - **`Animation`**: Commands describing an animation and its parameters
//!
//! Sleeping goes through `embedded_hal::delay::DelayNs`, so any HAL delay
//! provider can drive the animations. All times are whole milliseconds.

pub mod time;
pub mod types;
pub mod led;
pub mod random;
pub mod timing;
pub mod animator;
pub mod command;

pub use animator::LedAnimator;
pub use command::Animation;
pub use led::{DigitalLed, INTENSITY_MAX, Led, LedArray, Polarity, PwmLed};
pub use random::RandomSource;
pub use time::{Deadline, TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::{SystemClock, ThreadDelay};
pub use types::{DelayMode, Dimmable, Direction, LedPosition, Trail};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_match_plain_calls() {
        assert_eq!(Direction::default(), Direction::LeftToRight);
        assert_eq!(Trail::default(), Trail::Clear);
        assert_eq!(DelayMode::default(), DelayMode::Fixed);
        assert_eq!(Dimmable::default(), Dimmable::BLUE);
    }
}
