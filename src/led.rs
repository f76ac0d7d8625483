//! LED hardware abstraction and the fixed four-LED array.
//!
//! Provides the [`Led`] trait implemented by board drivers, the [`LedArray`]
//! owned by the animator, and adapters for `embedded-hal` GPIO and PWM
//! outputs.

use crate::types::LedPosition;
use core::ops::Index;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Full brightness.
pub const INTENSITY_MAX: u8 = u8::MAX;

/// Trait for abstracting a single LED.
///
/// Implement this for your LED hardware to let the animator drive it.
/// Handle any hardware errors internally - these methods cannot fail.
pub trait Led {
    /// Turns the LED fully on.
    fn turn_on(&mut self);

    /// Turns the LED off.
    fn turn_off(&mut self);

    /// Sets the LED brightness, 0 (off) to 255 (full).
    ///
    /// The default suits LEDs without brightness control: any nonzero
    /// level turns the LED on.
    fn set_intensity(&mut self, level: u8) {
        if level == 0 {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }
}

/// The board's four LEDs in fixed left-to-right order.
#[derive(Debug)]
pub struct LedArray<L: Led> {
    leds: [L; 4],
}

impl<L: Led> LedArray<L> {
    /// Creates the array from the four board LEDs, left to right.
    pub fn new(red: L, green: L, orange: L, blue: L) -> Self {
        Self {
            leds: [red, green, orange, blue],
        }
    }

    /// Creates the array from LEDs already in red, green, orange, blue order.
    pub fn from_array(leds: [L; 4]) -> Self {
        Self { leds }
    }

    /// Turns on the LED at `position`.
    #[inline]
    pub fn turn_on(&mut self, position: LedPosition) {
        self.leds[position.index()].turn_on();
    }

    /// Turns off the LED at `position`.
    #[inline]
    pub fn turn_off(&mut self, position: LedPosition) {
        self.leds[position.index()].turn_off();
    }

    /// Sets the brightness of the LED at `position`.
    #[inline]
    pub fn set_intensity(&mut self, position: LedPosition, level: u8) {
        self.leds[position.index()].set_intensity(level);
    }

    /// Turns every LED off.
    pub fn all_off(&mut self) {
        self.leds.iter_mut().for_each(Led::turn_off);
    }

    /// Turns every LED on.
    pub fn all_on(&mut self) {
        self.leds.iter_mut().for_each(Led::turn_on);
    }

    /// Returns the LED at `position`.
    pub fn led(&self, position: LedPosition) -> &L {
        &self.leds[position.index()]
    }

    /// Returns the LED at `position` mutably.
    pub fn led_mut(&mut self, position: LedPosition) -> &mut L {
        &mut self.leds[position.index()]
    }

    /// Releases the LEDs, left to right.
    pub fn into_leds(self) -> [L; 4] {
        self.leds
    }
}

impl<L: Led> Index<LedPosition> for LedArray<L> {
    type Output = L;

    fn index(&self, position: LedPosition) -> &L {
        self.led(position)
    }
}

/// Which pin level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// LED lights when the pin is high.
    #[default]
    ActiveHigh,
    /// LED lights when the pin is low.
    ActiveLow,
}

/// On/off LED driven by a GPIO output.
pub struct DigitalLed<P: OutputPin> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> DigitalLed<P> {
    /// Wraps `pin` as an LED.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Releases the pin.
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, lit: bool) {
        let high = lit == (self.polarity == Polarity::ActiveHigh);
        // GPIO writes on supported targets are infallible.
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

impl<P: OutputPin> Led for DigitalLed<P> {
    fn turn_on(&mut self) {
        self.drive(true);
    }

    fn turn_off(&mut self) {
        self.drive(false);
    }
}

/// Variable-intensity LED driven by a PWM channel.
pub struct PwmLed<P: SetDutyCycle> {
    channel: P,
}

impl<P: SetDutyCycle> PwmLed<P> {
    /// Wraps a PWM `channel` as an LED.
    pub fn new(channel: P) -> Self {
        Self { channel }
    }

    /// Releases the PWM channel.
    pub fn into_inner(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> Led for PwmLed<P> {
    fn turn_on(&mut self) {
        let _ = self.channel.set_duty_cycle_fully_on();
    }

    fn turn_off(&mut self) {
        let _ = self.channel.set_duty_cycle_fully_off();
    }

    fn set_intensity(&mut self, level: u8) {
        let _ = self
            .channel
            .set_duty_cycle_fraction(u16::from(level), u16::from(INTENSITY_MAX));
    }
}
