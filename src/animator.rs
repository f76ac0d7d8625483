//! Blocking animation engine for the four-LED array.
//!
//! Provides [`LedAnimator`], which owns the [`LedArray`] and runs one named
//! animation at a time. Every animation repeats a fixed cycle of LED
//! commands and sleeps until its deadline has passed, then turns all LEDs
//! off. The deadline is only checked between cycles, so a run lasts the
//! requested duration plus at most one cycle.

use crate::command::Animation;
use crate::led::{INTENSITY_MAX, Led, LedArray};
use crate::random::RandomSource;
use crate::time::{Deadline, TimeInstant, TimeSource};
use crate::timing::{
    BOUNCE_STEPS, BURST_STEPS, HEARTBEAT, Phase, RAMP_STEPS, Ramp, SCROLL_STEPS, fade_steps,
    heartbeat_phase_ms, step_delay,
};
use crate::types::{DelayMode, Dimmable, Direction, LedPosition, Trail};
use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;
use heapless::Deque;

/// The two middle LEDs.
const INNER_PAIR: [LedPosition; 2] = [LedPosition::Green, LedPosition::Orange];

/// The two outermost LEDs.
const OUTER_PAIR: [LedPosition; 2] = [LedPosition::Red, LedPosition::Blue];

/// Runs light-pattern animations on a four-LED board.
///
/// The animator owns the LEDs, the delay provider and the random source, and
/// borrows the clock. Each animation method blocks for its whole run.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
/// * `D` - Blocking delay provider
/// * `R` - Random source used by the random animations
pub struct LedAnimator<'t, I, L, T, D, R>
where
    I: TimeInstant,
    L: Led,
    T: TimeSource<I>,
    D: DelayNs,
    R: RandomSource,
{
    leds: LedArray<L>,
    time_source: &'t T,
    delay: D,
    rng: R,
    _instant: PhantomData<I>,
}

impl<'t, I, L, T, D, R> LedAnimator<'t, I, L, T, D, R>
where
    I: TimeInstant,
    L: Led,
    T: TimeSource<I>,
    D: DelayNs,
    R: RandomSource,
{
    /// Creates an animator with all LEDs turned off.
    pub fn new(mut leds: LedArray<L>, time_source: &'t T, delay: D, rng: R) -> Self {
        leds.all_off();

        Self {
            leds,
            time_source,
            delay,
            rng,
            _instant: PhantomData,
        }
    }

    /// Runs an animation described by an [`Animation`] command.
    pub fn play(&mut self, animation: Animation) {
        match animation {
            Animation::AllOff => self.all_off(),
            Animation::AllOn => self.all_on(),
            Animation::RandomSingle {
                delay_ms,
                duration_ms,
                mode,
            } => self.random_single(delay_ms, duration_ms, mode),
            Animation::RandomMultiple {
                delay_ms,
                duration_ms,
                mode,
            } => self.random_multiple(delay_ms, duration_ms, mode),
            Animation::Explode {
                delay_ms,
                duration_ms,
            } => self.explode(delay_ms, duration_ms),
            Animation::Implode {
                speed_ms,
                duration_ms,
            } => self.implode(speed_ms, duration_ms),
            Animation::Scroll {
                speed_ms,
                duration_ms,
                trail,
                direction,
            } => self.scroll(speed_ms, duration_ms, trail, direction),
            Animation::Jump {
                speed_ms,
                duration_ms,
                trail,
                direction,
            } => self.jump(speed_ms, duration_ms, trail, direction),
            Animation::Bounce {
                speed_ms,
                duration_ms,
                direction,
            } => self.bounce(speed_ms, duration_ms, direction),
            Animation::ScrollFade {
                speed_ms,
                duration_ms,
                fade,
                direction,
            } => self.scroll_fade(speed_ms, duration_ms, fade, direction),
            Animation::ScrollKnight {
                speed_ms,
                duration_ms,
                fade,
                direction,
            } => self.scroll_knight(speed_ms, duration_ms, fade, direction),
            Animation::Glow {
                delay_ms,
                duration_ms,
                leds,
            } => self.glow(delay_ms, duration_ms, leds),
            Animation::Swing {
                delay_ms,
                duration_ms,
                direction,
            } => self.swing(delay_ms, duration_ms, direction),
            Animation::HeartBeat {
                delay_ms,
                duration_ms,
                leds,
            } => self.heart_beat(delay_ms, duration_ms, leds),
        }
    }

    /// Turns every LED off.
    pub fn all_off(&mut self) {
        self.leds.all_off();
    }

    /// Turns every LED on.
    pub fn all_on(&mut self) {
        self.leds.all_on();
    }

    /// Flashes one randomly chosen LED at a time for `delay_ms` each.
    ///
    /// With [`DelayMode::Random`] every flash lasts a fresh random time in
    /// `0..=delay_ms`.
    pub fn random_single(&mut self, delay_ms: u32, duration_ms: u32, mode: DelayMode) {
        self.run_cycles("random_single", duration_ms, |this| {
            let pause = this.pick_delay(delay_ms, mode);
            let position = this.pick_led();
            this.leds.turn_on(position);
            this.sleep(pause);
            this.leds.turn_off(position);
        });
    }

    /// Turns a random LED on or off every `delay_ms`.
    ///
    /// LEDs are never cleared between picks, so several can be lit at once.
    pub fn random_multiple(&mut self, delay_ms: u32, duration_ms: u32, mode: DelayMode) {
        self.run_cycles("random_multiple", duration_ms, |this| {
            let pause = this.pick_delay(delay_ms, mode);
            let position = this.pick_led();
            if this.rng.random_int(0, 1) == 0 {
                this.leds.turn_on(position);
            } else {
                this.leds.turn_off(position);
            }
            this.sleep(pause);
        });
    }

    /// Lights the inner pair, then the outer pair, then pauses.
    pub fn explode(&mut self, delay_ms: u32, duration_ms: u32) {
        let step_ms = step_delay(delay_ms, BURST_STEPS);
        self.run_cycles("explode", duration_ms, |this| {
            this.burst(INNER_PAIR, OUTER_PAIR, step_ms);
        });
    }

    /// Lights the outer pair, then the inner pair, then pauses.
    pub fn implode(&mut self, speed_ms: u32, duration_ms: u32) {
        let step_ms = step_delay(speed_ms, BURST_STEPS);
        self.run_cycles("implode", duration_ms, |this| {
            this.burst(OUTER_PAIR, INNER_PAIR, step_ms);
        });
    }

    /// Walks along the LEDs one step at a time, then pauses for a step.
    ///
    /// With [`Trail::Hold`] each LED stays lit until the pass ends.
    pub fn scroll(&mut self, speed_ms: u32, duration_ms: u32, trail: Trail, direction: Direction) {
        let step_ms = step_delay(speed_ms, SCROLL_STEPS);
        let order = direction.order();
        self.run_cycles("scroll", duration_ms, |this| {
            for position in order {
                this.flash(position, step_ms, trail);
            }
            this.leds.all_off();
            this.sleep(step_ms);
        });
    }

    /// Alternates between the nearest unvisited LEDs at each end.
    ///
    /// Visits first, last, second, third, then pauses for a step.
    pub fn jump(&mut self, speed_ms: u32, duration_ms: u32, trail: Trail, direction: Direction) {
        let step_ms = step_delay(speed_ms, SCROLL_STEPS);
        let order = direction.order();
        self.run_cycles("jump", duration_ms, |this| {
            let mut pending: Deque<LedPosition, 4> = Deque::new();
            for position in order {
                // Capacity matches the LED count.
                let _ = pending.push_back(position);
            }

            while let Some(front) = pending.pop_front() {
                this.flash(front, step_ms, trail);
                if let Some(back) = pending.pop_back() {
                    this.flash(back, step_ms, trail);
                }
            }
            this.leds.all_off();
            this.sleep(step_ms);
        });
    }

    /// Sweeps a single lit LED to the far end and back.
    pub fn bounce(&mut self, speed_ms: u32, duration_ms: u32, direction: Direction) {
        let step_ms = step_delay(speed_ms, BOUNCE_STEPS);
        let order = direction.order();
        self.run_cycles("bounce", duration_ms, |this| {
            for &position in order.iter().chain(order.iter().rev()) {
                this.flash(position, step_ms, Trail::Clear);
            }
        });
    }

    /// Scrolls a lit head followed by a trail of up to `fade` LEDs.
    ///
    /// A `fade` of zero is a plain scroll. The trail adds windows to the
    /// pass but every window still lasts a quarter of `speed_ms`.
    pub fn scroll_fade(&mut self, speed_ms: u32, duration_ms: u32, fade: u8, direction: Direction) {
        let step_ms = step_delay(speed_ms, SCROLL_STEPS);
        let order = direction.order();
        self.run_cycles("scroll_fade", duration_ms, |this| {
            this.fade_pass(order, fade, step_ms);
        });
    }

    /// Trailing scroll to the far end and back again.
    ///
    /// Windows are timed like bounce steps, an eighth of `speed_ms` each.
    pub fn scroll_knight(
        &mut self,
        speed_ms: u32,
        duration_ms: u32,
        fade: u8,
        direction: Direction,
    ) {
        let step_ms = step_delay(speed_ms, BOUNCE_STEPS);
        let forward = direction.order();
        let backward = direction.reversed().order();
        self.run_cycles("scroll_knight", duration_ms, |this| {
            this.fade_pass(forward, fade, step_ms);
            this.fade_pass(backward, fade, step_ms);
        });
    }

    /// Ramps the selected dimmable LEDs from dark to full over `delay_ms`.
    pub fn glow(&mut self, delay_ms: u32, duration_ms: u32, leds: Dimmable) {
        let step_ms = step_delay(delay_ms, RAMP_STEPS);
        self.run_cycles("glow", duration_ms, |this| {
            for level in Ramp::new(0, INTENSITY_MAX, RAMP_STEPS) {
                this.set_dimmable(leds, level);
                this.sleep(step_ms);
            }
            this.leds.all_off();
        });
    }

    /// Cross-fades orange and blue: one brightens while the other dims,
    /// then the other way around.
    ///
    /// Left to right starts with orange brightening.
    pub fn swing(&mut self, delay_ms: u32, duration_ms: u32, direction: Direction) {
        let step_ms = step_delay(delay_ms, 2 * RAMP_STEPS);
        let (leader, follower) = match direction {
            Direction::LeftToRight => (LedPosition::Orange, LedPosition::Blue),
            Direction::RightToLeft => (LedPosition::Blue, LedPosition::Orange),
        };
        self.run_cycles("swing", duration_ms, |this| {
            this.cross_fade(leader, follower, step_ms);
            this.cross_fade(follower, leader, step_ms);
        });
    }

    /// Pulses the selected dimmable LEDs with a double-peaked heartbeat.
    ///
    /// One beat lasts `delay_ms`, split across the phases of
    /// [`HEARTBEAT`](crate::timing::HEARTBEAT).
    pub fn heart_beat(&mut self, delay_ms: u32, duration_ms: u32, leds: Dimmable) {
        let phase_ms = heartbeat_phase_ms(delay_ms);
        self.run_cycles("heart_beat", duration_ms, |this| {
            let mut level = 0;
            for (weighted, &duration) in HEARTBEAT.iter().zip(phase_ms.iter()) {
                match weighted.phase {
                    Phase::Flat => {
                        this.set_dimmable(leds, level);
                        this.sleep(duration);
                    }
                    Phase::Ramp { target, steps } => {
                        let step_ms = step_delay(duration, steps);
                        for value in Ramp::new(level, target, steps) {
                            this.set_dimmable(leds, value);
                            this.sleep(step_ms);
                        }
                        level = target;
                    }
                }
            }
        });
    }

    /// Returns the LED array.
    pub fn leds(&self) -> &LedArray<L> {
        &self.leds
    }

    /// Returns the LED array mutably, for direct control between animations.
    pub fn leds_mut(&mut self) -> &mut LedArray<L> {
        &mut self.leds
    }

    /// Turns all LEDs off and hands back the owned resources.
    pub fn release(mut self) -> (LedArray<L>, D, R) {
        self.leds.all_off();
        (self.leds, self.delay, self.rng)
    }

    /// Repeats `cycle` until `duration_ms` has passed, then turns all LEDs
    /// off. The deadline is only checked before each cycle.
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables, unused_assignments))]
    fn run_cycles(
        &mut self,
        name: &'static str,
        duration_ms: u32,
        mut cycle: impl FnMut(&mut Self),
    ) {
        let deadline = Deadline::<I>::after(self.time_source, duration_ms);
        #[cfg(feature = "defmt")]
        defmt::debug!("{} started for {} ms", name, duration_ms);

        let mut cycles: u32 = 0;
        while !deadline.has_passed(self.time_source) {
            cycle(self);
            cycles = cycles.saturating_add(1);
        }

        self.leds.all_off();
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{} finished {} cycles after {} ms",
            name,
            cycles,
            deadline.elapsed_ms(self.time_source)
        );
    }

    fn sleep(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn pick_delay(&mut self, delay_ms: u32, mode: DelayMode) -> u32 {
        match mode {
            DelayMode::Fixed => delay_ms,
            DelayMode::Random => self.rng.random_int(0, delay_ms),
        }
    }

    fn pick_led(&mut self) -> LedPosition {
        self.rng
            .random_choice(&LedPosition::ALL)
            .copied()
            .unwrap_or(LedPosition::Red)
    }

    /// Lights `position` for one step.
    fn flash(&mut self, position: LedPosition, step_ms: u32, trail: Trail) {
        self.leds.turn_on(position);
        self.sleep(step_ms);
        if trail == Trail::Clear {
            self.leds.turn_off(position);
        }
    }

    /// First pair on, swap to second pair, then a dark step.
    fn burst(&mut self, first: [LedPosition; 2], second: [LedPosition; 2], step_ms: u32) {
        first.iter().for_each(|&p| self.leds.turn_on(p));
        self.sleep(step_ms);

        first.iter().for_each(|&p| self.leds.turn_off(p));
        second.iter().for_each(|&p| self.leds.turn_on(p));
        self.sleep(step_ms);

        second.iter().for_each(|&p| self.leds.turn_off(p));
        self.sleep(step_ms);
    }

    /// One trailing scroll over `order`. Step `i` lights the window
    /// `i - fade ..= i`, clipped to the array.
    fn fade_pass(&mut self, order: [LedPosition; 4], fade: u8, step_ms: u32) {
        let last_index = order.len() - 1;
        for head in 0..fade_steps(fade) as usize {
            let tail = head.saturating_sub(usize::from(fade));
            for &position in &order[tail..=head.min(last_index)] {
                self.leds.turn_on(position);
            }
            self.sleep(step_ms);
            self.leds.all_off();
        }
    }

    fn cross_fade(&mut self, rising: LedPosition, falling: LedPosition, step_ms: u32) {
        let up = Ramp::new(0, INTENSITY_MAX, RAMP_STEPS);
        let down = Ramp::new(INTENSITY_MAX, 0, RAMP_STEPS);
        for (up, down) in up.zip(down) {
            self.leds.set_intensity(rising, up);
            self.leds.set_intensity(falling, down);
            self.sleep(step_ms);
        }
    }

    fn set_dimmable(&mut self, leds: Dimmable, level: u8) {
        for position in leds.positions() {
            self.leds.set_intensity(position, level);
        }
    }
}
