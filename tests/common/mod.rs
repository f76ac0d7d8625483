//! Shared test infrastructure for quad-led-fx integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use quad_led_fx::{
    Led, LedAnimator, LedArray, LedPosition, TimeDuration, TimeInstant, TimeSource,
};
use rand_core::RngCore;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Event Log
// ============================================================================

/// Everything the animator did, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    On(LedPosition),
    Off(LedPosition),
    Intensity(LedPosition, u8),
    Sleep(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every command and tracks its brightness
pub struct MockLed {
    position: LedPosition,
    level: u8,
    log: EventLog,
}

impl MockLed {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_lit(&self) -> bool {
        self.level > 0
    }
}

impl Led for MockLed {
    fn turn_on(&mut self) {
        self.level = u8::MAX;
        self.log.borrow_mut().push(Event::On(self.position));
    }

    fn turn_off(&mut self) {
        self.level = 0;
        self.log.borrow_mut().push(Event::Off(self.position));
    }

    fn set_intensity(&mut self, level: u8) {
        self.level = level;
        self.log
            .borrow_mut()
            .push(Event::Intensity(self.position, level));
    }
}

// ============================================================================
// Mock Clock and Delay
// ============================================================================

/// Mock time source; only advances when the mock delay sleeps
pub struct MockTimeSource {
    current_time: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.current_time.set(self.current_time.get() + millis);
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time.get()
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.get())
    }
}

/// Delay that advances the mock clock and records the sleep
pub struct MockDelay<'t> {
    timer: &'t MockTimeSource,
    log: EventLog,
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.timer.advance(u64::from(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timer.advance(u64::from(ms));
        self.log.borrow_mut().push(Event::Sleep(ms));
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// RNG replaying a fixed list of values, cycling when exhausted
pub struct ScriptedRng {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ============================================================================
// Animator Fixture
// ============================================================================

pub type TestAnimator<'t, R> =
    LedAnimator<'t, TestInstant, MockLed, MockTimeSource, MockDelay<'t>, R>;

/// Builds an animator over mock LEDs. Construction-time commands are
/// cleared from the returned log.
pub fn animator_with_rng<R: RngCore>(
    timer: &MockTimeSource,
    rng: R,
) -> (TestAnimator<'_, R>, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let leds = LedArray::from_array(LedPosition::ALL.map(|position| MockLed {
        position,
        level: 0,
        log: Rc::clone(&log),
    }));
    let delay = MockDelay {
        timer,
        log: Rc::clone(&log),
    };
    let animator = LedAnimator::new(leds, timer, delay, rng);
    log.borrow_mut().clear();
    (animator, log)
}

/// Animator whose random source always yields zero
pub fn animator(timer: &MockTimeSource) -> (TestAnimator<'_, ScriptedRng>, EventLog) {
    animator_with_rng(timer, ScriptedRng::new(&[0]))
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Positions turned on, in order
pub fn lit_order(log: &EventLog) -> Vec<LedPosition> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::On(position) => Some(*position),
            _ => None,
        })
        .collect()
}

/// Sleep durations, in order
pub fn sleeps(log: &EventLog) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Sleep(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}

/// Intensities written to `position`, in order
pub fn intensities(log: &EventLog, position: LedPosition) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Intensity(p, level) if *p == position => Some(*level),
            _ => None,
        })
        .collect()
}

/// The set of lit LEDs during each sleep, replayed from the log
pub fn frames(log: &EventLog) -> Vec<[bool; 4]> {
    let mut lit = [false; 4];
    let mut frames = Vec::new();
    for event in log.borrow().iter() {
        match *event {
            Event::On(position) => lit[position.index()] = true,
            Event::Off(position) => lit[position.index()] = false,
            Event::Intensity(position, level) => lit[position.index()] = level > 0,
            Event::Sleep(_) => frames.push(lit),
        }
    }
    frames
}

/// Frames with at least one LED lit
pub fn lit_frames(log: &EventLog) -> Vec<[bool; 4]> {
    frames(log)
        .into_iter()
        .filter(|frame| frame.iter().any(|&lit| lit))
        .collect()
}

/// Asserts every LED of the animator is dark
pub fn assert_all_off<R: RngCore>(animator: &TestAnimator<'_, R>) {
    for position in LedPosition::ALL {
        assert!(
            !animator.leds().led(position).is_lit(),
            "{:?} still lit",
            position
        );
    }
}
