//! Runs every animation on the host, printing the LED row after each change.
//!
//! ```text
//! cargo run --example host_show --features std
//! ```

use std::cell::Cell;
use std::rc::Rc;

use quad_led_fx::{
    Animation, DelayMode, Dimmable, Direction, Led, LedAnimator, LedArray, SystemClock,
    ThreadDelay, Trail,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

type Row = Rc<[Cell<u8>; 4]>;

/// Terminal stand-in for one board LED
struct ConsoleLed {
    slot: usize,
    row: Row,
}

impl ConsoleLed {
    fn render(&self) {
        let line: String = self
            .row
            .iter()
            .map(|level| match level.get() {
                0 => '.',
                1..=84 => '-',
                85..=169 => '+',
                _ => '#',
            })
            .collect();
        println!("[{}]", line);
    }
}

impl Led for ConsoleLed {
    fn turn_on(&mut self) {
        self.set_intensity(u8::MAX);
    }

    fn turn_off(&mut self) {
        self.set_intensity(0);
    }

    fn set_intensity(&mut self, level: u8) {
        if self.row[self.slot].replace(level) != level {
            self.render();
        }
    }
}

fn main() {
    let row: Row = Rc::new(Default::default());
    let leds = LedArray::from_array(core::array::from_fn(|slot| ConsoleLed {
        slot,
        row: Rc::clone(&row),
    }));

    let clock = SystemClock;
    let mut animator: LedAnimator<'_, std::time::Instant, _, _, _, _> =
        LedAnimator::new(leds, &clock, ThreadDelay, SmallRng::seed_from_u64(2017));

    let show = [
        Animation::RandomSingle {
            delay_ms: 150,
            duration_ms: 1_500,
            mode: DelayMode::Random,
        },
        Animation::RandomMultiple {
            delay_ms: 100,
            duration_ms: 1_500,
            mode: DelayMode::Fixed,
        },
        Animation::Explode {
            delay_ms: 450,
            duration_ms: 1_500,
        },
        Animation::Implode {
            speed_ms: 450,
            duration_ms: 1_500,
        },
        Animation::Scroll {
            speed_ms: 500,
            duration_ms: 1_500,
            trail: Trail::Hold,
            direction: Direction::LeftToRight,
        },
        Animation::Jump {
            speed_ms: 500,
            duration_ms: 1_500,
            trail: Trail::Clear,
            direction: Direction::RightToLeft,
        },
        Animation::Bounce {
            speed_ms: 800,
            duration_ms: 1_600,
            direction: Direction::LeftToRight,
        },
        Animation::ScrollFade {
            speed_ms: 600,
            duration_ms: 1_800,
            fade: 2,
            direction: Direction::LeftToRight,
        },
        Animation::ScrollKnight {
            speed_ms: 1_000,
            duration_ms: 2_000,
            fade: 1,
            direction: Direction::LeftToRight,
        },
        Animation::Glow {
            delay_ms: 1_000,
            duration_ms: 2_000,
            leds: Dimmable::BOTH,
        },
        Animation::Swing {
            delay_ms: 1_000,
            duration_ms: 2_000,
            direction: Direction::RightToLeft,
        },
        Animation::HeartBeat {
            delay_ms: 900,
            duration_ms: 2_700,
            leds: Dimmable::BLUE,
        },
    ];

    for animation in show {
        println!("{:?}", animation);
        animator.play(animation);
    }
}
