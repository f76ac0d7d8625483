//! Core types shared by the LED array and the animations.

/// Position of an LED on the board, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPosition {
    /// Leftmost LED.
    Red,
    /// Second LED from the left.
    Green,
    /// Third LED from the left, variable intensity.
    Orange,
    /// Rightmost LED, variable intensity.
    Blue,
}

impl LedPosition {
    /// All positions in left-to-right order.
    pub const ALL: [LedPosition; 4] = [
        LedPosition::Red,
        LedPosition::Green,
        LedPosition::Orange,
        LedPosition::Blue,
    ];

    /// Index of this position within the array (0 = leftmost).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            LedPosition::Red => 0,
            LedPosition::Green => 1,
            LedPosition::Orange => 2,
            LedPosition::Blue => 3,
        }
    }
}

/// Traversal direction for directional animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Red towards blue.
    #[default]
    LeftToRight,
    /// Blue towards red.
    RightToLeft,
}

impl Direction {
    /// LED order used by an animation running in this direction.
    pub const fn order(self) -> [LedPosition; 4] {
        let [a, b, c, d] = LedPosition::ALL;
        match self {
            Direction::LeftToRight => [a, b, c, d],
            Direction::RightToLeft => [d, c, b, a],
        }
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

/// Whether an LED stays lit after its step in scroll-like animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trail {
    /// Turn each LED off again once its step is over.
    #[default]
    Clear,
    /// Keep LEDs lit until the end of the cycle.
    Hold,
}

/// How the pause between random picks is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayMode {
    /// Always sleep for the configured delay.
    #[default]
    Fixed,
    /// Draw a fresh delay uniformly from `0..=delay` on every pick.
    Random,
}

/// Selection of the variable-intensity LEDs driven by glow and heartbeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimmable {
    /// Drive the blue LED.
    pub blue: bool,
    /// Drive the orange LED.
    pub orange: bool,
}

impl Dimmable {
    /// Blue LED only.
    pub const BLUE: Dimmable = Dimmable {
        blue: true,
        orange: false,
    };

    /// Orange LED only.
    pub const ORANGE: Dimmable = Dimmable {
        blue: false,
        orange: true,
    };

    /// Both variable-intensity LEDs.
    pub const BOTH: Dimmable = Dimmable {
        blue: true,
        orange: true,
    };

    /// Selected positions, orange first.
    pub fn positions(self) -> impl Iterator<Item = LedPosition> {
        [
            (self.orange, LedPosition::Orange),
            (self.blue, LedPosition::Blue),
        ]
        .into_iter()
        .filter_map(|(selected, position)| selected.then_some(position))
    }
}

impl Default for Dimmable {
    fn default() -> Self {
        Dimmable::BLUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_indexed_left_to_right() {
        for (expected, position) in LedPosition::ALL.iter().enumerate() {
            assert_eq!(position.index(), expected);
        }
    }

    #[test]
    fn right_to_left_reverses_order() {
        let mut forward = Direction::LeftToRight.order();
        forward.reverse();
        assert_eq!(forward, Direction::RightToLeft.order());
        assert_eq!(Direction::RightToLeft.reversed(), Direction::LeftToRight);
    }

    #[test]
    fn dimmable_selection_yields_chosen_positions() {
        let mut both = Dimmable::BOTH.positions();
        assert_eq!(both.next(), Some(LedPosition::Orange));
        assert_eq!(both.next(), Some(LedPosition::Blue));
        assert_eq!(both.next(), None);

        assert_eq!(Dimmable::default(), Dimmable::BLUE);
        assert_eq!(Dimmable::ORANGE.positions().count(), 1);
        let none = Dimmable {
            blue: false,
            orange: false,
        };
        assert_eq!(none.positions().count(), 0);
    }
}
