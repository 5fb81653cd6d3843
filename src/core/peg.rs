//! Peg colours
//!
//! A peg is either one of the six guessable colours, one of the two
//! feedback-only markers (black = exact match, white = colour-only match),
//! or the `None` placeholder shown in empty board cells. Guessable codes
//! never contain the markers or the placeholder.

use std::fmt;

/// A single peg colour with a stable integer tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Peg {
    /// Empty board cell placeholder
    None = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    Cyan = 5,
    Purple = 6,
    /// Feedback marker: correct colour, correct position
    Black = 7,
    /// Feedback marker: correct colour, wrong position
    White = 8,
}

/// The six colours a code may be built from, in tag order
pub const GUESSABLE: [Peg; 6] = [
    Peg::Red,
    Peg::Green,
    Peg::Blue,
    Peg::Yellow,
    Peg::Cyan,
    Peg::Purple,
];

impl Peg {
    /// Get the stable integer tag (0 = none, 1-6 = colours, 7-8 = markers)
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Check whether this peg may appear in a guess or secret code
    #[inline]
    #[must_use]
    pub const fn is_guessable(self) -> bool {
        matches!(
            self,
            Self::Red | Self::Green | Self::Blue | Self::Yellow | Self::Cyan | Self::Purple
        )
    }

    /// Single-letter form used for CLI input and compact output
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::None => '*',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Cyan => 'C',
            Self::Purple => 'P',
            Self::Black => 'b',
            Self::White => 'w',
        }
    }

    /// Parse a guessable colour from its letter, case-insensitive
    ///
    /// Only the six guessable colours parse; the markers and the placeholder
    /// have no input form.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'g' => Some(Self::Green),
            'b' => Some(Self::Blue),
            'y' => Some(Self::Yellow),
            'c' => Some(Self::Cyan),
            'p' => Some(Self::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for Peg {
    /// Board-cell form: `[R]` for code pegs, `(B)`/`(W)` for feedback pegs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "(B)"),
            Self::White => write!(f, "(W)"),
            other => write!(f, "[{}]", other.letter()),
        }
    }
}
