use std::fmt;

use serde::Serialize;

/// A telephone keypad key that carries letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
#[repr(u8)]
pub enum Digit {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

use Digit::*;

// a..=z
const LETTER_TABLE: [Digit; 26] = [
    Two, Two, Two, // abc
    Three, Three, Three, // def
    Four, Four, Four, // ghi
    Five, Five, Five, // jkl
    Six, Six, Six, // mno
    Seven, Seven, Seven, Seven, // pqrs
    Eight, Eight, Eight, // tuv
    Nine, Nine, Nine, Nine, // wxyz
];

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Digit; 8] = [Two, Three, Four, Five, Six, Seven, Eight, Nine];

    /// Slot of this digit in a node's child array, 0 for `Two` through 7 for `Nine`.
    pub fn index(self) -> usize {
        self as usize - 2
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps an ASCII letter to its key. Uppercase folds to lowercase; anything
    /// else has no key.
    pub fn from_letter(c: char) -> Option<Digit> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let offset = c.to_ascii_lowercase() as usize - 'a' as usize;
        Some(LETTER_TABLE[offset])
    }

    /// Maps a pressed key ('2'..='9') to its digit.
    pub fn from_key(c: char) -> Option<Digit> {
        c.to_digit(10)
            .and_then(|d| Digit::try_from(d as u8).ok())
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=9 => Ok(Digit::ALL[value as usize - 2]),
            other => Err(other),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Digit encoding of a word, one digit per character. Returns the first
/// character that has no key if there is one.
pub fn encode(word: &str) -> Result<Vec<Digit>, char> {
    word.chars()
        .map(|c| Digit::from_letter(c).ok_or(c))
        .collect()
}
