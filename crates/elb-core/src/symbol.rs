//! The ten Elbonian numeral symbols and their fixed values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single Elbonian numeral symbol.
///
/// Variants are declared in descending value order, so the derived `Ord`
/// is the order symbols must follow inside a well-formed numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    M,
    E,
    D,
    C,
    Z,
    Y,
    X,
    K,
    J,
    I,
}

impl Symbol {
    pub const COUNT: usize = 10;

    /// All symbols, largest value first.
    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::M,
        Symbol::E,
        Symbol::D,
        Symbol::C,
        Symbol::Z,
        Symbol::Y,
        Symbol::X,
        Symbol::K,
        Symbol::J,
        Symbol::I,
    ];

    pub const fn value(self) -> u16 {
        match self {
            Symbol::M => 1000,
            Symbol::E => 600,
            Symbol::D => 300,
            Symbol::C => 100,
            Symbol::Z => 60,
            Symbol::Y => 30,
            Symbol::X => 10,
            Symbol::K => 6,
            Symbol::J => 3,
            Symbol::I => 1,
        }
    }

    /// Maximum number of occurrences of this symbol in one numeral.
    pub const fn max_repeat(self) -> u8 {
        match self {
            Symbol::M | Symbol::C | Symbol::X | Symbol::I => 2,
            _ => 1,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::M => 'M',
            Symbol::E => 'E',
            Symbol::D => 'D',
            Symbol::C => 'C',
            Symbol::Z => 'Z',
            Symbol::Y => 'Y',
            Symbol::X => 'X',
            Symbol::K => 'K',
            Symbol::J => 'J',
            Symbol::I => 'I',
        }
    }

    /// Map a character to its symbol. Only uppercase ASCII letters match.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_char() == c)
    }

    /// Position of the symbol in [`Symbol::ALL`], used to index count tables.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}
