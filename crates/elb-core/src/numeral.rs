//! Well-formedness rules for Elbonian numerals.
//!
//! A numeral is checked in three passes and the first failing pass wins:
//! characters, per-symbol multiplicity (with the mutual-exclusion rules),
//! then ordering.

use crate::symbol::Symbol;

/// When both symbols of the pair are present, the third may not appear.
const EXCLUSIONS: [(Symbol, Symbol, Symbol); 3] = [
    (Symbol::D, Symbol::E, Symbol::C),
    (Symbol::Y, Symbol::Z, Symbol::X),
    (Symbol::J, Symbol::K, Symbol::I),
];

/// Why a string is not a well-formed numeral.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("numeral is empty")]
    Empty,
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("{symbol} appears {count} times, at most {limit} allowed")]
    TooMany { symbol: Symbol, count: u8, limit: u8 },
    #[error("{forbidden} cannot appear if {first} and {second} are in the number")]
    Excluded {
        first: Symbol,
        second: Symbol,
        forbidden: Symbol,
    },
    #[error("{symbol} at position {position} cannot follow {after}")]
    OutOfOrder {
        symbol: Symbol,
        after: Symbol,
        position: usize,
    },
}

/// Occurrence count per symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolCounts([u8; Symbol::COUNT]);

impl SymbolCounts {
    pub fn of(symbols: &[Symbol]) -> Self {
        let mut counts = [0u8; Symbol::COUNT];
        for s in symbols {
            counts[s.index()] = counts[s.index()].saturating_add(1);
        }
        Self(counts)
    }

    pub fn get(&self, symbol: Symbol) -> u8 {
        self.0[symbol.index()]
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.get(symbol) > 0
    }
}

/// Map every character of `s` to a symbol.
pub fn parse_symbols(s: &str) -> Result<Vec<Symbol>, Malformed> {
    if s.is_empty() {
        return Err(Malformed::Empty);
    }
    s.chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::from_char(ch).ok_or(Malformed::InvalidCharacter { ch, position })
        })
        .collect()
}

/// Enforce the per-symbol limits, then the mutual-exclusion rules.
pub fn check_multiplicity(symbols: &[Symbol]) -> Result<SymbolCounts, Malformed> {
    let counts = SymbolCounts::of(symbols);

    for symbol in Symbol::ALL {
        let count = counts.get(symbol);
        let limit = symbol.max_repeat();
        if count > limit {
            return Err(Malformed::TooMany {
                symbol,
                count,
                limit,
            });
        }
    }

    for (first, second, forbidden) in EXCLUSIONS {
        if counts.contains(first) && counts.contains(second) && counts.contains(forbidden) {
            return Err(Malformed::Excluded {
                first,
                second,
                forbidden,
            });
        }
    }

    Ok(counts)
}

/// Symbols must never increase in value from left to right.
pub fn check_order(symbols: &[Symbol]) -> Result<(), Malformed> {
    match symbols.windows(2).position(|pair| pair[1] < pair[0]) {
        Some(i) => Err(Malformed::OutOfOrder {
            symbol: symbols[i + 1],
            after: symbols[i],
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Run all three checks and return the parsed symbols.
pub fn validate(s: &str) -> Result<Vec<Symbol>, Malformed> {
    let symbols = parse_symbols(s)?;
    check_multiplicity(&symbols)?;
    check_order(&symbols)?;
    Ok(symbols)
}

pub fn is_well_formed(s: &str) -> bool {
    validate(s).is_ok()
}
