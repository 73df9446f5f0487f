//! Arithmetic between symbol sequences and integers.

use crate::symbol::Symbol;

/// Smallest value representable as a numeral.
pub const MIN_VALUE: u16 = 1;
/// Largest value representable as a numeral.
pub const MAX_VALUE: u16 = 2999;

/// Sum of the symbol values. Ordering has no effect on the result.
pub fn numeral_value(symbols: &[Symbol]) -> u16 {
    symbols.iter().map(|s| s.value()).sum()
}

/// Greedy largest-first decomposition of `n` into symbols.
///
/// For `n` in [`MIN_VALUE`, `MAX_VALUE`] the result is a well-formed numeral.
pub fn decompose(n: u16) -> Vec<Symbol> {
    let mut rest = n;
    let mut out = Vec::new();
    for symbol in Symbol::ALL {
        while rest >= symbol.value() {
            out.push(symbol);
            rest -= symbol.value();
        }
    }
    out
}

pub fn to_numeral_string(n: u16) -> String {
    decompose(n).into_iter().map(Symbol::as_char).collect()
}
