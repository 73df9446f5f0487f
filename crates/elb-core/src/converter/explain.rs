use std::fmt;

use serde::Serialize;

use crate::symbol::Symbol;

use super::{Converter, Form};

/// Per-symbol value breakdown of a converter's numeral form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub input: String,
    pub form: Form,
    pub numeral: String,
    pub terms: Vec<Term>,
    pub total: u16,
}

/// One symbol of the numeral and the value it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    pub symbol: Symbol,
    pub value: u16,
}

pub fn explain(converter: &Converter) -> Explanation {
    let numeral = converter.to_numeral();
    let terms: Vec<Term> = numeral
        .chars()
        .filter_map(Symbol::from_char)
        .map(|symbol| Term {
            symbol,
            value: symbol.value(),
        })
        .collect();
    Explanation {
        input: converter.input().to_string(),
        form: converter.form(),
        numeral,
        terms,
        total: converter.to_arabic(),
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}({})", term.symbol, term.value)?;
        }
        write!(f, " = {}", self.total)
    }
}
