//! Conversion between Arabic integers and Elbonian numerals.
//!
//! Elbonian numerals are additive: each of the ten symbols has a fixed
//! value and a numeral's value is their sum. Well-formedness is a matter
//! of which symbols appear, how often, and in what order (see [`numeral`]).

pub mod convert;
pub mod converter;
pub mod error;
pub mod numeral;
pub mod symbol;

pub use convert::{MAX_VALUE, MIN_VALUE};
pub use converter::{explain, Converter, Explanation, Form, Term};
pub use error::ConvertError;
pub use numeral::Malformed;
pub use symbol::Symbol;
