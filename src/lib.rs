//! Elbonian numeral conversion.
//!
//! Re-exports [`elb_core`] and provides [`init_tracing`] for binaries.

pub use elb_core::*;

mod trace_init;

pub use trace_init::init_tracing;
