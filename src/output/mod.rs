//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{loading_spinner, print_derive_result, print_inspect_report, print_sample};
