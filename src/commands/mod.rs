//! Command implementations

pub mod derive;
pub mod inspect;
pub mod sample;

pub use derive::{DeriveConfig, DeriveResult, derive_from_index, derive_relations, run_derive};
pub use inspect::{FamilySummary, InspectReport, inspect_source, write_report};
pub use sample::{SampleResult, sample_relations};
