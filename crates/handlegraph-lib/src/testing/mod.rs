//! Test fixtures shared by unit tests and the end-to-end test crate

pub mod fixtures;

pub use fixtures::{SAMPLE_REGISTRY, write_sample_registry};
