//! Domain models

pub mod benchmark;

pub use benchmark::*;
