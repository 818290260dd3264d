//! Shared Types: plain data passed between the simulation, input, and render crates.
//!
//! # Invariants
//! - Types here carry no behavior beyond construction and accessors.
//! - Everything is serde-friendly so configs and telemetry can embed it.

pub mod types;

pub use types::{EnvironmentKind, Hsl, InputSample, Viewport};
