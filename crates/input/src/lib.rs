//! Pointer Input: host events accumulated into per-step samples.
//!
//! # Invariants
//! - Steps consume one sample each; last writer between steps wins.
//! - Moves without an active press never change the steering target.

mod pointer;

pub use pointer::{PointerEvent, PointerState, ScriptedEvent};

pub fn crate_info() -> &'static str {
    "causeway-input v0.1.0"
}
