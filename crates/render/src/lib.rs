//! Rendering Adapter: renderer-agnostic frame interface.
//!
//! # Invariants
//! - Renderers cannot mutate drive state; frames derive from world state
//!   and the viewport alone.
//! - The camera pose comes from the world; the viewport only describes the
//!   output surface.
//!
//! # Workaround
//! Provides a trait-based renderer interface with a text frame renderer as
//! a workaround for a GPU scene backend. The trait is stable; swap in a GPU
//! implementation without changing consumers.

mod renderer;

pub use renderer::{Renderer, TextFrameRenderer};

pub fn crate_info() -> &'static str {
    "causeway-render v0.1.0"
}
