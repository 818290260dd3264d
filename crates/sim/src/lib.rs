//! Drive Simulation Core
//!
//! Owns the per-tick update for the causeway driving scene: steering,
//! press-gated forward motion, slope height, tile recycling, water tint,
//! and the chase camera. Hosts feed exactly one [`InputSample`] per tick
//! and read state back through accessors or a [`DriveSummary`].
//!
//! # Invariants
//!
//! - One input sample is consumed per `step`; the latest sample before the
//!   step wins, earlier ones within the same tick are overwritten.
//! - Stage order inside a step is fixed: steering, lane clamp, forward
//!   motion, slope height, recycling, water tint, camera follow.
//! - The car's x never leaves `[-lane_half_width, lane_half_width]` after
//!   a step.
//! - Car y is always a pure function of car z through the slope profile.
//! - Tiles are created once at construction and only ever teleported;
//!   given equal configs and input sequences, two worlds report equal
//!   `state_hash` values forever.
//!
//! [`InputSample`]: causeway_common::InputSample

pub mod camera;
pub mod config;
pub mod telemetry;
pub mod water;
pub mod world;

pub use camera::ChaseCamera;
pub use config::{
    CameraConfig, ConfigError, DriveConfig, DriveGate, HueCycle, RecyclePolicy, Variant,
};
pub use telemetry::DriveSummary;
pub use water::WaterSurface;
pub use world::{DriveEvent, DriveWorld, RingKind};

/// Returns the crate name and version for diagnostics.
pub fn crate_info() -> &'static str {
    "causeway-sim v0.1.0"
}
