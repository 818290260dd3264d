//! Track Geometry: slope profile, recyclable segment rings, environment bands.
//!
//! # Invariants
//! - Tiles are created once; recycling repositions, never reallocates.
//! - Slope height is a pure function of z, independent of ring state.

mod layout;
mod ring;
mod slope;

pub use layout::{BandParams, EnvironBand, TrackConfig, TrackLayout};
pub use ring::SegmentRing;
pub use slope::SlopeProfile;

pub fn crate_info() -> &'static str {
    "causeway-track v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("track"));
    }
}
