use causeway_common::EnvironmentKind;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ring::SegmentRing;
use crate::slope::SlopeProfile;

/// Road geometry and slope feature for one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Full width of the road surface.
    pub road_width: f32,
    /// Length of one road tile.
    pub tile_length: f32,
    /// Number of road tiles in the ring.
    pub tile_count: usize,
    pub slope: SlopeProfile,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            road_width: 5.0,
            tile_length: 120.0,
            tile_count: 3,
            slope: SlopeProfile::default(),
        }
    }
}

/// Per-kind tile geometry for an environment band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandParams {
    /// Distance from the road center to each side's tiles.
    pub lateral_offset: f32,
    /// Tile height above the baseline plane.
    pub elevation: f32,
    pub tile_length: f32,
    pub tile_count: usize,
}

impl BandParams {
    /// Geometry for each environment kind. Denser kinds use shorter tiles;
    /// every kind's ring period covers at least one full road ring.
    pub fn for_kind(kind: EnvironmentKind) -> Self {
        match kind {
            EnvironmentKind::Grass => Self {
                lateral_offset: 4.5,
                elevation: 0.0,
                tile_length: 120.0,
                tile_count: 3,
            },
            EnvironmentKind::Water => Self {
                lateral_offset: 9.0,
                elevation: -0.2,
                tile_length: 120.0,
                tile_count: 3,
            },
            EnvironmentKind::Jungle => Self {
                lateral_offset: 6.0,
                elevation: 0.0,
                tile_length: 60.0,
                tile_count: 6,
            },
            EnvironmentKind::Houses => Self {
                lateral_offset: 7.5,
                elevation: 0.0,
                tile_length: 40.0,
                tile_count: 12,
            },
        }
    }
}

/// A mirrored pair of environment tile rows flanking the road.
///
/// One ring of z positions drives both sides; the lateral offset mirrors
/// each tile to the left and right of the road.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironBand {
    pub kind: EnvironmentKind,
    pub ring: SegmentRing,
    pub lateral_offset: f32,
    pub elevation: f32,
}

impl EnvironBand {
    /// The single generator for all environment kinds.
    pub fn generate(kind: EnvironmentKind) -> Self {
        let params = BandParams::for_kind(kind);
        Self {
            kind,
            ring: SegmentRing::new(params.tile_length, params.tile_count),
            lateral_offset: params.lateral_offset,
            elevation: params.elevation,
        }
    }

    /// World positions of every tile, left and right sides interleaved.
    pub fn tile_positions(&self) -> Vec<Vec3> {
        self.ring
            .zs()
            .iter()
            .flat_map(|&z| {
                [
                    Vec3::new(-self.lateral_offset, self.elevation, z),
                    Vec3::new(self.lateral_offset, self.elevation, z),
                ]
            })
            .collect()
    }
}

/// Everything positional about the track: the road ring, the environment
/// bands beside it, and the slope feature.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    pub road: SegmentRing,
    pub bands: Vec<EnvironBand>,
    pub slope: SlopeProfile,
}

impl TrackLayout {
    pub fn generate(config: &TrackConfig, environs: &[EnvironmentKind]) -> Self {
        Self {
            road: SegmentRing::new(config.tile_length, config.tile_count),
            bands: environs.iter().map(|&kind| EnvironBand::generate(kind)).collect(),
            slope: config.slope,
        }
    }

    /// Number of ring slots across the road and all bands.
    pub fn total_tiles(&self) -> usize {
        self.road.len() + self.bands.iter().map(|b| b.ring.len()).sum::<usize>()
    }
}
