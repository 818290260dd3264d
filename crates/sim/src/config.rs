use std::path::Path;

use causeway_common::EnvironmentKind;
use causeway_track::TrackConfig;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating a drive configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown variant: {0} (expected causeway, grassland, jungle, or suburbs)")]
    UnknownVariant(String),
}

/// When the car moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveGate {
    /// The car is always driving.
    Always,
    /// The car drives only while a pointer contact is held.
    HoldToDrive,
}

/// How endless travel is produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RecyclePolicy {
    /// Tiles the car has passed teleport backward by one ring period.
    SegmentRing,
    /// The track is finite; crossing its far end returns the car to z = 0.
    TrackReset { track_length: f32 },
}

/// Bounded hue animation for the water tint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueCycle {
    /// Hue the cycle starts from and snaps back to.
    pub start: f32,
    /// Hue above which the cycle snaps back.
    pub max: f32,
    /// Hue added per tick.
    pub step: f32,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self {
            start: 0.55,
            max: 0.75,
            step: 0.0002,
        }
    }
}

/// Chase camera placement and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Fixed camera height.
    pub height: f32,
    /// Rigid z offset behind the car.
    pub distance: f32,
    /// Fraction of the x gap closed per tick.
    pub smoothing: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 3.0,
            distance: 6.0,
            smoothing: 0.05,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Full parameterization of one drive session.
///
/// The four shipping variants are presets over this one structure; custom
/// configs come from YAML files. Missing fields fall back to the default
/// (causeway) values, and every loaded config passes through `validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Fraction of the steering gap closed per tick.
    pub steer_smoothing: f32,
    /// World-space width the normalized pointer coordinate maps onto.
    pub steer_range: f32,
    /// Car x is clamped to [-lane_half_width, lane_half_width].
    pub lane_half_width: f32,
    /// Forward distance per tick while driving.
    pub speed: f32,
    pub gate: DriveGate,
    pub recycle: RecyclePolicy,
    /// Water tint animation; absent in variants without water.
    pub hue_cycle: Option<HueCycle>,
    pub camera: CameraConfig,
    pub track: TrackConfig,
    /// Environment bands flanking the road, in draw order.
    pub environs: Vec<EnvironmentKind>,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Variant::Causeway.config()
    }
}

impl DriveConfig {
    /// Load a config from a YAML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML, e.g. as a starting point for a custom config.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every numeric range the step relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: &str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.to_string()))
        }

        if !(self.steer_smoothing > 0.0 && self.steer_smoothing <= 1.0) {
            return invalid("steer_smoothing must be in (0, 1]");
        }
        if self.steer_range <= 0.0 {
            return invalid("steer_range must be positive");
        }
        if self.lane_half_width <= 0.0 {
            return invalid("lane_half_width must be positive");
        }
        if self.lane_half_width * 2.0 > self.track.road_width {
            return invalid("lane range exceeds the road width");
        }
        if self.speed < 0.0 {
            return invalid("speed must be non-negative");
        }
        if !(self.camera.smoothing > 0.0 && self.camera.smoothing <= 1.0) {
            return invalid("camera smoothing must be in (0, 1]");
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return invalid("camera fov must be in (0, 180) degrees");
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return invalid("camera planes must satisfy 0 < near < far");
        }
        if self.track.road_width <= 0.0 {
            return invalid("road_width must be positive");
        }
        if self.track.tile_length <= 0.0 || self.track.tile_count == 0 {
            return invalid("road tiles must have positive length and count");
        }
        if !self.track.slope.is_well_formed() {
            return invalid("slope boundaries must be ordered for negative-z travel");
        }
        if let RecyclePolicy::TrackReset { track_length } = self.recycle {
            if track_length <= 0.0 {
                return invalid("track_length must be positive");
            }
        }
        if let Some(hue) = self.hue_cycle {
            if hue.start >= hue.max || hue.step < 0.0 {
                return invalid("hue cycle needs start < max and a non-negative step");
            }
        }
        Ok(())
    }
}

/// The four shipping flavors of the game, as presets over `DriveConfig`.
///
/// They differ along three axes: drive gating, recycling policy, and
/// whether the water tint animates. Everything else is tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Road over open water with a bridge climb. Hold to drive, ring
    /// recycling, animated water tint.
    Causeway,
    /// Open fields, always driving, ring recycling.
    Grassland,
    /// Tree-lined loop that resets after a full lap.
    Jungle,
    /// Residential loop, hold to drive, resets after a longer lap.
    Suburbs,
}

impl Variant {
    pub fn all() -> [Variant; 4] {
        [
            Variant::Causeway,
            Variant::Grassland,
            Variant::Jungle,
            Variant::Suburbs,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Causeway => "causeway",
            Variant::Grassland => "grassland",
            Variant::Jungle => "jungle",
            Variant::Suburbs => "suburbs",
        }
    }

    pub fn config(self) -> DriveConfig {
        match self {
            Variant::Causeway => DriveConfig {
                steer_smoothing: 0.12,
                steer_range: 4.0,
                lane_half_width: 2.0,
                speed: 0.22,
                gate: DriveGate::HoldToDrive,
                recycle: RecyclePolicy::SegmentRing,
                hue_cycle: Some(HueCycle::default()),
                camera: CameraConfig::default(),
                track: TrackConfig::default(),
                environs: vec![],
            },
            Variant::Grassland => DriveConfig {
                steer_smoothing: 0.10,
                speed: 0.18,
                gate: DriveGate::Always,
                hue_cycle: None,
                environs: vec![EnvironmentKind::Grass],
                ..Variant::Causeway.config()
            },
            Variant::Jungle => DriveConfig {
                steer_smoothing: 0.11,
                speed: 0.26,
                gate: DriveGate::Always,
                recycle: RecyclePolicy::TrackReset {
                    track_length: 360.0,
                },
                hue_cycle: None,
                environs: vec![EnvironmentKind::Jungle],
                ..Variant::Causeway.config()
            },
            Variant::Suburbs => DriveConfig {
                speed: 0.20,
                recycle: RecyclePolicy::TrackReset {
                    track_length: 480.0,
                },
                hue_cycle: None,
                // Static road long enough to cover the whole lap
                track: TrackConfig {
                    tile_count: 4,
                    ..TrackConfig::default()
                },
                environs: vec![EnvironmentKind::Houses],
                ..Variant::Causeway.config()
            },
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "causeway" => Ok(Variant::Causeway),
            "grassland" => Ok(Variant::Grassland),
            "jungle" => Ok(Variant::Jungle),
            "suburbs" => Ok(Variant::Suburbs),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}
