use causeway_common::{EnvironmentKind, InputSample, Viewport};
use causeway_track::TrackLayout;
use glam::Vec3;

use crate::camera::ChaseCamera;
use crate::config::{DriveConfig, DriveGate, RecyclePolicy};
use crate::water::WaterSurface;

/// An event record for step occurrences worth observing.
///
/// The log is drained by the host loop; steps that move nothing notable
/// append nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveEvent {
    /// A tile the car had passed was teleported one ring period backward.
    SegmentRecycled { ring: RingKind, tile: usize, z: f32 },
    /// The car crossed the end of a finite track and returned to z = 0.
    TrackLooped { lap: u64 },
}

/// Which ring a recycle event refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingKind {
    Road,
    Environ(EnvironmentKind),
}

/// The authoritative drive state.
///
/// Everything is created once at construction and mutated in place by
/// `step`; no entity is destroyed or reallocated afterward. Given the same
/// config and sequence of input samples, two worlds stay bit-identical,
/// which `state_hash` makes checkable.
#[derive(Debug, Clone)]
pub struct DriveWorld {
    config: DriveConfig,
    layout: TrackLayout,
    car: Vec3,
    camera: ChaseCamera,
    water: Option<WaterSurface>,
    tick: u64,
    laps: u64,
    tiles_recycled: u64,
    event_log: Vec<DriveEvent>,
}

impl DriveWorld {
    pub fn new(config: DriveConfig) -> Self {
        let layout = TrackLayout::generate(&config.track, &config.environs);
        let car = Vec3::new(0.0, layout.slope.height_at(0.0), 0.0);
        let mut camera = ChaseCamera::new(&config.camera);
        camera.follow(car);
        let water = config.hue_cycle.map(WaterSurface::new);
        Self {
            config,
            layout,
            car,
            camera,
            water,
            tick: 0,
            laps: 0,
            tiles_recycled: 0,
            event_log: Vec::new(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Stage order is observable and fixed: steering, lane clamp, forward
    /// motion, slope height, tile recycling, water tint, camera follow.
    pub fn step(&mut self, input: InputSample) {
        let _span = tracing::trace_span!("drive_step", tick = self.tick).entered();
        self.tick += 1;

        let lane = self.config.lane_half_width;
        self.car.x += (input.target_x - self.car.x) * self.config.steer_smoothing;
        self.car.x = self.car.x.clamp(-lane, lane);

        let driving = match self.config.gate {
            DriveGate::Always => true,
            DriveGate::HoldToDrive => input.pressing,
        };
        if driving {
            self.car.z -= self.config.speed;
        }
        if let RecyclePolicy::TrackReset { track_length } = self.config.recycle {
            if self.car.z < -track_length {
                self.car.z = 0.0;
                self.laps += 1;
                tracing::debug!(lap = self.laps, "track looped");
                self.event_log.push(DriveEvent::TrackLooped { lap: self.laps });
            }
        }

        self.car.y = self.layout.slope.height_at(self.car.z);

        if matches!(self.config.recycle, RecyclePolicy::SegmentRing) {
            let car_z = self.car.z;
            for tile in self.layout.road.recycle(car_z) {
                let z = self.layout.road.zs()[tile];
                self.tiles_recycled += 1;
                tracing::debug!(tile, z, "road tile recycled");
                self.event_log.push(DriveEvent::SegmentRecycled {
                    ring: RingKind::Road,
                    tile,
                    z,
                });
            }
            for band in &mut self.layout.bands {
                let kind = band.kind;
                for tile in band.ring.recycle(car_z) {
                    let z = band.ring.zs()[tile];
                    self.tiles_recycled += 1;
                    tracing::debug!(%kind, tile, z, "band tile recycled");
                    self.event_log.push(DriveEvent::SegmentRecycled {
                        ring: RingKind::Environ(kind),
                        tile,
                        z,
                    });
                }
            }
        }

        if let Some(water) = &mut self.water {
            water.advance();
        }

        self.camera.follow(self.car);
    }

    /// Reconfigure the camera for a resized output surface.
    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.camera.set_aspect(viewport);
    }

    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Car position: x is the steering offset, y the slope height, z the
    /// distance traveled (negative).
    pub fn car(&self) -> Vec3 {
        self.car
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub fn water(&self) -> Option<&WaterSurface> {
        self.water.as_ref()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Completed laps; stays 0 under the segment-ring policy.
    pub fn laps(&self) -> u64 {
        self.laps
    }

    /// Total tiles teleported since construction.
    pub fn tiles_recycled(&self) -> u64 {
        self.tiles_recycled
    }

    /// Read-only access to the pending event log.
    pub fn events(&self) -> &[DriveEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<DriveEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Deterministic hash of the observable state, for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        mix(&mut h, &self.laps.to_le_bytes());
        mix(&mut h, &self.tiles_recycled.to_le_bytes());
        mix(&mut h, &self.car.x.to_le_bytes());
        mix(&mut h, &self.car.y.to_le_bytes());
        mix(&mut h, &self.car.z.to_le_bytes());
        mix(&mut h, &self.camera.position.x.to_le_bytes());
        mix(&mut h, &self.camera.position.y.to_le_bytes());
        mix(&mut h, &self.camera.position.z.to_le_bytes());
        if let Some(water) = &self.water {
            mix(&mut h, &water.hue().to_le_bytes());
        }
        for &z in self.layout.road.zs() {
            mix(&mut h, &z.to_le_bytes());
        }
        for band in &self.layout.bands {
            for &z in band.ring.zs() {
                mix(&mut h, &z.to_le_bytes());
            }
        }
        h
    }
}

impl Default for DriveWorld {
    fn default() -> Self {
        Self::new(DriveConfig::default())
    }
}
