use serde::Serialize;

use crate::world::DriveWorld;

/// Point-in-time snapshot of the observable drive state.
///
/// Captured for operator output; serializes to JSON and prints as a
/// fixed-order key/value block.
#[derive(Debug, Clone, Serialize)]
pub struct DriveSummary {
    pub tick: u64,
    pub laps: u64,
    pub tiles_recycled: u64,
    pub car: [f32; 3],
    pub camera: [f32; 3],
    pub water_hue: Option<f32>,
    pub state_hash: String,
}

impl DriveSummary {
    pub fn capture(world: &DriveWorld) -> Self {
        Self {
            tick: world.tick(),
            laps: world.laps(),
            tiles_recycled: world.tiles_recycled(),
            car: world.car().to_array(),
            camera: world.camera().position.to_array(),
            water_hue: world.water().map(|w| w.hue()),
            state_hash: format!("{:016x}", world.state_hash()),
        }
    }
}

impl std::fmt::Display for DriveSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "tick           : {}", self.tick)?;
        writeln!(f, "laps           : {}", self.laps)?;
        writeln!(f, "tiles recycled : {}", self.tiles_recycled)?;
        writeln!(
            f,
            "car            : ({:.3}, {:.3}, {:.3})",
            self.car[0], self.car[1], self.car[2]
        )?;
        writeln!(
            f,
            "camera         : ({:.3}, {:.3}, {:.3})",
            self.camera[0], self.camera[1], self.camera[2]
        )?;
        match self.water_hue {
            Some(hue) => writeln!(f, "water hue      : {hue:.4}")?,
            None => writeln!(f, "water hue      : -")?,
        }
        write!(f, "state hash     : {}", self.state_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use causeway_common::InputSample;

    #[test]
    fn capture_reflects_the_world() {
        let mut world = DriveWorld::default();
        for _ in 0..10 {
            world.step(InputSample {
                pressing: true,
                target_x: 1.0,
            });
        }
        let summary = DriveSummary::capture(&world);
        assert_eq!(summary.tick, 10);
        assert_eq!(summary.car, world.car().to_array());
        assert_eq!(summary.state_hash, format!("{:016x}", world.state_hash()));
        assert!(summary.water_hue.is_some());
    }

    #[test]
    fn serializes_to_json() {
        let summary = DriveSummary::capture(&DriveWorld::default());
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"tick\":0"));
        assert!(json.contains("\"state_hash\""));
    }

    #[test]
    fn display_is_line_per_field() {
        let summary = DriveSummary::capture(&DriveWorld::default());
        let text = summary.to_string();
        assert!(text.contains("tick           : 0"));
        assert!(text.contains("car            : (0.000, 0.500, 0.000)"));
        assert!(text.contains("water hue      : 0.5500"));
    }

    #[test]
    fn dash_for_variants_without_water() {
        let summary = DriveSummary::capture(&DriveWorld::new(Variant::Jungle.config()));
        assert!(summary.water_hue.is_none());
        assert!(summary.to_string().contains("water hue      : -"));
    }
}
