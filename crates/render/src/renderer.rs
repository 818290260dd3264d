use causeway_common::Viewport;
use causeway_sim::DriveWorld;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads drive state and an output surface description, then
/// produces output. It never mutates the world; drive truth is sim-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given drive state.
    fn render(&self, world: &DriveWorld, viewport: &Viewport) -> Self::Output;
}

/// Text frame renderer, a workaround for a GPU scene backend.
///
/// Produces a human-readable frame: state header, a lane strip showing the
/// car's steering position between the road edges, and the nearest tile of
/// each ring. Useful for CLI output, logging, and testing the interface.
#[derive(Debug, Default)]
pub struct TextFrameRenderer;

/// Columns between the road edge markers in the lane strip.
const LANE_COLS: usize = 31;

impl TextFrameRenderer {
    pub fn new() -> Self {
        Self
    }

    fn lane_strip(world: &DriveWorld) -> String {
        let config = world.config();
        let half_road = config.track.road_width / 2.0;
        let column = |x: f32| {
            let fraction = (x + half_road) / config.track.road_width;
            ((fraction * (LANE_COLS - 1) as f32).round() as usize).min(LANE_COLS - 1)
        };

        let mut cells = vec!['.'; LANE_COLS];
        cells[column(-config.lane_half_width)] = ':';
        cells[column(config.lane_half_width)] = ':';
        cells[column(world.car().x)] = 'C';

        let mut strip = String::with_capacity(LANE_COLS + 2);
        strip.push('|');
        strip.extend(cells);
        strip.push('|');
        strip
    }
}

impl Renderer for TextFrameRenderer {
    type Output = String;

    fn render(&self, world: &DriveWorld, viewport: &Viewport) -> String {
        let car = world.car();
        let cam = world.camera().position;

        let mut out = String::new();
        out.push_str(&format!(
            "=== Drive Frame (tick={}, laps={}, recycled={}) ===\n",
            world.tick(),
            world.laps(),
            world.tiles_recycled()
        ));
        out.push_str(&format!(
            "viewport: {}x{} (aspect {:.2})\n",
            viewport.width,
            viewport.height,
            viewport.aspect()
        ));
        out.push_str(&format!(
            "car: ({:.2}, {:.2}, {:.2})  camera: ({:.2}, {:.2}, {:.2})\n",
            car.x, car.y, car.z, cam.x, cam.y, cam.z
        ));
        match world.water() {
            Some(water) => {
                let color = water.color();
                out.push_str(&format!(
                    "water: hue={:.4} (s={:.2}, l={:.2})\n",
                    color.h, color.s, color.l
                ));
            }
            None => out.push_str("water: -\n"),
        }
        out.push_str(&format!("lane: {}\n", Self::lane_strip(world)));

        let road = &world.layout().road;
        out.push_str(&format!(
            "road: nearest tile z={:.1} ({} tiles)\n",
            road.nearest_tile_z(car.z),
            road.len()
        ));
        for band in &world.layout().bands {
            out.push_str(&format!(
                "{} band: nearest tile z={:.1} ({} tiles)\n",
                band.kind,
                band.ring.nearest_tile_z(car.z),
                band.tile_positions().len()
            ));
        }

        tracing::trace!(tick = world.tick(), "text frame rendered");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_common::InputSample;
    use causeway_sim::Variant;

    fn held(target_x: f32) -> InputSample {
        InputSample {
            pressing: true,
            target_x,
        }
    }

    #[test]
    fn frame_header_reflects_the_world() {
        let world = DriveWorld::default();
        let renderer = TextFrameRenderer::new();
        let output = renderer.render(&world, &Viewport::default());

        assert!(output.contains("tick=0"));
        assert!(output.contains("car: (0.00, 0.50, 0.00)"));
        assert!(output.contains("water: hue=0.5500"));
        assert!(output.contains("road: nearest tile z=0.0 (3 tiles)"));
    }

    #[test]
    fn lane_strip_centers_an_unsteered_car() {
        let world = DriveWorld::default();
        let output = TextFrameRenderer::new().render(&world, &Viewport::default());
        let lane = output
            .lines()
            .find(|line| line.starts_with("lane: "))
            .unwrap();
        let car_at = lane.find('C').unwrap();
        assert_eq!(car_at - "lane: |".len(), LANE_COLS / 2);
    }

    #[test]
    fn lane_strip_tracks_steering() {
        let mut world = DriveWorld::default();
        for _ in 0..200 {
            world.step(held(100.0));
        }
        let output = TextFrameRenderer::new().render(&world, &Viewport::default());
        let lane = output
            .lines()
            .find(|line| line.starts_with("lane: "))
            .unwrap();
        let strip = &lane["lane: ".len()..];
        let car_at = strip.find('C').unwrap();
        assert!(car_at > 1 + LANE_COLS / 2);
        // Car pinned at the lane bound overwrites the right bound marker
        assert_eq!(strip.matches(':').count(), 1);
    }

    #[test]
    fn band_lines_name_each_environ() {
        let world = DriveWorld::new(Variant::Grassland.config());
        let output = TextFrameRenderer::new().render(&world, &Viewport::default());
        assert!(output.contains("grass band: nearest tile z=0.0 (6 tiles)"));
    }

    #[test]
    fn variants_without_water_render_a_dash() {
        let world = DriveWorld::new(Variant::Jungle.config());
        let output = TextFrameRenderer::new().render(&world, &Viewport::default());
        assert!(output.contains("water: -"));
    }

    #[test]
    fn viewport_is_echoed() {
        let world = DriveWorld::default();
        let output = TextFrameRenderer::new().render(&world, &Viewport::new(800, 600));
        assert!(output.contains("viewport: 800x600 (aspect 1.33)"));
    }

    #[test]
    fn rendering_never_mutates_the_world() {
        let mut world = DriveWorld::default();
        for _ in 0..25 {
            world.step(held(1.0));
        }
        let before = world.state_hash();
        let _ = TextFrameRenderer::new().render(&world, &Viewport::default());
        assert_eq!(world.state_hash(), before);
    }
}
