use causeway_common::Hsl;

use crate::config::HueCycle;

/// Animated tint of the water surface.
///
/// Only the hue moves; saturation and lightness are fixed. The hue climbs
/// by the cycle step each tick and snaps back to the start once it passes
/// the maximum, so observed values always lie in `[start, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSurface {
    hue: f32,
    cycle: HueCycle,
    saturation: f32,
    lightness: f32,
}

impl WaterSurface {
    pub fn new(cycle: HueCycle) -> Self {
        Self {
            hue: cycle.start,
            cycle,
            saturation: 0.6,
            lightness: 0.5,
        }
    }

    /// Advance the hue one tick.
    pub fn advance(&mut self) {
        self.hue += self.cycle.step;
        if self.hue > self.cycle.max {
            self.hue = self.cycle.start;
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn color(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }
}
