use serde::{Deserialize, Serialize};

/// Kind of environment tiles flanking the road.
///
/// Consumers match on the variant; there is exactly one generator for all
/// kinds, so adding a kind is a one-enum, one-match change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentKind {
    /// Flat grass shoulders.
    Grass,
    /// Water strips beside the road.
    Water,
    /// Dense tree cover.
    Jungle,
    /// Rows of houses.
    Houses,
}

impl EnvironmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            EnvironmentKind::Grass => "grass",
            EnvironmentKind::Water => "water",
            EnvironmentKind::Jungle => "jungle",
            EnvironmentKind::Houses => "houses",
        }
    }

    /// All kinds, in declaration order.
    pub fn all() -> [EnvironmentKind; 4] {
        [
            EnvironmentKind::Grass,
            EnvironmentKind::Water,
            EnvironmentKind::Jungle,
            EnvironmentKind::Houses,
        ]
    }
}

impl std::fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// HSL color triple. Hue, saturation, and lightness are all in [0, 1].
///
/// Kept as plain scalars; converting to display color spaces is the
/// renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// Output surface dimensions in pixels. Only the aspect ratio feeds back
/// into the simulation (camera projection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "viewport dimensions must be positive");
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Input observed by one simulation step.
///
/// Filled from the pointer state exactly once at the top of each step;
/// the step never reads input through any other path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// True while a pointer contact is active.
    pub pressing: bool,
    /// Steering target for the car's x position.
    pub target_x: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_labels_are_distinct() {
        let labels: Vec<&str> = EnvironmentKind::all().iter().map(|k| k.label()).collect();
        let mut dedup = labels.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(labels.len(), dedup.len());
    }

    #[test]
    fn viewport_default_is_wide() {
        let v = Viewport::default();
        assert!((v.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "viewport dimensions must be positive")]
    fn viewport_rejects_zero_height() {
        let _ = Viewport::new(800, 0);
    }

    #[test]
    fn input_sample_default_is_idle() {
        let s = InputSample::default();
        assert!(!s.pressing);
        assert_eq!(s.target_x, 0.0);
    }
}
