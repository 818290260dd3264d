use serde::{Deserialize, Serialize};

/// Piecewise-linear height profile of the track's ramp-bridge-ramp feature.
///
/// Travel is in the negative-z direction, so the feature boundaries are
/// negative and ordered `ascent_start > peak_start > descent_end`. Height is
/// a pure function of z; nothing about the feature is stored per tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeProfile {
    /// Road height everywhere outside the feature.
    pub baseline: f32,
    /// z at which the ascent begins.
    pub ascent_start: f32,
    /// z at which the ascent tops out and the descent begins.
    pub peak_start: f32,
    /// z at which the descent returns to the baseline.
    pub descent_end: f32,
    /// Height gained per unit of forward travel on a ramp.
    pub grade: f32,
}

impl Default for SlopeProfile {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            ascent_start: -100.0,
            peak_start: -130.0,
            descent_end: -160.0,
            grade: 0.03,
        }
    }
}

impl SlopeProfile {
    /// Height of the road surface at the given z.
    ///
    /// Total for all inputs; z outside the feature range yields the baseline.
    pub fn height_at(&self, z: f32) -> f32 {
        let traveled = -z;
        let ascent = -self.ascent_start;
        let peak = -self.peak_start;
        let end = -self.descent_end;

        if traveled > ascent && traveled <= peak {
            self.baseline + (traveled - ascent) * self.grade
        } else if traveled > peak && traveled < end {
            self.peak_height() - (traveled - peak) * self.grade
        } else {
            self.baseline
        }
    }

    /// Height at the top of the ascent.
    pub fn peak_height(&self) -> f32 {
        self.baseline + (self.ascent_start - self.peak_start) * self.grade
    }

    /// True when the boundaries are ordered for negative-z travel and the
    /// grade is non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.ascent_start > self.peak_start
            && self.peak_start > self.descent_end
            && self.grade >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn baseline_outside_feature() {
        let slope = SlopeProfile::default();
        assert_close(slope.height_at(0.0), 0.5);
        assert_close(slope.height_at(-50.0), 0.5);
        assert_close(slope.height_at(-99.9), 0.5);
        assert_close(slope.height_at(-161.0), 0.5);
        assert_close(slope.height_at(-1000.0), 0.5);
    }

    #[test]
    fn continuous_at_boundaries() {
        let slope = SlopeProfile::default();
        assert_close(slope.height_at(-100.0), 0.5);
        assert_close(slope.height_at(-130.0), 1.4);
        assert_close(slope.height_at(-160.0), 0.5);
    }

    #[test]
    fn mid_ascent_height() {
        let slope = SlopeProfile::default();
        // 15 units past the ascent start at 0.03 per unit
        assert_close(slope.height_at(-115.0), 0.95);
    }

    #[test]
    fn mid_descent_mirrors_ascent() {
        let slope = SlopeProfile::default();
        assert_close(slope.height_at(-145.0), 0.95);
    }

    #[test]
    fn peak_height_from_grade() {
        let slope = SlopeProfile::default();
        assert_close(slope.peak_height(), 1.4);
    }

    #[test]
    fn custom_profile() {
        let slope = SlopeProfile {
            baseline: 1.0,
            ascent_start: -10.0,
            peak_start: -20.0,
            descent_end: -30.0,
            grade: 0.1,
        };
        assert!(slope.is_well_formed());
        assert_close(slope.peak_height(), 2.0);
        assert_close(slope.height_at(-15.0), 1.5);
        assert_close(slope.height_at(-25.0), 1.5);
    }

    #[test]
    fn ill_ordered_profile_is_flagged() {
        let slope = SlopeProfile {
            ascent_start: -130.0,
            peak_start: -100.0,
            ..SlopeProfile::default()
        };
        assert!(!slope.is_well_formed());
    }

    #[test]
    fn forward_of_start_is_baseline() {
        let slope = SlopeProfile::default();
        assert_close(slope.height_at(25.0), 0.5);
    }
}
