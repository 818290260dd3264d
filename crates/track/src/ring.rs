/// A ring of terrain tiles laid end to end along negative z.
///
/// Tiles are never created or destroyed after construction. A tile the car
/// has passed by more than one tile length is teleported backward by the
/// ring period, which keeps every tile's z relative to the car inside the
/// window `[tile_length - period, tile_length]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRing {
    zs: Vec<f32>,
    tile_length: f32,
}

impl SegmentRing {
    /// Lay out `tile_count` tiles at `0, -tile_length, -2 * tile_length, ...`.
    pub fn new(tile_length: f32, tile_count: usize) -> Self {
        assert!(tile_length > 0.0, "tile_length must be positive");
        assert!(tile_count > 0, "tile_count must be positive");
        Self {
            zs: (0..tile_count).map(|i| -(i as f32) * tile_length).collect(),
            tile_length,
        }
    }

    /// Distance after which the tile arrangement repeats.
    pub fn period(&self) -> f32 {
        self.tile_length * self.zs.len() as f32
    }

    pub fn tile_length(&self) -> f32 {
        self.tile_length
    }

    pub fn len(&self) -> usize {
        self.zs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zs.is_empty()
    }

    /// Current tile z positions, indexed by tile.
    pub fn zs(&self) -> &[f32] {
        &self.zs
    }

    /// Teleport every tile the car has fully passed backward by one period.
    /// Returns the indices of the tiles that moved this call.
    pub fn recycle(&mut self, car_z: f32) -> Vec<usize> {
        let period = self.period();
        let tile_length = self.tile_length;
        let mut shifted = Vec::new();
        for (index, z) in self.zs.iter_mut().enumerate() {
            if *z - car_z > tile_length {
                *z -= period;
                shifted.push(index);
            }
        }
        shifted
    }

    /// z of the tile closest to the given position.
    pub fn nearest_tile_z(&self, car_z: f32) -> f32 {
        let mut best = self.zs[0];
        for &z in &self.zs[1..] {
            if (z - car_z).abs() < (best - car_z).abs() {
                best = z;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_is_contiguous() {
        let ring = SegmentRing::new(120.0, 3);
        assert_eq!(ring.zs(), &[0.0, -120.0, -240.0]);
        assert_eq!(ring.period(), 360.0);
    }

    #[test]
    fn no_recycle_while_tiles_are_ahead() {
        let mut ring = SegmentRing::new(120.0, 3);
        let shifted = ring.recycle(-50.0);
        assert!(shifted.is_empty());
        assert_eq!(ring.zs(), &[0.0, -120.0, -240.0]);
    }

    #[test]
    fn passed_tile_shifts_by_exactly_one_period() {
        let mut ring = SegmentRing::new(120.0, 3);
        // Car just beyond the first tile's trailing edge
        let shifted = ring.recycle(-120.5);
        assert_eq!(shifted, vec![0]);
        assert_eq!(ring.zs()[0], -360.0);
        assert_eq!(ring.zs()[1], -120.0);
        assert_eq!(ring.zs()[2], -240.0);
    }

    #[test]
    fn recycled_tile_lands_ahead_of_the_car() {
        let mut ring = SegmentRing::new(120.0, 3);
        let car_z = -120.5;
        ring.recycle(car_z);
        for &z in ring.zs() {
            let rel = z - car_z;
            assert!(rel <= ring.tile_length(), "tile at rel {rel} is behind the window");
            assert!(
                rel > ring.tile_length() - ring.period(),
                "tile at rel {rel} is past the far edge"
            );
        }
    }

    #[test]
    fn relative_positions_stay_windowed_over_a_long_drive() {
        let mut ring = SegmentRing::new(120.0, 3);
        let mut car_z = 0.0;
        for _ in 0..20_000 {
            car_z -= 0.22;
            ring.recycle(car_z);
            for &z in ring.zs() {
                let rel = z - car_z;
                assert!(rel <= ring.tile_length() + 1e-3);
                assert!(rel > ring.tile_length() - ring.period() - 1e-3);
            }
        }
    }

    #[test]
    fn short_tiles_recycle_more_often() {
        let mut long_ring = SegmentRing::new(120.0, 3);
        let mut short_ring = SegmentRing::new(40.0, 9);
        assert_eq!(long_ring.period(), short_ring.period());

        let mut long_shifts = 0;
        let mut short_shifts = 0;
        let mut car_z = 0.0;
        for _ in 0..10_000 {
            car_z -= 0.22;
            long_shifts += long_ring.recycle(car_z).len();
            short_shifts += short_ring.recycle(car_z).len();
        }
        assert!(short_shifts > long_shifts);
    }

    #[test]
    fn nearest_tile_tracks_the_car() {
        let ring = SegmentRing::new(120.0, 3);
        assert_eq!(ring.nearest_tile_z(-10.0), 0.0);
        assert_eq!(ring.nearest_tile_z(-130.0), -120.0);
        assert_eq!(ring.nearest_tile_z(-500.0), -240.0);
    }

    #[test]
    #[should_panic(expected = "tile_length must be positive")]
    fn zero_tile_length_rejected() {
        let _ = SegmentRing::new(0.0, 3);
    }

    #[test]
    #[should_panic(expected = "tile_count must be positive")]
    fn zero_tile_count_rejected() {
        let _ = SegmentRing::new(120.0, 0);
    }
}
