//! Precomputed Perlin surface heights.
//!
//! The field is sampled once per world generation: a fixed 256 by 256 table
//! of heights that every chunk then reads during voxel classification. World
//! variety comes from a random per-generation offset into noise space, not
//! from reseeding the noise function itself.

use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Side length of the precomputed height table, in columns.
pub const FIELD_SIZE: usize = 256;

/// Knobs controlling height-field sampling.
#[derive(Clone, Debug)]
pub struct HeightFieldParams {
    /// Seed for the noise-space offset. `None` draws a fresh offset from the
    /// thread RNG, giving a different world on every generation.
    pub seed: Option<u64>,
    /// How far the field spans in noise space. Larger values pack more
    /// terrain variation into the same number of columns.
    pub noise_scale: f64,
    /// Multiplier from normalized noise to world-space height.
    pub height_scale: f64,
}

impl Default for HeightFieldParams {
    fn default() -> Self {
        Self {
            seed: None,
            noise_scale: 10.0,
            height_scale: 32.0,
        }
    }
}

/// A 256 by 256 table of surface heights, indexed by world column `(x, z)`.
pub struct HeightField {
    heights: Vec<f32>,
}

impl HeightField {
    /// Samples the full field.
    ///
    /// Each column maps to a noise coordinate `i / FIELD_SIZE * noise_scale`
    /// shifted by a random offset in `[0, 256)` per axis. The raw Perlin
    /// value in `[-1, 1]` is remapped to `[0, 1]` before scaling, so heights
    /// land in `[0, height_scale]`.
    pub fn generate(params: &HeightFieldParams) -> Self {
        let (offset_x, offset_z) = match params.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (
                    rng.random_range(0.0..FIELD_SIZE as f64),
                    rng.random_range(0.0..FIELD_SIZE as f64),
                )
            }
            None => {
                let mut rng = rand::rng();
                (
                    rng.random_range(0.0..FIELD_SIZE as f64),
                    rng.random_range(0.0..FIELD_SIZE as f64),
                )
            }
        };
        debug!(offset_x, offset_z, "sampling height field");

        let perlin = Perlin::new(0);
        let mut heights = Vec::with_capacity(FIELD_SIZE * FIELD_SIZE);
        for x in 0..FIELD_SIZE {
            for z in 0..FIELD_SIZE {
                let nx = x as f64 / FIELD_SIZE as f64 * params.noise_scale + offset_x;
                let nz = z as f64 / FIELD_SIZE as f64 * params.noise_scale + offset_z;
                let raw = perlin.get([nx, nz]);
                let normalized = (raw + 1.0) / 2.0;
                heights.push((normalized * params.height_scale) as f32);
            }
        }

        Self { heights }
    }

    /// Surface height for the column at `(x, z)`.
    ///
    /// Coordinates outside the table clamp to its edge, so columns beyond
    /// the sampled area repeat the border height instead of wrapping or
    /// failing.
    pub fn get(&self, x: i32, z: i32) -> f32 {
        let x = (x.max(0) as usize).min(FIELD_SIZE - 1);
        let z = (z.max(0) as usize).min(FIELD_SIZE - 1);
        self.heights[x * FIELD_SIZE + z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let params = HeightFieldParams {
            seed: Some(42),
            ..Default::default()
        };
        let a = HeightField::generate(&params);
        let b = HeightField::generate(&params);

        for x in (0..FIELD_SIZE as i32).step_by(17) {
            for z in (0..FIELD_SIZE as i32).step_by(17) {
                assert_eq!(a.get(x, z), b.get(x, z), "mismatch at ({x}, {z})");
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = HeightField::generate(&HeightFieldParams {
            seed: Some(1),
            ..Default::default()
        });
        let b = HeightField::generate(&HeightFieldParams {
            seed: Some(2),
            ..Default::default()
        });

        let same = (0..FIELD_SIZE as i32)
            .all(|x| (0..FIELD_SIZE as i32).all(|z| a.get(x, z) == b.get(x, z)));
        assert!(!same, "distinct seeds produced identical fields");
    }

    #[test]
    fn test_heights_stay_in_scaled_range() {
        let params = HeightFieldParams {
            seed: Some(7),
            height_scale: 32.0,
            ..Default::default()
        };
        let field = HeightField::generate(&params);

        for x in 0..FIELD_SIZE as i32 {
            for z in 0..FIELD_SIZE as i32 {
                let h = field.get(x, z);
                assert!(
                    (0.0..=32.0).contains(&h),
                    "height {h} out of range at ({x}, {z})"
                );
            }
        }
    }

    #[test]
    fn test_out_of_domain_lookup_clamps_to_edge() {
        let field = HeightField::generate(&HeightFieldParams {
            seed: Some(3),
            ..Default::default()
        });

        assert_eq!(field.get(-5, 10), field.get(0, 10));
        assert_eq!(field.get(10, -1), field.get(10, 0));
        assert_eq!(field.get(1000, 20), field.get(255, 20));
        assert_eq!(field.get(20, 300), field.get(20, 255));
    }

    #[test]
    fn test_zero_height_scale_flattens_the_field() {
        let field = HeightField::generate(&HeightFieldParams {
            seed: Some(9),
            height_scale: 0.0,
            ..Default::default()
        });
        for x in (0..FIELD_SIZE as i32).step_by(31) {
            for z in (0..FIELD_SIZE as i32).step_by(31) {
                assert_eq!(field.get(x, z), 0.0);
            }
        }
    }
}
