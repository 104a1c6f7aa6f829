//! Cubic voxel storage for one chunk.
//!
//! A [`VoxelGrid`] is a dense `size³` array addressed by integer local
//! coordinates in `[0, size)` per axis. Cells are classified once at
//! construction from their world position and mutated only through
//! [`VoxelGrid::set_type`], which preserves the type/activity invariant.

use glam::{IVec3, Vec3};

use crate::error::VoxelError;
use crate::voxel::{Voxel, VoxelType};

/// Truncates a fractional position toward negative infinity per axis.
///
/// `(-0.5, 1.9, 3.0)` becomes `(-1, 1, 3)`, matching how world-space hit
/// points map onto the integer cell lattice.
pub fn floor_to_grid(pos: Vec3) -> IVec3 {
    pos.floor().as_ivec3()
}

/// Dense cubic voxel storage with bounds-checked access.
pub struct VoxelGrid {
    size: i32,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Allocates a `size³` grid, classifying every cell from its world position.
    ///
    /// `classify` receives `origin + local` for each cell and returns the
    /// material; the activity flag is derived from it.
    pub fn generate(
        size: u32,
        origin: IVec3,
        mut classify: impl FnMut(IVec3) -> VoxelType,
    ) -> Self {
        let size = size as i32;
        let mut voxels = Vec::with_capacity((size * size * size) as usize);

        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    let ty = classify(origin + IVec3::new(x, y, z));
                    voxels.push(Voxel::new(ty));
                }
            }
        }

        Self { size, voxels }
    }

    /// Allocates a grid filled with a single type. Mostly useful in tests
    /// and for synthetic fixtures.
    pub fn filled(size: u32, voxel_type: VoxelType) -> Self {
        Self::generate(size, IVec3::ZERO, |_| voxel_type)
    }

    /// Edge length of the grid.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns `true` if every axis of `pos` lies in `[0, size)`.
    pub fn in_bounds(&self, pos: IVec3) -> bool {
        pos.cmpge(IVec3::ZERO).all() && pos.cmplt(IVec3::splat(self.size)).all()
    }

    /// Returns the voxel at a local integer position.
    ///
    /// # Errors
    ///
    /// [`VoxelError::OutOfRange`] if any axis lies outside `[0, size)`.
    pub fn get(&self, pos: IVec3) -> Result<Voxel, VoxelError> {
        if !self.in_bounds(pos) {
            return Err(VoxelError::OutOfRange {
                pos,
                size: self.size,
            });
        }
        Ok(self.voxels[self.linear_index(pos)])
    }

    /// Returns the voxel at a fractional local position, flooring each axis
    /// toward negative infinity before the bounds check.
    pub fn get_at(&self, pos: Vec3) -> Result<Voxel, VoxelError> {
        self.get(floor_to_grid(pos))
    }

    /// Replaces the material at `pos`, re-deriving the activity flag.
    ///
    /// # Errors
    ///
    /// [`VoxelError::OutOfRange`] for positions outside the grid;
    /// [`VoxelError::NoOpMutation`] if the cell already holds `voxel_type`
    /// (the mutation is rejected, not silently accepted).
    pub fn set_type(&mut self, pos: IVec3, voxel_type: VoxelType) -> Result<(), VoxelError> {
        if !self.in_bounds(pos) {
            return Err(VoxelError::OutOfRange {
                pos,
                size: self.size,
            });
        }

        let index = self.linear_index(pos);
        let current = self.voxels[index].voxel_type();
        if current == voxel_type {
            return Err(VoxelError::NoOpMutation { pos, current });
        }

        self.voxels[index].set_type(voxel_type);
        Ok(())
    }

    /// Non-failing activity query: out-of-range positions report `false`.
    ///
    /// This lets neighbor checks treat out-of-bounds as "no solid voxel"
    /// without special-casing, in contrast to [`VoxelGrid::get`] which
    /// fails loudly.
    pub fn is_active(&self, pos: IVec3) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.voxels[self.linear_index(pos)].is_active()
    }

    /// Sets every non-`Air` cell to `Air`, returning how many changed.
    pub fn clear_to_air(&mut self) -> usize {
        let mut cleared = 0;
        for voxel in &mut self.voxels {
            if voxel.is_active() {
                voxel.set_type(VoxelType::Air);
                cleared += 1;
            }
        }
        cleared
    }

    /// Iterates `(local position, voxel)` pairs over the whole grid.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, Voxel)> + '_ {
        let size = self.size;
        self.voxels.iter().enumerate().map(move |(i, &v)| {
            let i = i as i32;
            let z = i % size;
            let y = (i / size) % size;
            let x = i / (size * size);
            (IVec3::new(x, y, z), v)
        })
    }

    fn linear_index(&self, pos: IVec3) -> usize {
        ((pos.x * self.size + pos.y) * self.size + pos.z) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_solid_grid() -> VoxelGrid {
        // Stone below y = 4, air above.
        VoxelGrid::generate(8, IVec3::ZERO, |p| {
            if p.y < 4 {
                VoxelType::Stone
            } else {
                VoxelType::Air
            }
        })
    }

    #[test]
    fn test_generate_passes_world_coordinates() {
        let origin = IVec3::new(16, 32, -16);
        // Mark exactly the cell whose world position equals origin + (1, 2, 3).
        let target = origin + IVec3::new(1, 2, 3);
        let grid = VoxelGrid::generate(4, origin, |world| {
            if world == target {
                VoxelType::Snow
            } else {
                VoxelType::Air
            }
        });

        let voxel = grid.get(IVec3::new(1, 2, 3)).unwrap();
        assert_eq!(voxel.voxel_type(), VoxelType::Snow);
        assert_eq!(grid.iter().filter(|(_, v)| v.is_active()).count(), 1);
    }

    #[test]
    fn test_activity_matches_type_after_init() {
        let grid = half_solid_grid();
        for (pos, voxel) in grid.iter() {
            assert_eq!(
                voxel.is_active(),
                !voxel.voxel_type().is_air(),
                "invariant broken at {pos}"
            );
        }
    }

    #[test]
    fn test_get_out_of_range_fails() {
        let grid = half_solid_grid();
        for pos in [
            IVec3::new(-1, 0, 0),
            IVec3::new(0, 8, 0),
            IVec3::new(0, 0, 100),
        ] {
            let err = grid.get(pos).unwrap_err();
            assert!(matches!(err, VoxelError::OutOfRange { .. }));
        }
    }

    #[test]
    fn test_get_at_floors_toward_negative_infinity() {
        let grid = half_solid_grid();
        // 3.9 floors to 3 (solid layer); -0.1 floors to -1 (out of range).
        assert!(grid.get_at(Vec3::new(3.9, 3.9, 3.9)).is_ok());
        let err = grid.get_at(Vec3::new(-0.1, 0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            VoxelError::OutOfRange {
                pos: IVec3::new(-1, 0, 0),
                size: 8
            }
        );
    }

    #[test]
    fn test_set_type_rejects_noop() {
        let mut grid = half_solid_grid();
        let pos = IVec3::new(1, 1, 1);
        let err = grid.set_type(pos, VoxelType::Stone).unwrap_err();
        assert_eq!(
            err,
            VoxelError::NoOpMutation {
                pos,
                current: VoxelType::Stone
            }
        );
        // The failed call left the cell untouched.
        assert_eq!(grid.get(pos).unwrap().voxel_type(), VoxelType::Stone);
    }

    #[test]
    fn test_set_type_updates_type_and_activity() {
        let mut grid = half_solid_grid();
        let pos = IVec3::new(2, 6, 2);
        assert!(!grid.is_active(pos));

        grid.set_type(pos, VoxelType::Grass).unwrap();
        assert!(grid.is_active(pos));
        assert_eq!(grid.get(pos).unwrap().voxel_type(), VoxelType::Grass);

        grid.set_type(pos, VoxelType::Air).unwrap();
        assert!(!grid.is_active(pos));
    }

    #[test]
    fn test_is_active_out_of_range_is_false() {
        let grid = VoxelGrid::filled(4, VoxelType::Stone);
        assert!(grid.is_active(IVec3::new(3, 3, 3)));
        assert!(!grid.is_active(IVec3::new(4, 0, 0)));
        assert!(!grid.is_active(IVec3::new(0, -1, 0)));
    }

    #[test]
    fn test_clear_to_air_counts_and_clears() {
        let mut grid = half_solid_grid();
        let cleared = grid.clear_to_air();
        assert_eq!(cleared, 8 * 8 * 4);
        assert!(grid.iter().all(|(_, v)| !v.is_active()));

        // Second clear finds nothing left to do.
        assert_eq!(grid.clear_to_air(), 0);
    }

    #[test]
    fn test_iter_covers_every_cell_once() {
        let grid = VoxelGrid::filled(4, VoxelType::Water);
        let mut count = 0;
        for (pos, _) in grid.iter() {
            assert!(grid.in_bounds(pos));
            count += 1;
        }
        assert_eq!(count, 64);
    }
}
