//! Toroidal 2-D grid.
//!
//! Cells are stored row-major in a flat `Vec`, so `locations()` iterates
//! row by row, left to right.  Every coordinate wraps modulo the grid
//! dimensions: the grid has no edges.

use ep_core::{Entity, FieldKind};

use crate::{Field, FieldError, FieldResult, QuarantineZone};

/// A cell coordinate on a [`Grid`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLocation {
    pub row: usize,
    pub col: usize,
}

impl GridLocation {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// `depth × width` torus of cells.
pub struct Grid {
    depth: usize,
    width: usize,
    cells: Vec<Option<Entity>>,
    zone:  QuarantineZone<GridLocation>,
}

impl Grid {
    /// An empty grid.  Dimensions are validated by `SimConfig::validate`;
    /// a zero dimension yields a grid with no locations.
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth,
            width,
            cells: vec![None; depth * width],
            zone:  QuarantineZone::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every distinct cell within Chebyshev distance `radius` of `location`,
    /// wrapped onto the torus.  The origin is excluded, and on grids too small
    /// for the neighbourhood the wrapped duplicates are dropped.
    pub fn adjacent_within(&self, location: GridLocation, radius: usize) -> Vec<GridLocation> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        let origin = self.wrap(location.row as i64, location.col as i64);
        let r = radius as i64;

        let mut out = Vec::with_capacity((2 * radius + 1).pow(2).saturating_sub(1));
        for dr in -r..=r {
            for dc in -r..=r {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let loc = self.wrap(origin.row as i64 + dr, origin.col as i64 + dc);
                if loc != origin && !out.contains(&loc) {
                    out.push(loc);
                }
            }
        }
        out
    }

    #[inline]
    fn wrap(&self, row: i64, col: i64) -> GridLocation {
        GridLocation {
            row: row.rem_euclid(self.depth as i64) as usize,
            col: col.rem_euclid(self.width as i64) as usize,
        }
    }

    #[inline]
    fn slot(&self, location: GridLocation) -> Option<usize> {
        (location.row < self.depth && location.col < self.width)
            .then(|| location.row * self.width + location.col)
    }

    fn slot_or_err(&self, location: GridLocation) -> FieldResult<usize> {
        self.slot(location)
            .ok_or_else(|| FieldError::LocationOutOfBounds(format!("{location:?}")))
    }
}

impl Field for Grid {
    type Location = GridLocation;

    fn kind(&self) -> FieldKind {
        FieldKind::Grid
    }

    fn locations(&self) -> Vec<GridLocation> {
        (0..self.depth)
            .flat_map(|row| (0..self.width).map(move |col| GridLocation { row, col }))
            .collect()
    }

    fn contains(&self, location: GridLocation) -> bool {
        self.slot(location).is_some()
    }

    fn object_at(&self, location: GridLocation) -> Option<Entity> {
        self.slot(location).and_then(|i| self.cells[i])
    }

    fn place(&mut self, location: GridLocation, entity: Entity) -> FieldResult<()> {
        let i = self.slot_or_err(location)?;
        self.cells[i] = Some(entity);
        Ok(())
    }

    fn clear_location(&mut self, location: GridLocation) -> FieldResult<()> {
        let i = self.slot_or_err(location)?;
        self.cells[i] = None;
        Ok(())
    }

    fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    fn adjacent_locations(&self, location: GridLocation) -> Vec<GridLocation> {
        self.adjacent_within(location, 1)
    }

    fn zone(&self) -> &QuarantineZone<GridLocation> {
        &self.zone
    }

    fn zone_mut(&mut self) -> &mut QuarantineZone<GridLocation> {
        &mut self.zone
    }
}
