//! Column-major height grids addressed by `(x, z)`.

use std::ops::Index;

use rayon::prelude::*;

use crate::ValueRange;

/// Linear offset of cell `(x, z)` in a grid with `height` cells per column.
///
/// Shared by vertex emission and index construction so both agree on layout.
#[inline]
pub const fn grid_index(x: usize, z: usize, height: usize) -> usize {
    x * height + z
}

/// A `width × height` array of height samples, one per grid cell.
///
/// Cell `(x, z)` lives at `x * height + z`, so each column `x` is a
/// contiguous slice of `height` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl HeightGrid {
    /// A grid with every sample set to zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap existing samples. Returns `None` if `data.len() != width * height`.
    pub fn from_values(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, z)` for every cell.
    ///
    /// Columns are filled in parallel on the current rayon pool. Each task
    /// owns exactly one column slice, so the result is identical for any
    /// number of threads.
    pub fn par_from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f32 + Sync,
    {
        let mut grid = Self::new(width, height);
        if height > 0 {
            grid.data
                .par_chunks_mut(height)
                .enumerate()
                .for_each(|(x, column)| {
                    for (z, cell) in column.iter_mut().enumerate() {
                        *cell = f(x, z);
                    }
                });
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `(x, z)`, or `None` when out of range.
    pub fn get(&self, x: usize, z: usize) -> Option<f32> {
        if x < self.width && z < self.height {
            Some(self.data[grid_index(x, z, self.height)])
        } else {
            None
        }
    }

    /// The contiguous samples of column `x`.
    pub fn column(&self, x: usize) -> Option<&[f32]> {
        if x < self.width {
            let start = x * self.height;
            Some(&self.data[start..start + self.height])
        } else {
            None
        }
    }

    /// All samples in `x * height + z` order.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub fn into_values(self) -> Vec<f32> {
        self.data
    }

    /// Lowest and highest sample, or `None` for an empty grid.
    pub fn range(&self) -> Option<ValueRange> {
        ValueRange::covering(self.data.iter().copied())
    }
}

impl Index<(usize, usize)> for HeightGrid {
    type Output = f32;

    fn index(&self, (x, z): (usize, usize)) -> &f32 {
        &self.data[grid_index(x, z, self.height)]
    }
}
