//! Output of a successful decode: the undemosaiced sensor sample grid.

use std::ops::Index;

/// A fully populated plane of 16-bit sensor samples, `height` rows of
/// `width` samples in row-major order.
///
/// A `BayerPlane` only exists after the bulk copy out of the native decoder
/// completed; it is never handed out partially filled, and its dimensions
/// always agree with its sample count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayerPlane {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl BayerPlane {
    pub(crate) fn from_samples(samples: Vec<u16>, width: u32, height: u32) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        BayerPlane {
            width,
            height,
            samples,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// One row of samples. Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[u16] {
        assert!(row < self.height, "row {} out of range", row);
        let width = self.width as usize;
        let start = row as usize * width;
        &self.samples[start..start + width]
    }

    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }
}

impl Index<(u32, u32)> for BayerPlane {
    type Output = u16;

    /// Sample at `(row, col)`.
    fn index(&self, (row, col): (u32, u32)) -> &u16 {
        assert!(col < self.width, "column {} out of range", col);
        &self.row(row)[col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_3x2() -> BayerPlane {
        BayerPlane::from_samples(vec![10, 11, 12, 20, 21, 22], 3, 2)
    }

    #[test]
    fn test_dimensions_match_samples() {
        let plane = plane_3x2();
        assert_eq!(plane.width(), 3);
        assert_eq!(plane.height(), 2);
        assert_eq!(plane.samples().len(), 6);
    }

    #[test]
    fn test_row_access() {
        let plane = plane_3x2();
        assert_eq!(plane.row(0), &[10, 11, 12]);
        assert_eq!(plane.row(1), &[20, 21, 22]);
    }

    #[test]
    fn test_index_is_row_major() {
        let plane = plane_3x2();
        assert_eq!(plane[(0, 0)], 10);
        assert_eq!(plane[(0, 2)], 12);
        assert_eq!(plane[(1, 1)], 21);
    }

    #[test]
    #[should_panic(expected = "row 2 out of range")]
    fn test_row_out_of_range_panics() {
        let _ = plane_3x2().row(2);
    }

    #[test]
    #[should_panic(expected = "column 3 out of range")]
    fn test_column_out_of_range_panics() {
        let _ = plane_3x2()[(1, 3)];
    }

    #[test]
    fn test_into_samples_returns_row_major_data() {
        assert_eq!(plane_3x2().into_samples(), vec![10, 11, 12, 20, 21, 22]);
    }
}
