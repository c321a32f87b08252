//! Immutable n-dimensional points.
//!
//! - Coordinates live in a `DVector<f64>` whose length is fixed at
//!   construction; every binary operation re-checks the dimension.
//! - Comparisons are exact. There is no epsilon anywhere in this module.
//! - Ordering is reverse-lexicographic: the highest axis decides first
//!   (`..., z, y, x`).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::DVector;

use crate::dimension::{Dimension, GeomObject};
use crate::error::{GeomError, Result};

/// Immutable tuple of real coordinates.
///
/// Invariants:
/// - `coords.len() == dim.get() >= 1`.
/// - Never mutated after construction; arithmetic returns new points.
#[derive(Clone, Debug)]
pub struct Point {
    dim: Dimension,
    coords: DVector<f64>,
}

impl Point {
    /// Build from a non-empty coordinate list; dimension = list length.
    pub fn new(coords: impl Into<Vec<f64>>) -> Result<Self> {
        let coords = coords.into();
        let dim = Dimension::of_len(coords.len())?;
        Ok(Self {
            dim,
            coords: DVector::from_vec(coords),
        })
    }

    #[inline]
    fn from_dvector(dim: Dimension, coords: DVector<f64>) -> Self {
        debug_assert_eq!(coords.len(), dim.get());
        Self { dim, coords }
    }

    /// `a - b` for operands already known to share a dimension.
    pub(crate) fn from_diff(a: &Point, b: &Point) -> Point {
        debug_assert_eq!(a.dim, b.dim);
        Self::from_dvector(a.dim, &a.coords - &b.coords)
    }

    /// Independent copy of the coordinates.
    pub fn coordinates(&self) -> Vec<f64> {
        self.coords.as_slice().to_vec()
    }

    /// Read-only view of the coordinates.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.coords.as_slice()
    }

    pub fn coordinate(&self, index: usize) -> Result<f64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange {
                index,
                dimension: self.dim.get(),
            })
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> Result<f64> {
        self.named_axis(1, 'y')
    }

    pub fn z(&self) -> Result<f64> {
        self.named_axis(2, 'z')
    }

    fn named_axis(&self, index: usize, axis: char) -> Result<f64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(GeomError::InsufficientDimension {
                axis,
                dimension: self.dim.get(),
            })
    }

    fn check_same_dim(&self, other: &Point) -> Result<()> {
        self.dim.ensure_same(other.dim)
    }

    /// Coordinate-wise difference `self - other`.
    pub fn sub(&self, other: &Point) -> Result<Point> {
        self.check_same_dim(other)?;
        Ok(Self::from_dvector(self.dim, &self.coords - &other.coords))
    }

    /// Coordinate-wise sum.
    pub fn add(&self, other: &Point) -> Result<Point> {
        self.check_same_dim(other)?;
        Ok(Self::from_dvector(self.dim, &self.coords + &other.coords))
    }

    /// Coordinate-wise (Hadamard) product.
    pub fn mul_elementwise(&self, other: &Point) -> Result<Point> {
        self.check_same_dim(other)?;
        Ok(Self::from_dvector(
            self.dim,
            self.coords.component_mul(&other.coords),
        ))
    }

    pub fn add_scalar(&self, value: f64) -> Point {
        Self::from_dvector(self.dim, self.coords.add_scalar(value))
    }

    pub fn mul_scalar(&self, value: f64) -> Point {
        Self::from_dvector(self.dim, &self.coords * value)
    }

    pub fn div_scalar(&self, value: f64) -> Result<Point> {
        if value == 0.0 {
            return Err(GeomError::invalid_argument("divisor must not be 0"));
        }
        Ok(Self::from_dvector(self.dim, &self.coords / value))
    }

    /// Reverse-lexicographic comparison (last axis first).
    ///
    /// A pair where neither `<` nor `>` holds (NaN involved) counts as equal
    /// and the scan moves on to the next lower axis.
    pub fn compare_to(&self, other: &Point) -> Result<Ordering> {
        self.check_same_dim(other)?;
        for (a, b) in self.as_slice().iter().zip(other.as_slice()).rev() {
            if a > b {
                return Ok(Ordering::Greater);
            } else if a < b {
                return Ok(Ordering::Less);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Hash derived from coordinates truncated at two decimals.
    ///
    /// `h = 1; h += (h + trunc(c * 100)) * 31` per coordinate, in wrapping
    /// 32-bit arithmetic. Exactly equal points always agree; distinct points
    /// in the same 0.01 bucket collide.
    pub fn hash_code(&self) -> i32 {
        self.coords.iter().fold(1i32, |h, &c| {
            let bucket = (c * 100.0) as i32;
            h.wrapping_add(h.wrapping_add(bucket).wrapping_mul(31))
        })
    }
}

impl GeomObject for Point {
    fn dimension(&self) -> Dimension {
        self.dim
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| a == b)
    }
}

impl PartialOrd for Point {
    /// `None` across dimensions.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point: ")?;
        write_coords(f, self.as_slice())?;
        write!(f, ".")
    }
}

/// `1, 2.5, -3` using `f64`'s shortest round-trip formatting.
pub(crate) fn write_coords(f: &mut fmt::Formatter<'_>, coords: &[f64]) -> fmt::Result {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}
