//! Displacement vectors backed by a `Point`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dimension::{Dimension, GeomObject};
use crate::error::{GeomError, Result};
use crate::point::{write_coords, Point};
use crate::segment::Segment;

/// Immutable displacement; `source` holds the displacement coordinates.
#[derive(Clone, Debug)]
pub struct Vector {
    source: Point,
}

impl Vector {
    /// Displacement from the origin to `source`.
    #[inline]
    pub fn new(source: Point) -> Self {
        Self { source }
    }

    /// Vector from `from` to `to`, i.e. `to - from`.
    pub fn between(from: &Point, to: &Point) -> Result<Self> {
        Ok(Self::new(to.sub(from)?))
    }

    pub fn from_coords(coords: impl Into<Vec<f64>>) -> Result<Self> {
        Ok(Self::new(Point::new(coords)?))
    }

    /// `segment.to - segment.from`.
    pub fn from_segment(segment: &Segment) -> Self {
        Self::from_segment_dir(segment, false)
    }

    /// `segment.from - segment.to` when `reversed`, otherwise as `from_segment`.
    pub fn from_segment_dir(segment: &Segment, reversed: bool) -> Self {
        let (a, b) = if reversed {
            (segment.to(), segment.from())
        } else {
            (segment.from(), segment.to())
        };
        // Segment guarantees matching dimensions.
        Self::new(Point::from_diff(b, a))
    }

    #[inline]
    pub fn source(&self) -> &Point {
        &self.source
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.source
            .as_slice()
            .iter()
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt()
    }

    /// `InvalidArgument` for the zero vector.
    pub fn unit_vector(&self) -> Result<Vector> {
        Ok(Self::new(self.source.div_scalar(self.length())?))
    }

    /// Signed area of the parallelogram spanned by `self` and `other` (2D only).
    ///
    /// Positive when `other` turns counterclockwise from `self`; zero when collinear.
    pub fn cross_product_2d(&self, other: &Vector) -> Result<f64> {
        let d = self.dimension();
        d.ensure_same(other.dimension())?;
        if d != Dimension::TWO {
            return Err(GeomError::invalid_state(format!(
                "cross product needs 2D vectors, got {d}"
            )));
        }
        let a = self.source.as_slice();
        let b = other.source.as_slice();
        Ok(a[0] * b[1] - a[1] * b[0])
    }

    pub fn dot_product(&self, other: &Vector) -> Result<f64> {
        let prod = self.source.mul_elementwise(&other.source)?;
        Ok(prod.as_slice().iter().sum())
    }

    pub fn sum(&self, other: &Vector) -> Result<Vector> {
        Ok(Self::new(self.source.add(&other.source)?))
    }
}

impl GeomObject for Vector {
    fn dimension(&self) -> Dimension {
        self.source.dimension()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl From<Point> for Vector {
    fn from(source: Point) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: <")?;
        write_coords(f, self.source.as_slice())?;
        write!(f, ">.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::from_coords(coords.to_vec()).unwrap()
    }

    fn p(coords: &[f64]) -> Point {
        Point::new(coords.to_vec()).unwrap()
    }

    #[test]
    fn unit_axes_cross_to_one() {
        assert_eq!(v(&[1.0, 0.0]).cross_product_2d(&v(&[0.0, 1.0])), Ok(1.0));
        assert_eq!(v(&[0.0, 1.0]).cross_product_2d(&v(&[1.0, 0.0])), Ok(-1.0));
        assert_eq!(v(&[2.0, 2.0]).cross_product_2d(&v(&[-3.0, -3.0])), Ok(0.0));
    }

    #[test]
    fn cross_product_is_2d_only() {
        assert!(matches!(
            v(&[1.0, 0.0, 0.0]).cross_product_2d(&v(&[0.0, 1.0, 0.0])),
            Err(GeomError::InvalidState { .. })
        ));
        assert_eq!(
            v(&[1.0, 0.0]).cross_product_2d(&v(&[0.0, 1.0, 0.0])),
            Err(GeomError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn between_points_runs_from_start_to_end() {
        let from = p(&[1.0, 1.0]);
        let to = p(&[4.0, 5.0]);
        let d = Vector::between(&from, &to).unwrap();
        assert_eq!(d, v(&[3.0, 4.0]));
        assert_eq!(from.add(d.source()).unwrap(), to);
    }

    #[test]
    fn segment_direction_and_reversal() {
        let seg = Segment::new(p(&[1.0, 2.0]), p(&[4.0, 6.0])).unwrap();
        assert_eq!(Vector::from_segment(&seg), v(&[3.0, 4.0]));
        assert_eq!(Vector::from_segment_dir(&seg, true), v(&[-3.0, -4.0]));
        assert_eq!(
            Vector::from_segment(&seg),
            Vector::between(seg.from(), seg.to()).unwrap()
        );
    }

    #[test]
    fn length_and_unit_vector() {
        let a = v(&[3.0, 4.0]);
        assert_eq!(a.length(), 5.0);
        let u = a.unit_vector().unwrap();
        assert_eq!(u, v(&[0.6, 0.8]));
        assert!((u.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(matches!(
            v(&[0.0, 0.0, 0.0]).unit_vector(),
            Err(GeomError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn dot_and_sum() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, -5.0, 6.0]);
        assert_eq!(a.dot_product(&b), Ok(12.0));
        assert_eq!(a.sum(&b).unwrap(), v(&[5.0, -3.0, 9.0]));
        assert_eq!(
            a.dot_product(&v(&[1.0])),
            Err(GeomError::DimensionMismatch { left: 3, right: 1 })
        );
    }

    #[test]
    fn equality_delegates_to_source() {
        assert_eq!(v(&[1.0, 2.0]), Vector::new(p(&[1.0, 2.0])));
        assert_ne!(v(&[1.0, 2.0]), v(&[1.0, 2.0, 0.0]));
        assert_eq!(v(&[1.0, 2.0]).to_string(), "Vector: <1, 2>.");
    }

    proptest! {
        #[test]
        fn cross_product_is_antisymmetric(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
        ) {
            let a = v(&[f64::from(ax), f64::from(ay)]);
            let b = v(&[f64::from(bx), f64::from(by)]);
            prop_assert_eq!(a.cross_product_2d(&b).unwrap(), -b.cross_product_2d(&a).unwrap());
            prop_assert_eq!(a.cross_product_2d(&a).unwrap(), 0.0);
        }
    }
}
