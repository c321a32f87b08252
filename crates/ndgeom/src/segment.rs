//! Directed line segments and the 2D intersection predicate.
//!
//! Intersection uses four orientation values (2D cross products):
//! - `o1 = v1 × (from1→from2)`, `o2 = v1 × (from1→to2)`,
//! - `o3 = v2 × (from2→from1)`, `o4 = v2 × (from2→to1)`,
//!
//! where `vK = fromK→toK`. Opposite signs on both pairs mean a proper
//! crossing. A zero value means that endpoint is collinear with the other
//! segment's line; it then counts as a hit if it lies inside that segment's
//! bounding box. Everything is exact arithmetic on raw coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dimension::{Dimension, GeomObject};
use crate::error::Result;
use crate::point::{write_coords, Point};
use crate::vector::Vector;

/// Upper bound used for the y axis in the collinear containment check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsCheck {
    /// True axis-aligned bounding box.
    #[default]
    Exact,
    /// `max(from.y, to.x)` as the upper y bound; kept for reproducing
    /// results computed with the historical check.
    LegacyMaxX,
}

/// Intersection configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectCfg {
    pub bbox: BoundsCheck,
}

impl IntersectCfg {
    #[inline]
    pub fn legacy() -> Self {
        Self {
            bbox: BoundsCheck::LegacyMaxX,
        }
    }
}

/// Ordered pair of same-dimension endpoints.
///
/// Invariants:
/// - `from.dimension() == to.dimension()`.
/// - Direction matters: `(a, b)` and `(b, a)` are different segments.
#[derive(Clone, Debug)]
pub struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Result<Self> {
        from.dimension().ensure_same(to.dimension())?;
        Ok(Self { from, to })
    }

    /// Split a flat list at its midpoint: `[x1, y1, x2, y2]` → `(x1, y1)→(x2, y2)`.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        let (a, b) = coords.split_at(coords.len() / 2);
        Self::new(Point::new(a.to_vec())?, Point::new(b.to_vec())?)
    }

    #[inline]
    pub fn from(&self) -> &Point {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Point {
        &self.to
    }

    pub fn points(&self) -> [&Point; 2] {
        [&self.from, &self.to]
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        Vector::from_segment(self).length()
    }

    /// 2D intersection test with the exact bounding box.
    pub fn intersects(&self, other: &Segment) -> Result<bool> {
        self.intersects_with(other, IntersectCfg::default())
    }

    /// 2D intersection test; `cfg` selects the containment check.
    ///
    /// Errors: `DimensionMismatch` for segments of different dimension,
    /// `InvalidState` when they are not 2D.
    pub fn intersects_with(&self, other: &Segment, cfg: IntersectCfg) -> Result<bool> {
        self.dimension().ensure_same(other.dimension())?;
        let v1 = Vector::from_segment(self);
        let v2 = Vector::from_segment(other);
        let o1 = v1.cross_product_2d(&Vector::between(&self.from, &other.from)?)?;
        let o2 = v1.cross_product_2d(&Vector::between(&self.from, &other.to)?)?;
        let o3 = v2.cross_product_2d(&Vector::between(&other.from, &self.from)?)?;
        let o4 = v2.cross_product_2d(&Vector::between(&other.from, &self.to)?)?;

        let hit = if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
            true
        } else {
            (o1 == 0.0 && self.contains_collinear(&other.from, cfg.bbox))
                || (o2 == 0.0 && self.contains_collinear(&other.to, cfg.bbox))
                || (o3 == 0.0 && other.contains_collinear(&self.from, cfg.bbox))
                || (o4 == 0.0 && other.contains_collinear(&self.to, cfg.bbox))
        };
        tracing::trace!(o1, o2, o3, o4, hit, "segment intersection");
        Ok(hit)
    }

    /// Bounding-box containment of a point already known to be collinear.
    ///
    /// Pre: both segments were checked to be 2D.
    fn contains_collinear(&self, p: &Point, mode: BoundsCheck) -> bool {
        let (a, b, q) = (
            self.from.as_slice(),
            self.to.as_slice(),
            p.as_slice(),
        );
        let y_hi = match mode {
            BoundsCheck::Exact => a[1].max(b[1]),
            BoundsCheck::LegacyMaxX => a[1].max(b[0]),
        };
        a[0].min(b[0]) <= q[0]
            && q[0] <= a[0].max(b[0])
            && a[1].min(b[1]) <= q[1]
            && q[1] <= y_hi
    }
}

impl GeomObject for Segment {
    fn dimension(&self) -> Dimension {
        self.from.dimension()
    }
}

impl PartialEq for Segment {
    /// Endpoint-wise, in order.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h = self
            .from
            .hash_code()
            .wrapping_mul(31)
            .wrapping_add(self.to.hash_code());
        state.write_i32(h);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment: from (")?;
        write_coords(f, self.from.as_slice())?;
        write!(f, ") to (")?;
        write_coords(f, self.to.as_slice())?;
        write!(f, ").")
    }
}
