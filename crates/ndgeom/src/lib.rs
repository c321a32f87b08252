//! Immutable n-dimensional points, vectors and segments.
//!
//! - `Point`: coordinates with exact arithmetic and a reverse-lexicographic order.
//! - `Vector`: displacement backed by a `Point` (norm, dot, 2D cross).
//! - `Segment`: directed pair of points with the 2D intersection predicate.
//! - `Space`: append-only container keyed by a shared `Dimension`.
//!
//! No tolerances: every comparison is exact on raw `f64` coordinates.

pub mod dimension;
pub mod draw;
pub mod error;
pub mod point;
pub mod segment;
pub mod space;
pub mod vector;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dimension::{Dimension, GeomObject};
pub use draw::Surface;
pub use error::{GeomError, Result};
pub use point::Point;
pub use segment::{BoundsCheck, IntersectCfg, Segment};
pub use space::Space;
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{
        BoundsCheck, Dimension, GeomError, GeomObject, IntersectCfg, Point, Segment, Space,
        Surface, Vector,
    };
}
