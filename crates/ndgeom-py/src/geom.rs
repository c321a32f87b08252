//! Geometric helper bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_geom_err, point_from_py, segment_from_py};
use ndgeom::{IntersectCfg, Vector};
use pyo3::prelude::*;
use std::cmp::Ordering;

/// Whether two 2D segments `(x1, y1, x2, y2)` intersect.
#[pyfunction]
#[pyo3(signature = (a, b, legacy = false))]
pub fn segments_intersect(
    a: (f64, f64, f64, f64),
    b: (f64, f64, f64, f64),
    legacy: bool,
) -> PyResult<bool> {
    let cfg = if legacy {
        IntersectCfg::legacy()
    } else {
        IntersectCfg::default()
    };
    segment_from_py(a)?
        .intersects_with(&segment_from_py(b)?, cfg)
        .map_err(map_geom_err)
}

/// Signed area of the parallelogram spanned by a and b.
#[pyfunction]
pub fn cross_product_2d(a: (f64, f64), b: (f64, f64)) -> PyResult<f64> {
    let va = Vector::from_coords([a.0, a.1]).map_err(map_geom_err)?;
    let vb = Vector::from_coords([b.0, b.1]).map_err(map_geom_err)?;
    va.cross_product_2d(&vb).map_err(map_geom_err)
}

/// -1, 0 or 1 under the reverse-lexicographic point order.
#[pyfunction]
pub fn point_compare(a: Vec<f64>, b: Vec<f64>) -> PyResult<i32> {
    let ord = point_from_py(a)?
        .compare_to(&point_from_py(b)?)
        .map_err(map_geom_err)?;
    Ok(match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

#[pyfunction]
pub fn segment_length(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    let seg = ndgeom::Segment::new(point_from_py(a)?, point_from_py(b)?).map_err(map_geom_err)?;
    Ok(seg.length())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(segments_intersect, m)?)?;
    m.add_function(wrap_pyfunction!(cross_product_2d, m)?)?;
    m.add_function(wrap_pyfunction!(point_compare, m)?)?;
    m.add_function(wrap_pyfunction!(segment_length, m)?)?;
    Ok(())
}
