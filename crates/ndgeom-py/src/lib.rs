//! PyO3 bindings for selected `ndgeom` functions.
//!
//! Notes
//! - Keep bindings thin: points are tuples/lists of floats, segments are
//!   `(x1, y1, x2, y2)` tuples.
//! - Errors from the library surface as `ValueError`.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn ndgeom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)
}
