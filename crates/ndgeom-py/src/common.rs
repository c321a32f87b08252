use ndgeom::{GeomError, Point, Segment};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn point_from_py(coords: Vec<f64>) -> PyResult<Point> {
    Point::new(coords).map_err(map_geom_err)
}

pub fn segment_from_py(s: (f64, f64, f64, f64)) -> PyResult<Segment> {
    Segment::from_coords(&[s.0, s.1, s.2, s.3]).map_err(map_geom_err)
}
