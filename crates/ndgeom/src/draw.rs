//! 2D rendering onto a caller-supplied surface.
//!
//! The library never owns a drawing context. Callers implement `Surface` for
//! whatever backend they use; drawing saves and restores the surface's color
//! (and stroke, for segments) around each call.

use crate::dimension::{Dimension, GeomObject};
use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::segment::Segment;

/// Minimal immediate-mode drawing context on integer pixel coordinates.
pub trait Surface {
    type Color: Clone;

    fn color(&self) -> Self::Color;
    fn set_color(&mut self, color: Self::Color);
    fn stroke_width(&self) -> u32;
    fn set_stroke_width(&mut self, width: u32);
    /// Filled ellipse inscribed in the `w × h` box with top-left corner `(x, y)`.
    fn fill_oval(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}

fn ensure_planar(obj: &dyn GeomObject, what: &str) -> Result<()> {
    let d = obj.dimension();
    if d != Dimension::TWO {
        return Err(GeomError::invalid_state(format!("{what} is {d}, not 2D")));
    }
    Ok(())
}

/// Pixel coordinates of a 2D point (truncation toward zero).
#[inline]
fn pixel(p: &Point) -> (i32, i32) {
    let c = p.as_slice();
    (c[0] as i32, c[1] as i32)
}

impl Point {
    /// Dot of diameter `size` pixels centered on the point.
    pub fn draw_2d<S: Surface>(&self, g: &mut S, color: S::Color, size: i32) -> Result<bool> {
        ensure_planar(self, "point")?;
        let (x, y) = pixel(self);
        let saved = g.color();
        g.set_color(color);
        let r = size / 2;
        g.fill_oval(x.saturating_sub(r), y.saturating_sub(r), size, size);
        g.set_color(saved);
        Ok(true)
    }
}

impl Segment {
    /// Straight line between the endpoints with the given stroke width.
    pub fn draw_2d<S: Surface>(&self, g: &mut S, color: S::Color, thickness: u32) -> Result<bool> {
        ensure_planar(self, "segment")?;
        let (x1, y1) = pixel(self.from());
        let (x2, y2) = pixel(self.to());
        let saved_color = g.color();
        let saved_stroke = g.stroke_width();
        g.set_color(color);
        g.set_stroke_width(thickness);
        g.draw_line(x1, y1, x2, y2);
        g.set_stroke_width(saved_stroke);
        g.set_color(saved_color);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Oval(i32, i32, i32, i32, &'static str),
        Line(i32, i32, i32, i32, &'static str, u32),
    }

    struct Recorder {
        color: &'static str,
        stroke: u32,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                color: "black",
                stroke: 1,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        type Color = &'static str;
        fn color(&self) -> &'static str {
            self.color
        }
        fn set_color(&mut self, color: &'static str) {
            self.color = color;
        }
        fn stroke_width(&self) -> u32 {
            self.stroke
        }
        fn set_stroke_width(&mut self, width: u32) {
            self.stroke = width;
        }
        fn fill_oval(&mut self, x: i32, y: i32, w: i32, h: i32) {
            self.ops.push(Op::Oval(x, y, w, h, self.color));
        }
        fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
            self.ops.push(Op::Line(x1, y1, x2, y2, self.color, self.stroke));
        }
    }

    #[test]
    fn point_is_centered_and_color_restored() {
        let mut g = Recorder::new();
        let p = Point::new([10.7, 20.2]).unwrap();
        assert_eq!(p.draw_2d(&mut g, "red", 4), Ok(true));
        assert_eq!(g.ops, vec![Op::Oval(8, 18, 4, 4, "red")]);
        assert_eq!(g.color, "black");
    }

    #[test]
    fn far_points_clamp_to_pixel_range() {
        let mut g = Recorder::new();
        let left = Point::new([-1e12, 0.0]).unwrap();
        let corner = Point::new([1e12, 1e12]).unwrap();
        assert_eq!(left.draw_2d(&mut g, "red", 4), Ok(true));
        assert_eq!(corner.draw_2d(&mut g, "red", -4), Ok(true));
        assert_eq!(
            g.ops,
            vec![
                Op::Oval(i32::MIN, -2, 4, 4, "red"),
                Op::Oval(i32::MAX, i32::MAX, -4, -4, "red"),
            ]
        );
    }

    #[test]
    fn segment_uses_stroke_then_restores_it() {
        let mut g = Recorder::new();
        let s = Segment::from_coords(&[0.0, 0.0, 5.9, 3.0]).unwrap();
        assert_eq!(s.draw_2d(&mut g, "blue", 3), Ok(true));
        assert_eq!(g.ops, vec![Op::Line(0, 0, 5, 3, "blue", 3)]);
        assert_eq!((g.color, g.stroke), ("black", 1));
    }

    #[test]
    fn drawing_needs_two_dimensions() {
        let mut g = Recorder::new();
        let p = Point::new([1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            p.draw_2d(&mut g, "red", 2),
            Err(GeomError::InvalidState { .. })
        ));
        let s = Segment::from_coords(&[0.0, 1.0]).unwrap();
        assert!(matches!(
            s.draw_2d(&mut g, "red", 2),
            Err(GeomError::InvalidState { .. })
        ));
        assert!(g.ops.is_empty());
    }
}
