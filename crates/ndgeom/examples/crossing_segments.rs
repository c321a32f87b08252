//! Pairwise intersection verdicts for a small fan of segments.
//!
//! Shows the difference between the exact bounding-box check and the legacy
//! one on segments that only touch at an endpoint.

use ndgeom::{IntersectCfg, Segment};

fn main() {
    let fan = [
        [0.0, 0.0, 2.0, 2.0],
        [0.0, 2.0, 2.0, 0.0],
        [0.0, 0.0, 1.0, 3.0],
        [2.0, 0.0, 1.0, 3.0],
        [3.0, 3.0, 4.0, 4.0],
    ]
    .map(|c| Segment::from_coords(&c).expect("2D segment"));

    for (i, a) in fan.iter().enumerate() {
        for (j, b) in fan.iter().enumerate().skip(i + 1) {
            let exact = a.intersects(b).expect("planar");
            let legacy = a
                .intersects_with(b, IntersectCfg::legacy())
                .expect("planar");
            let note = if exact != legacy { "  <- modes differ" } else { "" };
            println!("{i}-{j}: exact={exact} legacy={legacy}{note}");
        }
    }
}
