// crates/riskglobe-core/src/projection/path.rs

//! # SVG Path Generation
//!
//! Turns country outlines into SVG `d` attributes for the current
//! orthographic view. Rings are clipped against the horizon: where an outline
//! dips behind the globe it is cut at the great-circle crossing and the gap is
//! closed along the limb, so shapes never leak onto the visible disc.

use super::orthographic::{Orthographic, ViewVector};
use crate::common::ScreenPoint;
use crate::model::{GeoPoint, Geometry, Ring};
use std::f64::consts::PI;
use std::fmt::Write;

/// Maximum angular step (radians) used when walking along the limb.
const LIMB_STEP: f64 = PI / 36.0;

/// Builds the `d` attribute for `geometry`. Returns an empty string when
/// nothing is visible.
pub fn geo_path(projection: &Orthographic, geometry: &Geometry) -> String {
    let mut d = PathData::default();
    for ring in geometry.rings() {
        let clipped = clip_ring(projection, ring);
        if clipped.len() < 3 {
            continue;
        }
        let mut points = clipped.into_iter().map(|v| projection.view_to_screen(v));
        if let Some(first) = points.next() {
            d.move_to(first);
            points.for_each(|p| d.line_to(p));
            d.close();
        }
    }
    d.finish()
}

/// Clips one ring to the visible hemisphere, in view-frame coordinates.
fn clip_ring(projection: &Orthographic, ring: &Ring) -> Vec<ViewVector> {
    let pts: Vec<ViewVector> = open_ring(ring)
        .iter()
        .map(|p| projection.to_view(*p))
        .collect();

    let n = pts.len();
    if n == 0 {
        return Vec::new();
    }
    let visible = pts.iter().filter(|v| Orthographic::is_visible(**v)).count();
    if visible == n {
        return pts;
    }
    if visible == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n + 16);
    let mut pending_exit: Option<ViewVector> = None;
    let mut first_entry: Option<ViewVector> = None;

    for i in 0..n {
        let prev = pts[(i + n - 1) % n];
        let cur = pts[i];
        let prev_in = Orthographic::is_visible(prev);
        let cur_in = Orthographic::is_visible(cur);

        if cur_in {
            if !prev_in {
                let entry = horizon_crossing(prev, cur);
                match pending_exit.take() {
                    Some(exit) => push_limb_arc(&mut out, exit, entry),
                    None => first_entry = Some(entry),
                }
                out.push(entry);
            }
            out.push(cur);
        } else if prev_in {
            let exit = horizon_crossing(prev, cur);
            out.push(exit);
            pending_exit = Some(exit);
        }
    }

    // The ring started behind the globe: close the last exit back to the
    // first entry.
    if let (Some(exit), Some(entry)) = (pending_exit, first_entry) {
        push_limb_arc(&mut out, exit, entry);
    }

    out
}

/// Drops the repeated closing vertex, if any.
fn open_ring(ring: &Ring) -> &[GeoPoint] {
    match ring.as_slice() {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ring[..ring.len() - 1],
        all => all,
    }
}

/// Where the great circle from `a` (one side) to `b` (other side) meets the
/// horizon plane `x = 0`.
fn horizon_crossing(a: ViewVector, b: ViewVector) -> ViewVector {
    let t = a[0] / (a[0] - b[0]);
    let y = a[1] + t * (b[1] - a[1]);
    let z = a[2] + t * (b[2] - a[2]);
    let norm = (y * y + z * z).sqrt();
    if norm > 1e-12 {
        [0.0, y / norm, z / norm]
    } else {
        // Antipodal endpoints: any limb point is on the connecting circle.
        let n = (a[1] * a[1] + a[2] * a[2]).sqrt().max(1e-12);
        [0.0, a[1] / n, a[2] / n]
    }
}

/// Appends limb points strictly between `from` and `to`, along the shorter
/// arc.
fn push_limb_arc(out: &mut Vec<ViewVector>, from: ViewVector, to: ViewVector) {
    let start = from[2].atan2(from[1]);
    let end = to[2].atan2(to[1]);
    let mut delta = end - start;
    if delta > PI {
        delta -= 2.0 * PI;
    } else if delta < -PI {
        delta += 2.0 * PI;
    }

    let steps = (delta.abs() / LIMB_STEP).ceil() as usize;
    for k in 1..steps {
        let theta = start + delta * k as f64 / steps as f64;
        out.push([0.0, theta.cos(), theta.sin()]);
    }
}

/// Minimal SVG path writer (`M x,y L x,y ... Z`).
#[derive(Debug, Default)]
struct PathData {
    buf: String,
}

impl PathData {
    fn move_to(&mut self, p: ScreenPoint) {
        self.push('M', p);
    }

    fn line_to(&mut self, p: ScreenPoint) {
        self.push('L', p);
    }

    fn close(&mut self) {
        self.buf.push('Z');
    }

    fn push(&mut self, cmd: char, p: ScreenPoint) {
        self.buf.push(cmd);
        // Writing to a String cannot fail.
        let _ = write!(self.buf, "{},{}", fmt_coord(p.x), fmt_coord(p.y));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Three decimals, trailing zeros trimmed, no negative zero.
fn fmt_coord(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lon: f64, lat: f64, size: f64) -> Geometry {
        Geometry::Polygon(vec![vec![
            GeoPoint::new(lon, lat),
            GeoPoint::new(lon + size, lat),
            GeoPoint::new(lon + size, lat + size),
            GeoPoint::new(lon, lat + size),
            GeoPoint::new(lon, lat),
        ]])
    }

    fn front() -> Orthographic {
        Orthographic::new(100.0, (0.0, 0.0), (0.0, 0.0))
    }

    #[test]
    fn coordinates_are_trimmed() {
        assert_eq!(fmt_coord(1.5), "1.5");
        assert_eq!(fmt_coord(2.0), "2");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(3.14159), "3.142");
    }

    #[test]
    fn visible_polygon_is_a_closed_path() {
        let d = geo_path(&front(), &square(-5.0, -5.0, 10.0));
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        // Closing vertex dropped: one move plus three lines.
        assert_eq!(d.matches('L').count(), 3);
    }

    #[test]
    fn hidden_polygon_produces_nothing() {
        assert_eq!(geo_path(&front(), &square(170.0, -5.0, 5.0)), "");
    }

    #[test]
    fn straddling_polygon_is_clipped_to_the_disc() {
        let projection = front();
        let d = geo_path(&projection, &square(60.0, -20.0, 60.0));
        assert!(!d.is_empty());

        let ring = match &square(60.0, -20.0, 60.0) {
            Geometry::Polygon(rings) => rings[0].clone(),
            _ => unreachable!(),
        };
        let clipped = clip_ring(&projection, &ring);
        for v in &clipped {
            assert!(v[0] >= 0.0);
            let p = projection.view_to_screen(*v);
            assert!(p.x * p.x + p.y * p.y <= 100.0 * 100.0 + 1e-6);
        }
        // Two limb crossings plus at least one arc point between them.
        assert!(clipped.iter().filter(|v| v[0] == 0.0).count() >= 3);
    }

    #[test]
    fn multipolygons_emit_one_subpath_per_ring() {
        let g = Geometry::MultiPolygon(vec![
            match square(0.0, 0.0, 5.0) {
                Geometry::Polygon(r) => r,
                _ => unreachable!(),
            },
            match square(20.0, 20.0, 5.0) {
                Geometry::Polygon(r) => r,
                _ => unreachable!(),
            },
        ]);
        let d = geo_path(&front(), &g);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }
}
