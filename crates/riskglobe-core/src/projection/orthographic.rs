// crates/riskglobe-core/src/projection/orthographic.rs
use crate::common::ScreenPoint;
use crate::model::GeoPoint;
use crate::traits::Projection;

/// A unit vector in the rotated (view) frame: `x` points at the viewer,
/// `y` right, `z` up. Only `x > 0` is on the visible hemisphere.
pub type ViewVector = [f64; 3];

/// Orthographic projection of the unit sphere, viewed from infinity.
///
/// Rotation follows the usual `(lambda, phi)` convention: longitudes are
/// first shifted by `lambda`, then the sphere is tilted by `phi` about the
/// horizontal axis. With rotation `(0, -30)` the point at 30°N, 0°E sits in
/// the centre of the disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub scale: f64,
    /// `(lambda, phi)` in degrees.
    pub rotation: (f64, f64),
    /// Screen position of the disc centre.
    pub translation: (f64, f64),
}

impl Orthographic {
    pub fn new(scale: f64, rotation: (f64, f64), translation: (f64, f64)) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    /// Rotates a geographic point into the view frame.
    pub fn to_view(&self, p: GeoPoint) -> ViewVector {
        let lambda = (p.lon + self.rotation.0).to_radians();
        let phi = p.lat.to_radians();
        let (sin_dphi, cos_dphi) = self.rotation.1.to_radians().sin_cos();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();

        [x * cos_dphi - z * sin_dphi, y, z * cos_dphi + x * sin_dphi]
    }

    /// Maps a view-frame vector onto the screen. Hidden points are mapped
    /// too (they land inside the disc); callers clip first.
    pub fn view_to_screen(&self, v: ViewVector) -> ScreenPoint {
        ScreenPoint::new(
            self.translation.0 + self.scale * v[1],
            self.translation.1 - self.scale * v[2],
        )
    }

    pub fn is_visible(v: ViewVector) -> bool {
        v[0] > 0.0
    }
}

impl Projection for Orthographic {
    fn project(&self, lon: f64, lat: f64) -> Option<ScreenPoint> {
        let v = self.to_view(GeoPoint::new(lon, lat));
        Self::is_visible(v).then(|| self.view_to_screen(v))
    }
}
