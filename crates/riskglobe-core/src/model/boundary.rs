// crates/riskglobe-core/src/model/boundary.rs
use crate::normalize::normalize_code;
use crate::traits::NameMatch;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A closed linear ring. The closing vertex may or may not be repeated.
pub type Ring = Vec<GeoPoint>;

/// Country outline. Only areal geometries are kept; the first ring of each
/// polygon is the exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Every ring of every polygon, in document order.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter()),
            Geometry::MultiPolygon(polys) => Box::new(polys.iter().flatten()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}

/// One country boundary from the boundary document.
///
/// `iso_a2` is the raw dataset code, which may be the `"-99"` sentinel; use
/// [`BoundaryFeature::code`] for joins.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub iso_a2: String,
    pub name: String,
    pub geometry: Option<Geometry>,
}

impl BoundaryFeature {
    pub fn new(iso_a2: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            iso_a2: iso_a2.into(),
            name: name.into(),
            geometry: Some(geometry),
        }
    }

    /// The join code, with the upstream sentinel patched where known.
    pub fn code(&self) -> &str {
        normalize_code(&self.iso_a2, &self.name)
    }
}

impl NameMatch for BoundaryFeature {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The immutable set of country outlines, loaded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundaries {
    pub features: Vec<BoundaryFeature>,
}

impl Boundaries {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn find_by_code(&self, code: &str) -> Option<&BoundaryFeature> {
        self.features
            .iter()
            .find(|f| f.code().eq_ignore_ascii_case(code))
    }

    /// Exact (folded) name match first, then the first substring match.
    pub fn find_by_name(&self, name: &str) -> Option<&BoundaryFeature> {
        self.features
            .iter()
            .find(|f| f.is_named(name))
            .or_else(|| self.features.iter().find(|f| f.name_contains(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lon: f64, lat: f64) -> Geometry {
        Geometry::Polygon(vec![vec![
            GeoPoint::new(lon, lat),
            GeoPoint::new(lon + 1.0, lat),
            GeoPoint::new(lon + 1.0, lat + 1.0),
            GeoPoint::new(lon, lat + 1.0),
        ]])
    }

    #[test]
    fn join_code_is_normalized() {
        let france = BoundaryFeature::new("-99", "France", square(2.0, 46.0));
        assert_eq!(france.iso_a2, "-99");
        assert_eq!(france.code(), "FR");
    }

    #[test]
    fn lookup_by_code_and_name() {
        let b = Boundaries::new(vec![
            BoundaryFeature::new("US", "United States", square(-100.0, 40.0)),
            BoundaryFeature::new("-99", "Norway", square(10.0, 60.0)),
        ]);
        assert_eq!(b.find_by_code("no").unwrap().name, "Norway");
        assert_eq!(b.find_by_name("united states").unwrap().code(), "US");
        assert_eq!(b.find_by_name("states").unwrap().code(), "US");
        assert!(b.find_by_name("Atlantis").is_none());
    }

    #[test]
    fn multipolygon_rings_are_flattened() {
        let g = Geometry::MultiPolygon(vec![
            vec![vec![GeoPoint::new(0.0, 0.0); 4]],
            vec![vec![GeoPoint::new(1.0, 1.0); 3], vec![GeoPoint::new(1.5, 1.5); 3]],
        ]);
        assert_eq!(g.rings().count(), 3);
        assert_eq!(g.vertex_count(), 10);
    }
}
