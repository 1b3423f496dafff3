use crate::domain::{EntitySet, GeoPoint};
use ordered_float::OrderedFloat;

/// Mean earth radius in miles. For kilometers this would be 6372.8, which
/// would change the unit of every distance in the crate.
const EARTH_RADIUS_MILES: f64 = 3959.87433;

/// Great-circle distance between two points in miles, using the haversine
/// formula. Symmetric in its arguments and zero for identical points.
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// One entry of the ranked cross join: an entity from each set and the
/// great-circle distance between them, in miles.
#[derive(Clone, Debug, PartialEq)]
pub struct DistancePair {
    pub entity1: String,
    pub entity2: String,
    pub distance: f64,
}

/// Pairs every entity of one set with every entity of the other and ranks
/// the pairs by distance. Holds the most recent result; recomputing replaces
/// it wholesale.
#[derive(Debug, Default)]
pub struct ProximityCalculator {
    distances: Vec<DistancePair>,
}

impl ProximityCalculator {
    pub fn new() -> Self {
        ProximityCalculator::default()
    }

    /// Computes the full cross join of `set_a` and `set_b` and sorts it
    /// ascending by distance. The sort is stable, so pairs at exactly equal
    /// distance keep their emission order (set_a outer, set_b inner, both in
    /// insertion order). An empty input set yields an empty result.
    pub fn compute(&mut self, set_a: &EntitySet, set_b: &EntitySet) -> &[DistancePair] {
        let mut pairs = Vec::with_capacity(set_a.len() * set_b.len());
        for a in set_a.iter() {
            for b in set_b.iter() {
                pairs.push(DistancePair {
                    entity1: a.identifier().to_string(),
                    entity2: b.identifier().to_string(),
                    distance: haversine(a.coordinates(), b.coordinates()),
                });
            }
        }
        pairs.sort_by_key(|pair| OrderedFloat(pair.distance));

        self.distances = pairs;
        &self.distances
    }

    /// The ranked result of the last `compute` call, empty before the first.
    pub fn distances(&self) -> &[DistancePair] {
        &self.distances
    }
}
