//! Configurable road segment fixture.

use std::collections::HashMap;

use edgecost_core::RegionTable;
use edgecost_profile::Road;

use crate::region::MockRegion;

/// A road with explicit type codes, point codes, bearings, and a
/// roundabout flag.
#[derive(Debug, Clone)]
pub struct MockRoad {
    region: MockRegion,
    types: Vec<u32>,
    point_types: HashMap<usize, Vec<u32>>,
    roundabout: bool,
    bearings: HashMap<(usize, bool), f64>,
}

impl MockRoad {
    /// Creates a road with no codes in `region`.
    pub fn new(region: MockRegion) -> Self {
        MockRoad {
            region,
            types: Vec::new(),
            point_types: HashMap::new(),
            roundabout: false,
            bearings: HashMap::new(),
        }
    }

    /// Sets the way-level local type codes.
    pub fn with_types(mut self, types: &[u32]) -> Self {
        self.types = types.to_vec();
        self
    }

    /// Attaches local type codes to a geometry point.
    pub fn with_point_types(mut self, point: usize, types: &[u32]) -> Self {
        self.point_types.insert(point, types.to_vec());
        self
    }

    /// Flags the road as part of a roundabout.
    pub fn with_roundabout(mut self) -> Self {
        self.roundabout = true;
        self
    }

    /// Sets the bearing reported at `(point, forward)`; unset bearings
    /// report 0.
    pub fn with_bearing(mut self, point: usize, forward: bool, bearing: f64) -> Self {
        self.bearings.insert((point, forward), bearing);
        self
    }
}

impl Road for MockRoad {
    fn region(&self) -> &dyn RegionTable {
        &self.region
    }

    fn type_codes(&self) -> &[u32] {
        &self.types
    }

    fn point_type_codes(&self, point: usize) -> Option<&[u32]> {
        self.point_types.get(&point).map(Vec::as_slice)
    }

    fn is_roundabout(&self) -> bool {
        self.roundabout
    }

    fn bearing(&self, point: usize, forward: bool) -> f64 {
        self.bearings.get(&(point, forward)).copied().unwrap_or(0.0)
    }
}
