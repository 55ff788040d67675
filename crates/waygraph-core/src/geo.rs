//! Geographic coordinate type and the geodesic distance function.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Edge weights
//! are reported rounded to centimetres, and a threshold rule must be able to
//! tell 150.00 m from 150.01 m — `f32` haversine error (metres at city scale)
//! would blur that boundary.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when both components are finite and within WGS-84 bounds
    /// (latitude ±90°, longitude ±180°).
    pub fn in_bounds(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and zero (up to fp epsilon) for coincident points.  The
    /// intermediate `a` is clamped to `[0, 1]`: floating-point error can push
    /// it slightly outside for antipodal or coincident points, and the
    /// `sqrt(1 - a)` term must never go negative.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = ((d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2))
        .clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Round a distance in metres to two decimal places (centimetre precision),
/// the resolution edge weights are persisted at.
#[inline]
pub fn round_cm(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}
