//! Great-circle distance and bounding-box estimation.
//!
//! Coordinates are WGS84 `geo::Coord<f64>` values with `x = longitude`
//! and `y = latitude`, both in degrees. Distances are straight-line
//! haversine estimates; road networks are deliberately not modelled.
//!
//! The functions are pure and deterministic. They do not validate
//! coordinate ranges: callers validate before invoking, and NaN inputs
//! propagate to NaN outputs rather than being silently corrected.

use geo::{Coord, Rect};

/// Mean Earth radius in kilometres used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate kilometres per degree of latitude, used by
/// [`bounding_box`].
const KM_PER_DEGREE: f64 = 111.0;

/// Haversine distance in kilometres between two WGS84 coordinates.
///
/// Accuracy is within 0.5% of the true great-circle distance for
/// in-range inputs.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::geo::distance_km;
///
/// let mumbai_csmt = Coord { x: 72.8777, y: 19.0760 };
/// let distance = distance_km(mumbai_csmt, mumbai_csmt);
/// assert_eq!(distance, 0.0);
/// ```
#[must_use]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    distance_km_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Haversine distance with an explicit sphere radius.
///
/// [`distance_km`] fixes the radius to [`EARTH_RADIUS_KM`]; this variant
/// exists so the constant is a tunable parameter rather than a buried
/// literal.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is floating-point trigonometry"
)]
pub fn distance_km_with_radius(a: Coord<f64>, b: Coord<f64>, radius_km: f64) -> f64 {
    let (lat1, lon1) = (a.y.to_radians(), a.x.to_radians());
    let (lat2, lon2) = (b.y.to_radians(), b.x.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    radius_km * c
}

/// Axis-aligned lon/lat envelope around `center` covering `radius_km`.
///
/// The envelope uses a flat degrees-per-kilometre approximation and is
/// advisory only: it over- or under-covers away from the equator, so
/// callers pre-filtering with it must still confirm candidates with
/// [`distance_km`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "envelope sizing is a floating-point degree conversion"
)]
pub fn bounding_box(center: Coord<f64>, radius_km: f64) -> Rect<f64> {
    let radius_deg = radius_km / KM_PER_DEGREE;
    Rect::new(
        Coord {
            x: center.x - radius_deg,
            y: center.y - radius_deg,
        },
        Coord {
            x: center.x + radius_deg,
            y: center.y + radius_deg,
        },
    )
}
