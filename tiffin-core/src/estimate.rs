//! Convert straight-line distances into quoted delivery times.

/// Delivery-time model: a configurable average speed plus a fixed
/// hand-off buffer.
///
/// Defaults assume a conservative urban two-wheeler average of 20 km/h
/// with a 5 minute buffer absorbing parking and hand-off delay. Both
/// values are configuration so vehicle-type-specific tuning does not
/// require code changes.
///
/// # Examples
/// ```
/// use tiffin_core::DeliveryEstimator;
///
/// let estimator = DeliveryEstimator::default();
/// // 0.6 km at 20 km/h rounds up to 2 minutes, plus the buffer.
/// assert_eq!(estimator.estimate_minutes(0.6), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryEstimator {
    /// Average travel speed in kilometres per hour.
    pub speed_kmh: f64,
    /// Fixed buffer added to every estimate, in minutes.
    pub buffer_minutes: u32,
}

impl Default for DeliveryEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: 20.0,
            buffer_minutes: 5,
        }
    }
}

impl DeliveryEstimator {
    /// Construct an estimator with explicit speed and buffer.
    #[must_use]
    pub const fn new(speed_kmh: f64, buffer_minutes: u32) -> Self {
        Self {
            speed_kmh,
            buffer_minutes,
        }
    }

    /// Estimate a delivery time in whole minutes for `distance_km`.
    ///
    /// The raw travel time is rounded up before the buffer is added so
    /// quoted ETAs never under-promise due to rounding. A zero distance
    /// still incurs the buffer.
    ///
    /// Precondition: `distance_km >= 0`. A negative distance is a caller
    /// bug, not an estimator responsibility.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "travel time is a bounded non-negative float rounded up to whole minutes"
    )]
    pub fn estimate_minutes(&self, distance_km: f64) -> u32 {
        let travel_minutes = (distance_km / self.speed_kmh * 60.0).ceil();
        travel_minutes as u32 + self.buffer_minutes
    }
}
