//! Rider snapshot types.

use geo::Coord;

/// Availability state of a rider at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderStatus {
    /// Idle and eligible for assignment.
    Available,
    /// Currently carrying an order.
    Busy,
    /// Not working; never considered for assignment.
    Offline,
}

/// Immutable snapshot of a delivery rider.
///
/// The location is whatever the store last recorded; rider movement may
/// race with a dispatch read and that staleness is accepted. Coordinates
/// are WGS84 with `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Last known position.
    pub location: Coord<f64>,
    /// Availability at snapshot time.
    pub status: RiderStatus,
    /// Contact phone number handed to the customer on assignment.
    pub phone: String,
}

impl Rider {
    /// Construct a rider snapshot.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: Coord<f64>,
        status: RiderStatus,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            status,
            phone: phone.into(),
        }
    }

    /// Whether the rider can take a new assignment.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, RiderStatus::Available)
    }
}
