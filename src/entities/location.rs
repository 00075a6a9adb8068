use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Used whenever the device position cannot be obtained.
    pub const FALLBACK: Coordinates = Coordinates {
        latitude: 21.8267,
        longitude: 90.1234,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[test]
fn coordinates_validity() {
    assert!(Coordinates::FALLBACK.is_valid());
    assert!(!Coordinates::new(91.0, 0.0).is_valid());
    assert!(!Coordinates::new(0.0, -180.5).is_valid());
}
