//! Incident coordinates and map links.

use serde::{Deserialize, Serialize};

/// Coordinates as reported by the feed.
/// Feed convention: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Create a location from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            x: longitude,
            y: latitude,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.x
    }

    /// Navigation deep link for these coordinates, latitude first.
    pub fn map_link(&self) -> String {
        format!(
            "https://waze.com/ul?ll={},{}&navigate=yes",
            self.y, self.x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_axes_follow_feed_convention() {
        let loc = Location::new(1.35, 103.82);
        assert_eq!(loc.latitude(), 1.35);
        assert_eq!(loc.longitude(), 103.82);
        assert_eq!(loc.y, 1.35);
        assert_eq!(loc.x, 103.82);
    }

    #[test]
    fn test_map_link_is_latitude_first() {
        let loc = Location::new(1.35, 103.82);
        assert_eq!(
            loc.map_link(),
            "https://waze.com/ul?ll=1.35,103.82&navigate=yes"
        );
    }

    #[test]
    fn test_location_deserializes_from_feed_shape() {
        let loc: Location = serde_json::from_str(r#"{"x":103.82,"y":1.35}"#).unwrap();
        assert_eq!(loc.latitude(), 1.35);
        assert_eq!(loc.longitude(), 103.82);
    }
}
