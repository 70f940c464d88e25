//! Traffic alert records from the live feed.

use crate::Location;
use serde::{Deserialize, Serialize};

/// Placeholder used when the feed omits the road label.
pub const UNKNOWN_STREET: &str = "Unknown road";

/// Alert category as reported by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Accident,
    Jam,
    Hazard,
    RoadClosed,
    Police,
    /// Any category this build does not recognize.
    #[serde(other)]
    Other,
}

impl AlertKind {
    /// Only accidents are forwarded.
    #[inline]
    pub fn is_actionable(self) -> bool {
        self == AlertKind::Accident
    }
}

/// One incident record from the upstream feed.
///
/// The feed owns the full lifecycle; this system only ever reads alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Opaque identifier, unique per incident.
    pub uuid: String,
    /// Feed category.
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Free-text road label; may be absent or empty.
    #[serde(default)]
    pub street: Option<String>,
    /// Incident coordinates.
    pub location: Location,
}

impl Alert {
    /// Road label with the feed's absent/empty cases collapsed to a placeholder.
    pub fn street_label(&self) -> &str {
        match self.street.as_deref() {
            Some(street) if !street.trim().is_empty() => street,
            _ => UNKNOWN_STREET,
        }
    }

    /// Check whether this alert is an accident.
    #[inline]
    pub fn is_accident(&self) -> bool {
        self.kind.is_actionable()
    }
}
