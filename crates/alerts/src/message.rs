//! Alert message formatting.

use roadwatch_core::Alert;

/// Format an accident alert for delivery.
pub fn format_accident_message(alert: &Alert) -> String {
    let mut msg = format!(
        "🚨 Accident Alert\n\
         🛣 Road: {}\n\
         🧭 {}",
        alert.street_label(),
        alert.location.map_link()
    );

    let now = chrono::Utc::now();
    msg.push_str(&format!("\n\n⏰ {}", now.format("%Y-%m-%d %H:%M:%S UTC")));

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadwatch_core::{AlertKind, Location};

    fn accident(street: Option<&str>) -> Alert {
        Alert {
            uuid: "abc123".to_string(),
            kind: AlertKind::Accident,
            street: street.map(str::to_string),
            location: Location::new(1.35, 103.82),
        }
    }

    #[test]
    fn test_message_carries_street_and_link() {
        let msg = format_accident_message(&accident(Some("Orchard Road")));
        assert!(msg.contains("Accident Alert"));
        assert!(msg.contains("Orchard Road"));
        assert!(msg.contains("https://waze.com/ul?ll=1.35,103.82&navigate=yes"));
    }

    #[test]
    fn test_message_uses_placeholder_without_street() {
        let msg = format_accident_message(&accident(None));
        assert!(msg.contains("Unknown road"));
    }

    #[test]
    fn test_message_ends_with_timestamp_line() {
        let msg = format_accident_message(&accident(Some("Orchard Road")));
        assert!(msg.lines().last().unwrap().starts_with("⏰ "));
        assert!(msg.ends_with("UTC"));
    }
}
