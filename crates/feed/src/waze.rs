//! Waze TGeoRSS feed client.

use crate::{AlertSource, FeedError};
use async_trait::async_trait;
use roadwatch_core::Alert;
use std::time::Duration;
use tracing::debug;

/// Public TGeoRSS endpoint serving live alerts.
pub const DEFAULT_FEED_URL: &str = "https://www.waze.com/row-rtserver/web/TGeoRSS";

/// Feed query configuration.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Endpoint to query.
    pub endpoint: String,
    /// Latitude of the search center.
    pub latitude: f64,
    /// Longitude of the search center.
    pub longitude: f64,
    /// Search radius around the center.
    pub radius: u32,
    /// Request timeout for one fetch.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FEED_URL.to_string(),
            latitude: 1.35,
            longitude: 103.82,
            radius: 20,
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the Waze alert feed.
pub struct WazeFeed {
    config: FeedConfig,
    client: reqwest::Client,
}

impl WazeFeed {
    /// Create a feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Get the feed config.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

#[async_trait]
impl AlertSource for WazeFeed {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, FeedError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("tk", "community")])
            .query(&[
                ("lat", self.config.latitude),
                ("lon", self.config.longitude),
            ])
            .query(&[("radius", self.config.radius)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let body = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;
        Ok(parse_alerts(&payload))
    }
}

/// Extract alerts from a feed snapshot.
///
/// A snapshot without an `alerts` array is an empty result, not an error.
/// Individual records that fail to parse are skipped so one malformed
/// entry cannot drop the rest of the snapshot.
fn parse_alerts(payload: &serde_json::Value) -> Vec<Alert> {
    let records = match payload["alerts"].as_array() {
        Some(records) => records,
        None => return Vec::new(),
    };

    let mut alerts = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<Alert>(record.clone()) {
            Ok(alert) => alerts.push(alert),
            Err(e) => {
                debug!("Skipping malformed alert record: {}", e);
            }
        }
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadwatch_core::AlertKind;

    const SNAPSHOT: &str = r#"{
        "alerts": [
            {
                "uuid": "abc123",
                "type": "ACCIDENT",
                "street": "Orchard Road",
                "location": {"x": 103.82, "y": 1.35}
            },
            {
                "uuid": "def456",
                "type": "JAM",
                "location": {"x": 103.85, "y": 1.29}
            },
            {
                "uuid": "ghi789",
                "type": "ACCIDENT",
                "location": {"x": 103.77, "y": 1.31}
            }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let payload: serde_json::Value = serde_json::from_str(SNAPSHOT).unwrap();
        let alerts = parse_alerts(&payload);

        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].uuid, "abc123");
        assert_eq!(alerts[0].kind, AlertKind::Accident);
        assert_eq!(alerts[0].street_label(), "Orchard Road");
        assert_eq!(alerts[1].kind, AlertKind::Jam);
        assert_eq!(alerts[2].street_label(), "Unknown road");
    }

    #[test]
    fn test_missing_alerts_key_is_empty() {
        let payload: serde_json::Value = serde_json::from_str(r#"{"users": []}"#).unwrap();
        assert!(parse_alerts(&payload).is_empty());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let payload: serde_json::Value = serde_json::from_str(
            r#"{
                "alerts": [
                    {"uuid": "ok1", "type": "ACCIDENT", "location": {"x": 1.0, "y": 2.0}},
                    {"type": "ACCIDENT"},
                    {"uuid": "ok2", "type": "HAZARD", "location": {"x": 3.0, "y": 4.0}}
                ]
            }"#,
        )
        .unwrap();

        let alerts = parse_alerts(&payload);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].uuid, "ok1");
        assert_eq!(alerts[1].uuid, "ok2");
    }

    #[test]
    fn test_unknown_kind_survives_parsing() {
        let payload: serde_json::Value = serde_json::from_str(
            r#"{"alerts": [{"uuid": "x", "type": "WEATHERHAZARD", "location": {"x": 0.0, "y": 0.0}}]}"#,
        )
        .unwrap();

        let alerts = parse_alerts(&payload);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Other);
    }

    #[test]
    fn test_feed_config_default() {
        let config = FeedConfig::default();
        assert_eq!(config.endpoint, DEFAULT_FEED_URL);
        assert_eq!(config.radius, 20);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
