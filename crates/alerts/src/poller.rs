//! The fetch-filter-notify pass.

use crate::{format_accident_message, Notifier, SeenSet};
use roadwatch_feed::{AlertSource, FeedError};
use tracing::{debug, error, info};

/// Counters for one completed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Alerts returned by the feed.
    pub fetched: usize,
    /// Alerts that were accidents.
    pub accidents: usize,
    /// Messages actually delivered.
    pub notified: usize,
}

/// Polling context: the feed, the gateway, and the seen-set, built once
/// at startup and owned by the single poll task.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    seen: SeenSet,
}

impl<S: AlertSource, N: Notifier> Poller<S, N> {
    /// Create a poller with an empty seen-set.
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            seen: SeenSet::new(),
        }
    }

    /// Identifiers notified so far.
    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Run one pass.
    ///
    /// A fetch or parse failure aborts the pass with the seen-set
    /// untouched and nothing sent. A delivery failure is logged per
    /// alert and the remaining alerts in the pass are still processed;
    /// the id stays recorded either way, so a failed send is not
    /// retried on later ticks.
    pub async fn tick(&mut self) -> Result<TickStats, FeedError> {
        let alerts = self.source.fetch_alerts().await?;

        let mut stats = TickStats {
            fetched: alerts.len(),
            ..TickStats::default()
        };

        for alert in &alerts {
            if !alert.is_accident() {
                debug!(uuid = %alert.uuid, kind = ?alert.kind, "Skipping alert: not an accident");
                continue;
            }
            stats.accidents += 1;

            if !self.seen.mark_seen(&alert.uuid) {
                debug!(uuid = %alert.uuid, "Skipping alert: already notified");
                continue;
            }

            let message = format_accident_message(alert);
            match self.notifier.send(&message).await {
                Ok(()) => {
                    info!(uuid = %alert.uuid, street = alert.street_label(), "Alert sent");
                    stats.notified += 1;
                }
                Err(e) => {
                    error!(uuid = %alert.uuid, error = %e, "Failed to send alert");
                }
            }
        }

        Ok(stats)
    }
}
