//! The seam between the polling pipeline and a concrete feed.

use crate::FeedError;
use async_trait::async_trait;
use roadwatch_core::Alert;

/// Source of live alerts.
///
/// One call returns the full current snapshot for the configured area;
/// the feed owns alert lifecycle, so repeated calls may return the same
/// incidents until the feed drops them.
#[async_trait]
pub trait AlertSource: Send + Sync {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, FeedError>;
}
