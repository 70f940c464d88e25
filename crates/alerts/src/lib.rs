//! Accident notification pipeline.
//!
//! This crate provides:
//! - In-memory deduplication of already-notified alert ids
//! - Telegram delivery for formatted accident messages
//! - The poller that runs one fetch-filter-notify pass per tick

pub mod message;
pub mod notifier;
pub mod poller;
pub mod seen;
pub mod telegram;

pub use message::format_accident_message;
pub use notifier::{Notifier, NotifyError};
pub use poller::{Poller, TickStats};
pub use seen::SeenSet;
pub use telegram::TelegramNotifier;
