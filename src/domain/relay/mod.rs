//! Cloud Logging → Slack relay
//!
//! A Pub/Sub push request carries one exported log entry. It is decoded,
//! filtered, summarised and forwarded to the Slack webhook:
//! - `decoder`: envelope and log entry parsing
//! - `filter`: access-log noise suppression
//! - `payload`: payload excerpt extraction
//! - `notifier`: message formatting and forwarding

pub mod decoder;
pub mod dto;
pub mod filter;
pub mod handler;
pub mod notifier;
pub mod payload;
pub mod service;

pub use handler::relay_handler;
pub use service::{RelayOutcome, RelayService};
