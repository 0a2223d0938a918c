//! Outbound Slack incoming-webhook client

pub mod client;
pub mod dto;

pub use client::{SlackClient, SlackClientTrait, SlackWebhookClient};
pub use dto::NotificationMessage;
