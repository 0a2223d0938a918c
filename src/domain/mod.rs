pub mod health;
pub mod relay;
pub mod slack;
