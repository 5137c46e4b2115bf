//! Seed data and selection state for the traffic dashboard panels.

pub mod config;
pub mod model;
pub mod section;

pub use config::{ConfigError, DashboardConfig};
pub use section::{Section, TimeRange};
