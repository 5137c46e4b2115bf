//! In-memory registry of emergency alerts shown on the dashboard.
//!
//! Alerts are seeded once and then only ever resolved or dismissed.

pub mod alert;
pub mod error;
pub mod registry;

pub use alert::{Alert, AlertId, AlertStatus, Severity};
pub use error::RegistryError;
pub use registry::{AlertRegistry, AlertSummary};
