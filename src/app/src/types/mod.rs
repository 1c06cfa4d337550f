//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - access_point: AP info and password validation
//! - common: API envelope errors shared by all domains
//! - fan: Fan status and speed requests
//! - network: Scan results, connection state and saved networks
//! - system: System monitor metrics
//! - ui: Form state, timed messages, modal and tab state

pub mod access_point;
pub mod common;
pub mod fan;
pub mod network;
pub mod system;
pub mod ui;

pub use access_point::*;
pub use common::*;
pub use fan::*;
pub use network::*;
pub use system::*;
pub use ui::*;
