//! Network layer - tile store HTTP calls
//!
//! The Network actor receives tile store commands and sends back outcomes.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::TileStoreClient;
