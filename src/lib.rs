//! # tiledash
//!
//! A terminal dashboard of app tiles served by a small CRUD backend.
//!
//! ## Features
//! - Tile list loaded from `GET /get_apps`, add control always last
//! - Password-gated add form (`POST /add_new_app`)
//! - Password-gated delete prompt (`POST /delete_app`)
//! - Optimistic updates applied only after server confirmation
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::{Credential, Tile};
pub use error::{ApiError, ApiResult};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, TileListView};
pub use network::{NetworkActor, TileStoreClient};
