//! Application constants
//!
//! Endpoint paths, user-facing messages and configuration defaults.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:2390";

/// Default dashboard title
pub const DEFAULT_TITLE: &str = "App Dashboard";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "tiledash.log";

/// Application name
pub const APP_NAME: &str = "tiledash";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Backend endpoints
pub const LIST_APPS_PATH: &str = "/get_apps";
pub const ADD_APP_PATH: &str = "/add_new_app";
pub const DELETE_APP_PATH: &str = "/delete_app";

// Notices
pub const ADD_FALLBACK: &str = "Failed to add tile";
pub const DELETE_FALLBACK: &str = "Failed to remove app";
pub const ADD_SUCCESS: &str = "Tile added successfully!";
pub const DELETE_SUCCESS: &str = "App removed.";
pub const ADD_NETWORK_ERROR: &str = "Network error while adding tile";
pub const DELETE_NETWORK_ERROR: &str = "Network error while removing app";
pub const MISSING_FIELDS: &str = "All fields are required";
pub const UNAUTHORIZED_PREFIX: &str = "Unauthorized";
