//! Network messages - communication between App and Network layers

use crate::error::ApiResult;
use crate::models::{Credential, Tile};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full tile list
    ListApps { id: u64 },
    /// Create a tile, authorized by `credential`
    AddApp {
        id: u64,
        tile: Tile,
        credential: Credential,
    },
    /// Delete the tile named `name`, authorized by `credential`
    DeleteApp {
        id: u64,
        name: String,
        credential: Credential,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Mutation responses carry back the tile or name they were issued for,
/// never the credential.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    AppsListed {
        id: u64,
        result: ApiResult<Vec<Tile>>,
    },
    AppAdded {
        id: u64,
        tile: Tile,
        result: ApiResult<()>,
    },
    AppDeleted {
        id: u64,
        name: String,
        result: ApiResult<()>,
    },
}
