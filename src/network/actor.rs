//! Network actor - runs backend calls in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::TileStoreClient;

/// Network actor that executes tile store commands.
///
/// Every command runs as its own task, so overlapping requests are allowed
/// and their responses arrive in completion order.
pub struct NetworkActor {
    client: TileStoreClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: TileStoreClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                // Reap completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }

    fn spawn(&mut self, cmd: NetworkCommand) {
        let response_tx = self.response_tx.clone();
        let client = self.client.clone();

        match cmd {
            NetworkCommand::ListApps { id } => {
                self.active_requests.spawn(async move {
                    tracing::info!(id, base_url = %client.base_url(), "Listing apps");
                    let result = client.list_apps().await;
                    match &result {
                        Ok(tiles) => tracing::info!(id, count = tiles.len(), "Apps listed"),
                        Err(e) => tracing::error!(id, error = %e, "Error fetching apps"),
                    }
                    let _ = response_tx.send(NetworkResponse::AppsListed { id, result });
                });
            }

            NetworkCommand::AddApp { id, tile, credential } => {
                self.active_requests.spawn(async move {
                    tracing::info!(id, name = %tile.name, "Adding app");
                    let result = client.add_app(&tile, credential).await;
                    if let Err(e) = &result {
                        tracing::warn!(id, name = %tile.name, error = %e, "Add rejected");
                    }
                    let _ = response_tx.send(NetworkResponse::AppAdded { id, tile, result });
                });
            }

            NetworkCommand::DeleteApp { id, name, credential } => {
                self.active_requests.spawn(async move {
                    tracing::info!(id, name = %name, "Deleting app");
                    let result = client.delete_app(&name, credential).await;
                    if let Err(e) = &result {
                        tracing::warn!(id, name = %name, error = %e, "Delete rejected");
                    }
                    let _ = response_tx.send(NetworkResponse::AppDeleted { id, name, result });
                });
            }

            NetworkCommand::Shutdown => {}
        }
    }
}
