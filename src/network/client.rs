//! Tile store client - the three backend calls and their classification

use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    ADD_APP_PATH, ADD_FALLBACK, DELETE_APP_PATH, DELETE_FALLBACK, LIST_APPS_PATH,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{AddAppBody, ApiReply, Credential, DeleteAppBody, Tile};

/// Thin client over the dashboard backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct TileStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl TileStoreClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        TileStoreClient {
            client: create_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /get_apps`
    pub async fn list_apps(&self) -> ApiResult<Vec<Tile>> {
        let resp = self
            .client
            .get(self.endpoint(LIST_APPS_PATH))
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(network_error)?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Generic {
                status: Some(status),
                message: format!("HTTP {}", status),
            });
        }
        parse_tile_list(&body)
    }

    /// `POST /add_new_app`. The credential is consumed by the call.
    pub async fn add_app(&self, tile: &Tile, credential: Credential) -> ApiResult<()> {
        let body = AddAppBody {
            tile,
            admin_password: credential.expose(),
        };
        self.post_mutation(ADD_APP_PATH, &body, ADD_FALLBACK).await
    }

    /// `POST /delete_app`. The credential is consumed by the call.
    pub async fn delete_app(&self, name: &str, credential: Credential) -> ApiResult<()> {
        let body = DeleteAppBody {
            name,
            admin_password: credential.expose(),
        };
        self.post_mutation(DELETE_APP_PATH, &body, DELETE_FALLBACK).await
    }

    async fn post_mutation<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<()> {
        let resp = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(network_error)?;
        classify_reply(status, &text, fallback)
    }
}

/// Decode the `/get_apps` payload
pub fn parse_tile_list(body: &str) -> ApiResult<Vec<Tile>> {
    serde_json::from_str(body).map_err(|e| ApiError::Generic {
        status: None,
        message: format!("invalid tile list: {}", e),
    })
}

/// Classify a mutating endpoint's reply.
///
/// Success needs both a 2xx status and `success: true` in the body; a
/// server answering 200 with a failure payload is still a failure. An
/// unparseable body counts as a failure payload with no message.
pub fn classify_reply(status: u16, body: &str, fallback: &str) -> ApiResult<()> {
    let reply: ApiReply = serde_json::from_str(body).unwrap_or_default();

    if (200..300).contains(&status) && reply.success {
        return Ok(());
    }

    let message = reply
        .error
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| fallback.to_string());

    if status == 401 {
        Err(ApiError::Unauthorized { message })
    } else {
        Err(ApiError::Generic {
            status: Some(status),
            message,
        })
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    let msg = if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    };
    ApiError::Network(msg)
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn test_success_needs_status_and_flag() {
        assert_eq!(classify_reply(200, r#"{"success":true}"#, ADD_FALLBACK), Ok(()));
        assert_eq!(
            classify_reply(200, r#"{"success":false,"error":"dup"}"#, ADD_FALLBACK),
            Err(ApiError::Generic {
                status: Some(200),
                message: "dup".to_string()
            })
        );
        // A success flag with a failing status is still a failure
        assert!(classify_reply(500, r#"{"success":true}"#, ADD_FALLBACK).is_err());
    }

    #[test]
    fn test_unauthorized_keeps_server_message() {
        let err = classify_reply(401, r#"{"success":false,"error":"bad password"}"#, ADD_FALLBACK)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: "bad password".to_string()
            }
        );
        let text = err.to_string();
        assert!(text.contains("Unauthorized"));
        assert!(text.contains("bad password"));
    }

    #[test]
    fn test_fallback_when_server_gives_no_message() {
        assert_eq!(
            classify_reply(404, r#"{"success":false}"#, DELETE_FALLBACK),
            Err(ApiError::Generic {
                status: Some(404),
                message: DELETE_FALLBACK.to_string()
            })
        );
        assert_eq!(
            classify_reply(502, "<html>bad gateway</html>", ADD_FALLBACK),
            Err(ApiError::Generic {
                status: Some(502),
                message: ADD_FALLBACK.to_string()
            })
        );
    }

    #[test]
    fn test_parse_tile_list_keeps_order() {
        let body = r#"[
            {"name":"Wiki","url":"http://wiki","icon":"i.png","description":"d"},
            {"name":"Git","url":"http://git","icon":"g.png","description":"code"}
        ]"#;
        let tiles = parse_tile_list(body).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].name, "Wiki");
        assert_eq!(tiles[1].name, "Git");
    }

    #[test]
    fn test_parse_tile_list_rejects_garbage() {
        assert!(matches!(
            parse_tile_list(r#"{"apps":[]}"#),
            Err(ApiError::Generic { .. })
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = TileStoreClient::new("http://dash.lan/", Duration::from_secs(1));
        assert_eq!(client.endpoint(LIST_APPS_PATH), "http://dash.lan/get_apps");
    }

    // ========================
    // Over the wire
    // ========================

    /// A request as seen by the canned server
    struct Captured {
        request_line: String,
        body: String,
    }

    /// Serve one canned JSON response, capturing the request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];

            let header_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "client closed before sending headers");
                raw.extend_from_slice(&buf[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                .map(|(_, v)| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            while raw.len() < header_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "client closed before sending body");
                raw.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            Captured {
                request_line: head.lines().next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&raw[header_end..header_end + content_length]).to_string(),
            }
        });

        (base_url, handle)
    }

    fn client_for(base_url: &str) -> TileStoreClient {
        TileStoreClient::new(base_url, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_list_apps_reads_tiles() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"name":"Wiki","url":"http://wiki","icon":"i.png","description":"d"}]"#,
        )
        .await;

        let tiles = client_for(&base_url).list_apps().await.unwrap();
        assert_eq!(tiles, vec![Tile::new("Wiki", "http://wiki", "i.png", "d")]);

        let captured = server.await.unwrap();
        assert!(captured.request_line.starts_with("GET /get_apps "));
    }

    #[tokio::test]
    async fn test_list_apps_non_2xx_is_generic() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client_for(&base_url).list_apps().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Generic {
                status: Some(500),
                message: "HTTP 500".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_add_app_sends_tile_and_password() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"success":false,"error":"bad password"}"#,
        )
        .await;

        let tile = Tile::new("X", "u", "i", "d");
        let err = client_for(&base_url)
            .add_app(&tile, Credential::new("pw"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: "bad password".to_string()
            }
        );

        let captured = server.await.unwrap();
        assert!(captured.request_line.starts_with("POST /add_new_app "));
        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "X",
                "url": "u",
                "icon": "i",
                "description": "d",
                "admin_password": "pw",
            })
        );
    }

    #[tokio::test]
    async fn test_delete_app_sends_name_and_password_only() {
        let (base_url, server) = serve_once("200 OK", r#"{"success":true,"message":"App deleted successfully"}"#).await;

        client_for(&base_url)
            .delete_app("Wiki", Credential::new("pw"))
            .await
            .unwrap();

        let captured = server.await.unwrap();
        assert!(captured.request_line.starts_with("POST /delete_app "));
        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Wiki", "admin_password": "pw" }));
    }

    #[tokio::test]
    async fn test_delete_app_200_with_failure_payload_is_generic() {
        let (base_url, server) = serve_once("200 OK", r#"{"success":false}"#).await;

        let err = client_for(&base_url)
            .delete_app("Wiki", Credential::new("pw"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Generic {
                status: Some(200),
                message: DELETE_FALLBACK.to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_port_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = client_for(&base_url);
        assert!(matches!(client.list_apps().await, Err(ApiError::Network(_))));
        assert!(matches!(
            client.delete_app("Wiki", Credential::new("pw")).await,
            Err(ApiError::Network(_))
        ));
    }
}
