use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dashboard entry. `name` is the identity key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub description: String,
}

impl Tile {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Tile {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }
}

/// Admin password for one mutating request. Moved into the request and
/// dropped with it; `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Credential(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Body of `POST /add_new_app`
#[derive(Debug, Serialize)]
pub struct AddAppBody<'a> {
    #[serde(flatten)]
    pub tile: &'a Tile,
    pub admin_password: &'a str,
}

/// Body of `POST /delete_app`
#[derive(Debug, Serialize)]
pub struct DeleteAppBody<'a> {
    pub name: &'a str,
    pub admin_password: &'a str,
}

/// Reply of the mutating endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_body_flattens_tile() {
        let tile = Tile::new("Wiki", "http://wiki", "i.png", "d");
        let body = AddAppBody { tile: &tile, admin_password: "pw" };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Wiki",
                "url": "http://wiki",
                "icon": "i.png",
                "description": "d",
                "admin_password": "pw",
            })
        );
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("hunter2");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.expose(), "hunter2");
    }

    #[test]
    fn test_reply_without_success_is_failure() {
        let reply: ApiReply = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("nope"));
    }
}
