use serde::{Deserialize, Serialize};

/// Authenticated user identity as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,
    /// Display name (wire field `nome`)
    #[serde(rename = "nome")]
    pub name: String,
    /// Login name (wire field `usuario`)
    #[serde(rename = "usuario")]
    pub login: String,
    /// Avatar URL (wire field `foto`)
    #[serde(rename = "foto")]
    pub photo: String,
}

/// The in-memory session record
///
/// Invariant: `token == ""` if and only if the session is unauthenticated,
/// and then `identity` is `None`. The empty token doubles as the sentinel
/// the route guard and the gateway check against.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub token: String,
}

impl Session {
    /// The sentinel state: nobody is logged in
    pub fn unauthenticated() -> Self {
        Self {
            identity: None,
            token: String::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::unauthenticated()
    }
}
