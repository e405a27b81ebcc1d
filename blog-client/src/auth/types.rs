use serde::{Deserialize, Serialize};

use crate::session::Identity;

/// Login submission sent to `POST /usuarios/logar`
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    #[serde(rename = "usuario")]
    pub login: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Successful login response: the authenticated identity plus its token
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "usuario")]
    pub login: String,
    #[serde(rename = "foto", default)]
    pub photo: String,
    pub token: String,
}

impl AuthenticatedUser {
    /// Split into the identity record and the credential token
    pub fn into_session_parts(self) -> (Identity, String) {
        (
            Identity {
                id: self.id,
                name: self.name,
                login: self.login,
                photo: self.photo,
            },
            self.token,
        )
    }
}

/// New identity sent to `POST /usuarios/cadastrar`
///
/// `id` is zero until the backend assigns one; the backend echoing a
/// non-zero id back is the registration completion signal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewUser {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "usuario")]
    pub login: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "foto")]
    pub photo: String,
}

/// Registration response body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "usuario")]
    pub login: String,
    #[serde(rename = "foto", default)]
    pub photo: String,
}

/// Registration form state: the new identity plus the separately captured
/// password confirmation
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub user: NewUser,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Drop both password fields, as required after a validation failure
    pub fn clear_passwords(&mut self) {
        self.user.password.clear();
        self.confirm_password.clear();
    }
}
