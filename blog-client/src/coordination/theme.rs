use serde::{Deserialize, Serialize};

use crate::coordination::errors::CoordinationError;
use crate::coordination::recovery::recover;
use crate::gateway::Gateway;
use crate::notify::{Severity, SharedNotifier};
use crate::session::SessionStore;

/// A post category (wire resource `/temas`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Theme {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Protected CRUD over the theme resource
///
/// Callers re-issue [`ThemeService::list`] after a successful mutation to
/// refresh any listing they hold; there is no implicit refetch.
#[derive(Clone)]
pub struct ThemeService {
    gateway: Gateway,
    session: SessionStore,
    notifier: SharedNotifier,
}

impl ThemeService {
    pub fn new(gateway: Gateway, session: SessionStore, notifier: SharedNotifier) -> Self {
        Self {
            gateway,
            session,
            notifier,
        }
    }

    pub async fn list(&self) -> Result<Vec<Theme>, CoordinationError> {
        let token = self.session.token();
        self.gateway
            .get("/temas", Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to fetch themes"))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Theme, CoordinationError> {
        let token = self.session.token();
        self.gateway
            .get(&format!("/temas/{id}"), Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Theme not found"))
    }

    pub async fn create(&self, theme: &Theme) -> Result<Theme, CoordinationError> {
        let token = self.session.token();
        let created = self
            .gateway
            .post("/temas", theme, Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to register the theme"))?;
        self.notifier
            .notify(Severity::Success, "Theme registered successfully");
        Ok(created)
    }

    pub async fn update(&self, theme: &Theme) -> Result<Theme, CoordinationError> {
        let token = self.session.token();
        let updated = self
            .gateway
            .put(&format!("/temas/{}", theme.id), theme, Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to update the theme"))?;
        self.notifier
            .notify(Severity::Success, "Theme updated successfully");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoordinationError> {
        let token = self.session.token();
        self.gateway
            .delete(&format!("/temas/{id}"), Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to delete the theme"))?;
        self.notifier
            .notify(Severity::Success, "Theme deleted successfully");
        Ok(())
    }
}
