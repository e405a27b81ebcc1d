use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::coordination::errors::CoordinationError;
use crate::coordination::recovery::recover;
use crate::coordination::theme::Theme;
use crate::gateway::Gateway;
use crate::notify::{Severity, SharedNotifier};
use crate::session::{Identity, SessionStore};

/// A blog post (wire resource `/postagens`)
///
/// `date` is the backend's `LocalDateTime` (no timezone on the wire); the
/// backend fills it in on create, so a drafted post leaves it unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "tema", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

/// Protected CRUD over the post resource
///
/// Same contract as [`crate::ThemeService`]: token drawn from the session at
/// call time, failures funnelled through recovery, explicit `list` refresh
/// after mutations.
#[derive(Clone)]
pub struct PostService {
    gateway: Gateway,
    session: SessionStore,
    notifier: SharedNotifier,
}

impl PostService {
    pub fn new(gateway: Gateway, session: SessionStore, notifier: SharedNotifier) -> Self {
        Self {
            gateway,
            session,
            notifier,
        }
    }

    pub async fn list(&self) -> Result<Vec<Post>, CoordinationError> {
        let token = self.session.token();
        self.gateway
            .get("/postagens", Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to fetch posts"))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Post, CoordinationError> {
        let token = self.session.token();
        self.gateway
            .get(&format!("/postagens/{id}"), Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Post not found"))
    }

    pub async fn create(&self, post: &Post) -> Result<Post, CoordinationError> {
        let token = self.session.token();
        let created = self
            .gateway
            .post("/postagens", post, Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to publish the post"))?;
        self.notifier
            .notify(Severity::Success, "Post published successfully");
        Ok(created)
    }

    pub async fn update(&self, post: &Post) -> Result<Post, CoordinationError> {
        let token = self.session.token();
        let updated = self
            .gateway
            .put(&format!("/postagens/{}", post.id), post, Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to update the post"))?;
        self.notifier
            .notify(Severity::Success, "Post updated successfully");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoordinationError> {
        let token = self.session.token();
        self.gateway
            .delete(&format!("/postagens/{id}"), Some(&token))
            .await
            .map_err(|e| recover(&self.session, &self.notifier, e, "Failed to delete the post"))?;
        self.notifier
            .notify(Severity::Success, "Post deleted successfully");
        Ok(())
    }
}
