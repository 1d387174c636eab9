//! User profiles kept under the users collection key.

use crate::domain::error::{DirectoryError, DirectoryResult};
use crate::storage::{JsonStore, USERS_KEY};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

const AVATAR_PLACEHOLDER_BASE: &str = "https://i.pravatar.cc/150?u=";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Partial profile edit; unset fields stay as they are.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

pub fn avatar_url(user: &User) -> String {
    match &user.avatar {
        Some(avatar) if !avatar.is_empty() => avatar.clone(),
        _ => format!("{}{}", AVATAR_PLACEHOLDER_BASE, user.id),
    }
}

pub struct UserDirectory {
    store: JsonStore,
    users: Vec<User>,
}

impl UserDirectory {
    pub async fn load(store: JsonStore, seed: Vec<User>) -> Self {
        let users = match store.load::<Vec<User>>(USERS_KEY).await {
            Some(stored) => stored,
            None => {
                debug!(count = seed.len(), "No stored users, using seed");
                seed
            }
        };
        Self { store, users }
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Everyone except admins, for the admin console's user list.
    pub fn list_members(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.role != Role::Admin)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub async fn update_profile(&mut self, user_id: &str, update: ProfileUpdate) -> DirectoryResult<User> {
        let mut next = self.users.clone();
        let user = next
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DirectoryError::NotFound {
                kind: "User",
                id: user_id.to_string(),
            })?;

        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        let updated = user.clone();

        self.store.save(USERS_KEY, &next).await?;
        self.users = next;
        Ok(updated)
    }
}
