// src/auth/store.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

pub const DEFAULT_PROVIDER: &str = "google";

/// Identity as the browser reports it. Nothing here is verified.
/// Null claims (Google sends `"picture": null` for some accounts) read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentityClaims {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub picture: String,
    pub provider: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub sub: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl IdentityClaims {
    /// True when no claim carries a value, e.g. `{"user": {}}`
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.picture, &self.sub]
            .iter()
            .all(|claim| claim.trim().is_empty())
            && self.provider.as_deref().is_none_or(|p| p.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub picture: String,
    pub provider: String,
    pub sub: String,
    #[serde(with = "login_timestamp")]
    pub last_login: DateTime<Utc>,
}

mod login_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// Users keyed by email. Capacity-bounded: a new email arriving at capacity
/// evicts whoever logged in longest ago.
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
    capacity: usize,
}

impl UserStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn upsert(&self, claims: IdentityClaims) -> User {
        self.upsert_at(claims, Utc::now()).await
    }

    pub async fn upsert_at(&self, claims: IdentityClaims, now: DateTime<Utc>) -> User {
        let user = User {
            name: claims.name,
            email: claims.email,
            picture: claims.picture,
            provider: claims
                .provider
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            sub: claims.sub,
            last_login: now,
        };

        let mut users = self.users.write().await;
        if !users.contains_key(&user.email) && users.len() >= self.capacity {
            let oldest = users
                .values()
                .min_by_key(|u| u.last_login)
                .map(|u| u.email.clone());
            if let Some(email) = oldest {
                debug!(email = %email, "user store full, evicting oldest login");
                users.remove(&email);
            }
        }
        users.insert(user.email.clone(), user.clone());
        user
    }

    /// Snapshot sorted by email
    pub async fn list(&self) -> Vec<User> {
        let users = self.users.read().await;
        let mut list: Vec<User> = users.values().cloned().collect();
        list.sort_by(|a, b| a.email.cmp(&b.email));
        list
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
