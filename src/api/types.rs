// src/api/types.rs
// Request/response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agents::{Brief, types::DEFAULT_PLATFORMS};
use crate::auth::{IdentityClaims, User};

pub const REQUIRED_BRIEF_FIELDS: [&str; 3] = ["product_name", "description", "audience"];

/// Body of `POST /api/generate`; every field optional so validation can name what is missing
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub platforms: Option<Vec<String>>,
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

impl GenerateRequest {
    /// Trimmed brief, or the names of required fields that are empty
    pub fn into_brief(self) -> Result<Brief, Vec<&'static str>> {
        let product_name = trimmed(&self.product_name);
        let description = trimmed(&self.description);
        let audience = trimmed(&self.audience);

        let missing: Vec<&'static str> = REQUIRED_BRIEF_FIELDS
            .into_iter()
            .zip([&product_name, &description, &audience])
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let tone = self
            .tone
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "professional".to_string());
        let platforms = self
            .platforms
            .unwrap_or_else(|| DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect());

        Ok(Brief {
            product_name,
            description,
            audience,
            tone,
            platforms,
        })
    }
}

/// Body of `POST /api/refine`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RefineRequest {
    pub message: String,
    /// Accepted for client compatibility; refinement regenerates from the brief
    pub current_copy: Option<Value>,
    pub brief: Brief,
}

/// Body of `POST /api/auth/google`
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub user: Option<IdentityClaims>,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub status: &'static str,
    pub user: User,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct DownloadImageQuery {
    pub url: Option<String>,
    pub filename: Option<String>,
}
