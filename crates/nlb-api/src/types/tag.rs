//! Tagging request/response types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::common::{Tag, TagResourceType};

// ── TagResources ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourcesRequest {
    pub resource_id: Vec<String>,
    pub resource_type: TagResourceType,
    pub tag: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl TagResourcesRequest {
    pub fn new(resource_type: TagResourceType, resource_id: Vec<String>, tag: Vec<Tag>) -> Self {
        Self {
            resource_id,
            resource_type,
            tag,
            client_token: None,
            dry_run: None,
            region_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.resource_id.is_empty() {
            return Err(Error::Validation {
                field: "ResourceId",
                reason: "name at least one resource".into(),
            });
        }
        if self.tag.is_empty() {
            return Err(Error::Validation {
                field: "Tag",
                reason: "name at least one tag".into(),
            });
        }
        if self.tag.iter().any(|t| t.key.as_deref().is_none_or(str::is_empty)) {
            return Err(Error::Validation {
                field: "Tag",
                reason: "every tag needs a key".into(),
            });
        }
        Ok(())
    }
}

// ── UntagResources ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourcesRequest {
    pub resource_id: Vec<String>,
    pub resource_type: TagResourceType,
    /// Keys to remove. Ignored when `all` is set.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag_key: Vec<String>,
    /// Remove every tag from the named resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UntagResourcesRequest {
    pub fn new(resource_type: TagResourceType, resource_id: Vec<String>) -> Self {
        Self {
            resource_id,
            resource_type,
            tag_key: Vec::new(),
            all: None,
            client_token: None,
            dry_run: None,
            region_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.resource_id.is_empty() {
            return Err(Error::Validation {
                field: "ResourceId",
                reason: "name at least one resource".into(),
            });
        }
        if self.tag_key.is_empty() && self.all != Some(true) {
            return Err(Error::Validation {
                field: "TagKey",
                reason: "name keys to remove, or set All".into(),
            });
        }
        Ok(())
    }
}

// ── ListTagResources ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagResourcesRequest {
    pub resource_type: TagResourceType,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub resource_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl ListTagResourcesRequest {
    pub fn new(resource_type: TagResourceType) -> Self {
        Self {
            resource_type,
            resource_id: Vec::new(),
            tag: Vec::new(),
            max_results: None,
            next_token: None,
            region_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.resource_id.is_empty() && self.tag.is_empty() {
            return Err(Error::Validation {
                field: "ResourceId",
                reason: "filter by resource ids or by tags".into(),
            });
        }
        Ok(())
    }
}

/// One resource/tag pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResource {
    pub resource_id: Option<String>,
    pub resource_type: Option<String>,
    pub tag_key: Option<String>,
    pub tag_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagResourcesResponse {
    pub request_id: String,
    #[serde(default)]
    pub tag_resources: Vec<TagResource>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
