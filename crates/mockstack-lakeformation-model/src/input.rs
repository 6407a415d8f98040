//! Lake Formation input types.
//!
//! All input structs use `PascalCase` JSON field naming to match the Lake
//! Formation wire protocol. `CatalogId` is optional everywhere it appears;
//! the backend resolves an omitted value to the caller's account ID.

use serde::{Deserialize, Serialize};

use crate::types::{
    BatchPermissionsRequestEntry, DataLakePrincipal, DataLakeResource, DataLakeResourceType,
    DataLakeSettings, LFTagPair, Permission,
};

// ---------------------------------------------------------------------------
// Resource registration
// ---------------------------------------------------------------------------

/// Input for the `RegisterResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterResourceInput {
    /// ARN of the storage location to register.
    pub resource_arn: String,

    /// Register using the Lake Formation service-linked role instead of an
    /// explicit role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_service_linked_role: Option<bool>,

    /// Role used to access the location. Required unless the service-linked
    /// role is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Whether the resource is accessed through federation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_federation: Option<bool>,
}

/// Input for the `DeregisterResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeregisterResourceInput {
    /// ARN of the registered location.
    pub resource_arn: String,
}

/// Input for the `DescribeResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeResourceInput {
    /// ARN of the registered location.
    pub resource_arn: String,
}

/// Input for the `ListResources` operation. No filtering or pagination is
/// implemented; every registered resource is returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourcesInput {}

// ---------------------------------------------------------------------------
// Data lake settings
// ---------------------------------------------------------------------------

/// Input for the `GetDataLakeSettings` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataLakeSettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
}

/// Input for the `PutDataLakeSettings` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutDataLakeSettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub data_lake_settings: DataLakeSettings,
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Input for the `GrantPermissions` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantPermissionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub principal: DataLakePrincipal,
    pub resource: DataLakeResource,
    pub permissions: Vec<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_with_grant_option: Option<Vec<Permission>>,
}

/// Input for the `RevokePermissions` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RevokePermissionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub principal: DataLakePrincipal,
    pub resource: DataLakeResource,
    /// Permissions removed from every grant matching principal and resource.
    pub permissions: Vec<Permission>,
    /// Grant-option permissions removed independently, when the grant carries
    /// a grant-option list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_with_grant_option: Option<Vec<Permission>>,
}

/// Input for the `ListPermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPermissionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// Restrict to grants whose principal is deeply equal to this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DataLakePrincipal>,
    /// Restrict to grants whose resource descriptor matches this shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<DataLakeResource>,
    /// Restrict to grants on resources of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<DataLakeResourceType>,
}

/// Input for the `BatchGrantPermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGrantPermissionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub entries: Vec<BatchPermissionsRequestEntry>,
}

/// Input for the `BatchRevokePermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchRevokePermissionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub entries: Vec<BatchPermissionsRequestEntry>,
}

// ---------------------------------------------------------------------------
// LF tags
// ---------------------------------------------------------------------------

/// Input for the `CreateLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLFTagInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
    pub tag_values: Vec<String>,
}

/// Input for the `GetLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLFTagInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
}

/// Input for the `DeleteLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLFTagInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
}

/// Input for the `ListLFTags` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLFTagsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
}

/// Input for the `UpdateLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLFTagInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
    /// Values removed from the key. Applied after `tag_values_to_add`, so a
    /// value named in both lists ends up removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_values_to_delete: Option<Vec<String>>,
    /// Values added to the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_values_to_add: Option<Vec<String>>,
}

/// Input for the `AddLFTagsToResource` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddLFTagsToResourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub resource: DataLakeResource,
    #[serde(rename = "LFTags")]
    pub lf_tags: Vec<LFTagPair>,
}

/// Input for the `GetResourceLFTags` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResourceLFTagsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub resource: DataLakeResource,
}

/// Input for the `RemoveLFTagsFromResource` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveLFTagsFromResourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub resource: DataLakeResource,
    #[serde(rename = "LFTags")]
    pub lf_tags: Vec<LFTagPair>,
}

// ---------------------------------------------------------------------------
// Data cells filters
// ---------------------------------------------------------------------------

/// Input for the `ListDataCellsFilter` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataCellsFilterInput {}
