//! Lake Formation output types.
//!
//! All output structs use `PascalCase` JSON field naming to match the Lake
//! Formation wire protocol. Several operations return empty JSON objects on
//! success; those outputs are empty structs so the response shape stays
//! explicit at the call sites.

use serde::{Deserialize, Serialize};

use crate::types::{
    BatchPermissionsFailureEntry, ColumnLFTag, DataCellsFilterResource, DataLakeSettings, LFTag,
    LFTagError, LFTagPair, PrincipalResourcePermissions, ResourceInfo,
};

// ---------------------------------------------------------------------------
// Resource registration
// ---------------------------------------------------------------------------

/// Output for the `RegisterResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterResourceOutput {}

/// Output for the `DeregisterResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeregisterResourceOutput {}

/// Output for the `DescribeResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeResourceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_info: Option<ResourceInfo>,
}

/// Output for the `ListResources` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourcesOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_info_list: Vec<ResourceInfo>,
}

// ---------------------------------------------------------------------------
// Data lake settings
// ---------------------------------------------------------------------------

/// Output for the `GetDataLakeSettings` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataLakeSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lake_settings: Option<DataLakeSettings>,
}

/// Output for the `PutDataLakeSettings` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutDataLakeSettingsOutput {}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Output for the `GrantPermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantPermissionsOutput {}

/// Output for the `RevokePermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RevokePermissionsOutput {}

/// Output for the `ListPermissions` operation. All matches are returned in
/// one response; no pagination is performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPermissionsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub principal_resource_permissions: Vec<PrincipalResourcePermissions>,
}

/// Output for the `BatchGrantPermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGrantPermissionsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<BatchPermissionsFailureEntry>,
}

/// Output for the `BatchRevokePermissions` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchRevokePermissionsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<BatchPermissionsFailureEntry>,
}

// ---------------------------------------------------------------------------
// LF tags
// ---------------------------------------------------------------------------

/// Output for the `CreateLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLFTagOutput {}

/// Output for the `GetLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLFTagOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_values: Vec<String>,
}

/// Output for the `DeleteLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLFTagOutput {}

/// Output for the `ListLFTags` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLFTagsOutput {
    #[serde(rename = "LFTags", default, skip_serializing_if = "Vec::is_empty")]
    pub lf_tags: Vec<LFTag>,
}

/// Output for the `UpdateLFTag` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLFTagOutput {}

/// Output for the `AddLFTagsToResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddLFTagsToResourceOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<LFTagError>,
}

/// Output for the `GetResourceLFTags` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResourceLFTagsOutput {
    #[serde(rename = "LFTagOnDatabase", default, skip_serializing_if = "Vec::is_empty")]
    pub lf_tag_on_database: Vec<LFTagPair>,
    #[serde(rename = "LFTagsOnTable", default, skip_serializing_if = "Vec::is_empty")]
    pub lf_tags_on_table: Vec<LFTagPair>,
    #[serde(rename = "LFTagsOnColumns", default, skip_serializing_if = "Vec::is_empty")]
    pub lf_tags_on_columns: Vec<ColumnLFTag>,
}

/// Output for the `RemoveLFTagsFromResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveLFTagsFromResourceOutput {}

// ---------------------------------------------------------------------------
// Data cells filters
// ---------------------------------------------------------------------------

/// Output for the `ListDataCellsFilter` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataCellsFilterOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_cells_filters: Vec<DataCellsFilterResource>,
}
