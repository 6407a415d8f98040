//! Shared Lake Formation types.
//!
//! All types follow the Lake Formation JSON wire format with `PascalCase`
//! field names; AWS initialisms that `PascalCase` renaming cannot produce
//! (`LFTags`, `LFTagKey`) carry explicit renames.
//!
//! Resource descriptors are a tagged enum ([`DataLakeResource`]) rather than
//! a bag of optional fields: serde's externally-tagged representation matches
//! the wire shape (`{"Database": {...}}`) while guaranteeing exactly one
//! descriptor case is populated.

use serde::{Deserialize, Serialize};

use crate::error::LakeFormationError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A Lake Formation permission.
///
/// The wire protocol may deliver permission strings outside the documented
/// set; those are preserved verbatim as [`Permission::Unknown`] rather than
/// rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Permission {
    All,
    Select,
    Alter,
    Drop,
    Delete,
    Insert,
    Describe,
    CreateDatabase,
    CreateTable,
    DataLocationAccess,
    CreateLFTag,
    Associate,
    /// A permission string outside the documented set.
    Unknown(String),
}

impl Permission {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Select => "SELECT",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Delete => "DELETE",
            Self::Insert => "INSERT",
            Self::Describe => "DESCRIBE",
            Self::CreateDatabase => "CREATE_DATABASE",
            Self::CreateTable => "CREATE_TABLE",
            Self::DataLocationAccess => "DATA_LOCATION_ACCESS",
            Self::CreateLFTag => "CREATE_LF_TAG",
            Self::Associate => "ASSOCIATE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "ALL" => Self::All,
            "SELECT" => Self::Select,
            "ALTER" => Self::Alter,
            "DROP" => Self::Drop,
            "DELETE" => Self::Delete,
            "INSERT" => Self::Insert,
            "DESCRIBE" => Self::Describe,
            "CREATE_DATABASE" => Self::CreateDatabase,
            "CREATE_TABLE" => Self::CreateTable,
            "DATA_LOCATION_ACCESS" => Self::DataLocationAccess,
            "CREATE_LF_TAG" => Self::CreateLFTag,
            "ASSOCIATE" => Self::Associate,
            _ => Self::Unknown(s),
        })
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource-type filter accepted by `ListPermissions`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataLakeResourceType {
    Catalog,
    Database,
    Table,
    DataLocation,
    /// A resource type string outside the documented set.
    Unknown(String),
}

impl DataLakeResourceType {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Catalog => "CATALOG",
            Self::Database => "DATABASE",
            Self::Table => "TABLE",
            Self::DataLocation => "DATA_LOCATION",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for DataLakeResourceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataLakeResourceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "CATALOG" => Self::Catalog,
            "DATABASE" => Self::Database,
            "TABLE" => Self::Table,
            "DATA_LOCATION" => Self::DataLocation,
            _ => Self::Unknown(s),
        })
    }
}

impl std::fmt::Display for DataLakeResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Principals and resource descriptors
// ---------------------------------------------------------------------------

/// An identity that permissions are granted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataLakePrincipal {
    /// IAM-style principal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lake_principal_identifier: Option<String>,
}

impl DataLakePrincipal {
    /// Create a principal from an identifier string.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            data_lake_principal_identifier: Some(identifier.into()),
        }
    }
}

/// The whole data catalog (always an empty structure on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResource {}

/// A database in the data catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub name: String,
}

/// Marker for "all tables in a database" (empty structure on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableWildcard {}

/// A table, identified either by name or by wildcard.
///
/// Exactly one of `name` / `table_wildcard` must be set; [`validate`]
/// enforces this.
///
/// [`validate`]: TableResource::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_wildcard: Option<TableWildcard>,
}

impl TableResource {
    /// Enforce the name/wildcard exclusivity rule.
    pub fn validate(&self) -> Result<(), LakeFormationError> {
        match (&self.name, &self.table_wildcard) {
            (None, None) => Err(LakeFormationError::invalid_input(
                "Table name and table wildcard cannot both be empty.",
            )),
            (Some(_), Some(_)) => Err(LakeFormationError::invalid_input(
                "Table name and table wildcard cannot both be present.",
            )),
            _ => Ok(()),
        }
    }
}

/// Column selection carried by a table-with-columns descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnWildcard {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_column_names: Vec<String>,
}

/// A table together with an explicit set of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableWithColumnsResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub database_name: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_wildcard: Option<ColumnWildcard>,
}

/// A registered storage location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataLocationResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub resource_arn: String,
}

/// An LF-tag key with a set of values, addressed as a grant target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LFTagKeyResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_values: Vec<String>,
}

/// A tag-expression policy addressed as a grant target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LFTagPolicyResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<DataLakeResourceType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expression: Vec<LFTag>,
}

/// A data cells filter addressed as a grant target or filter listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCellsFilterResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A resource that permissions apply to, with exactly one active case.
///
/// Serde's externally-tagged enum representation matches the AWS wire shape:
/// `{"Table": {"DatabaseName": "db", "Name": "t"}}`. Requests carrying zero
/// or several descriptor fields fail to deserialize, which replaces the
/// original duck-typed descriptor dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataLakeResource {
    /// The whole catalog.
    Catalog(CatalogResource),
    /// A database.
    Database(DatabaseResource),
    /// A table by name or wildcard.
    Table(TableResource),
    /// A table restricted to named columns.
    TableWithColumns(TableWithColumnsResource),
    /// A registered storage location.
    DataLocation(DataLocationResource),
    /// An LF-tag key grant target; stored verbatim, never shape-matched.
    LFTag(LFTagKeyResource),
    /// An LF-tag policy grant target; stored verbatim, never shape-matched.
    LFTagPolicy(LFTagPolicyResource),
    /// A data cells filter grant target; stored verbatim, never shape-matched.
    DataCellsFilter(DataCellsFilterResource),
}

impl DataLakeResource {
    /// Validate internal descriptor consistency.
    ///
    /// Only table descriptors carry a structural rule today (name/wildcard
    /// exclusivity); every other case is valid by construction.
    pub fn validate(&self) -> Result<(), LakeFormationError> {
        match self {
            Self::Table(table) => table.validate(),
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Grants and settings
// ---------------------------------------------------------------------------

/// One stored permission grant, as returned by `ListPermissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrincipalResourcePermissions {
    pub principal: DataLakePrincipal,
    pub resource: DataLakeResource,
    pub permissions: Vec<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_with_grant_option: Option<Vec<Permission>>,
}

/// A default-permissions entry in the data lake settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrincipalPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DataLakePrincipal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

/// Per-catalog data lake settings record.
///
/// The `Default` impl mirrors the service defaults: no admins, `ALL`
/// database/table creation permissions for `IAM_ALLOWED_PRINCIPALS`, no
/// trusted owners, external data filtering disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataLakeSettings {
    pub data_lake_admins: Vec<DataLakePrincipal>,
    pub create_database_default_permissions: Vec<PrincipalPermissions>,
    pub create_table_default_permissions: Vec<PrincipalPermissions>,
    pub trusted_resource_owners: Vec<String>,
    pub allow_external_data_filtering: bool,
    pub external_data_filtering_allow_list: Vec<DataLakePrincipal>,
}

impl Default for DataLakeSettings {
    fn default() -> Self {
        let iam_allowed = PrincipalPermissions {
            principal: Some(DataLakePrincipal::new("IAM_ALLOWED_PRINCIPALS")),
            permissions: vec![Permission::All],
        };
        Self {
            data_lake_admins: Vec::new(),
            create_database_default_permissions: vec![iam_allowed.clone()],
            create_table_default_permissions: vec![iam_allowed],
            trusted_resource_owners: Vec::new(),
            allow_external_data_filtering: false,
            external_data_filtering_allow_list: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Registered resources
// ---------------------------------------------------------------------------

/// Description of a registered data lake location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_federation: Option<bool>,
    /// Registration time as epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<f64>,
}

// ---------------------------------------------------------------------------
// LF tags
// ---------------------------------------------------------------------------

/// An LF-tag definition: a key with its allowed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LFTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_values: Vec<String>,
}

/// An LF-tag assignment on a resource (key plus the assigned values).
///
/// Assignments are removed by whole-value equality, so the derived
/// `PartialEq` is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LFTagPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    pub tag_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_values: Vec<String>,
}

/// Column name together with the LF tags assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnLFTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "LFTags", default, skip_serializing_if = "Vec::is_empty")]
    pub lf_tags: Vec<LFTagPair>,
}

/// Error detail attached to per-entry failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A failed LF-tag assignment, reported by `AddLFTagsToResource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LFTagError {
    #[serde(rename = "LFTag", skip_serializing_if = "Option::is_none")]
    pub lf_tag: Option<LFTagPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

// ---------------------------------------------------------------------------
// Batch permissions
// ---------------------------------------------------------------------------

/// One entry in a batch grant/revoke request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPermissionsRequestEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DataLakePrincipal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<DataLakeResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_with_grant_option: Option<Vec<Permission>>,
}

/// A batch entry that could not be applied, with the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPermissionsFailureEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_entry: Option<BatchPermissionsRequestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}
