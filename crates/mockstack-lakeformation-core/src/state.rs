//! Lake Formation backend state.
//!
//! One [`LakeFormationBackend`] holds the full service state for a single
//! simulated (account, region) pair: registered locations, per-catalog
//! settings, permission grants, the LF-tag definitions, and the LF-tag
//! associations at database, table, and column granularity.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use mockstack_core::{AccountId, AwsRegion, ServiceBackend, TagStore};
use mockstack_lakeformation_model::error::LakeFormationError;
use mockstack_lakeformation_model::types::{
    DataLakePrincipal, DataLakeResource, DataLakeSettings, LFTagPair, Permission,
    PrincipalResourcePermissions, ResourceInfo,
};

/// A registered data lake storage location.
#[derive(Debug, Clone)]
pub struct RegisteredResource {
    /// ARN of the storage location.
    pub arn: String,
    /// Role used to access the location.
    pub role_arn: String,
    /// Whether the location is accessed through federation.
    pub with_federation: bool,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
}

impl RegisteredResource {
    /// Build the wire-format description of this resource.
    #[must_use]
    pub fn to_info(&self) -> ResourceInfo {
        #[allow(clippy::cast_precision_loss)] // Lake Formation returns epoch seconds as f64
        let last_modified = self.registered_at.timestamp() as f64;
        ResourceInfo {
            resource_arn: Some(self.arn.clone()),
            role_arn: Some(self.role_arn.clone()),
            with_federation: Some(self.with_federation),
            last_modified: Some(last_modified),
        }
    }
}

/// Composite key for database-level tag associations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseTagKey {
    pub catalog_id: String,
    pub database: String,
}

/// Composite key for table-level tag associations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableTagKey {
    pub catalog_id: String,
    pub database: String,
    pub table: String,
}

/// Composite key for column-level tag associations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnTagKey {
    pub catalog_id: String,
    pub database: String,
    pub table: String,
    pub column: String,
}

/// Full Lake Formation state for one (account, region) pair.
pub struct LakeFormationBackend {
    account_id: AccountId,
    region: AwsRegion,
    /// Registered locations keyed by ARN.
    resources: DashMap<String, RegisteredResource>,
    /// Per-catalog settings, created lazily with defaults.
    settings: DashMap<String, DataLakeSettings>,
    /// Ordered grant lists per catalog.
    grants: DashMap<String, Vec<PrincipalResourcePermissions>>,
    /// LF-tag definitions, keyed by a synthetic per-catalog identifier.
    lf_tags: TagStore,
    database_tags: DashMap<DatabaseTagKey, Vec<LFTagPair>>,
    table_tags: DashMap<TableTagKey, Vec<LFTagPair>>,
    column_tags: DashMap<ColumnTagKey, Vec<LFTagPair>>,
}

impl std::fmt::Debug for LakeFormationBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LakeFormationBackend")
            .field("account_id", &self.account_id)
            .field("region", &self.region)
            .field("resource_count", &self.resources.len())
            .finish_non_exhaustive()
    }
}

impl ServiceBackend for LakeFormationBackend {
    fn new(account: &AccountId, region: &AwsRegion) -> Self {
        Self {
            account_id: account.clone(),
            region: region.clone(),
            resources: DashMap::new(),
            settings: DashMap::new(),
            grants: DashMap::new(),
            lf_tags: TagStore::new(),
            database_tags: DashMap::new(),
            table_tags: DashMap::new(),
            column_tags: DashMap::new(),
        }
    }
}

impl LakeFormationBackend {
    /// The account that owns this backend.
    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// The region this backend simulates.
    #[must_use]
    pub fn region(&self) -> &AwsRegion {
        &self.region
    }

    /// Resolve an optional catalog ID to the owning account's catalog.
    #[must_use]
    pub fn catalog_or_default(&self, catalog_id: Option<String>) -> String {
        catalog_id.unwrap_or_else(|| self.account_id.as_str().to_owned())
    }

    /// Identifier under which a catalog's LF tags live in the tag store.
    ///
    /// Not a real ARN; a recognizable, reproducible placeholder.
    #[must_use]
    pub fn lf_tag_store_id(catalog_id: &str) -> String {
        format!("arn:lakeformation:{catalog_id}")
    }

    /// Drop all state held by this backend.
    pub fn reset(&self) {
        debug!("resetting Lake Formation backend state");
        self.resources.clear();
        self.settings.clear();
        self.grants.clear();
        self.lf_tags.reset();
        self.database_tags.clear();
        self.table_tags.clear();
        self.column_tags.clear();
    }
}

// ---------------------------------------------------------------------------
// Registered resources
// ---------------------------------------------------------------------------

impl LakeFormationBackend {
    /// Register a storage location. Re-registering an ARN replaces it.
    pub fn register_resource(&self, arn: String, role_arn: String, with_federation: bool) {
        info!(resource = %arn, "resource registered");
        self.resources.insert(
            arn.clone(),
            RegisteredResource {
                arn,
                role_arn,
                with_federation,
                registered_at: Utc::now(),
            },
        );
    }

    /// Look up a registered location by ARN.
    pub fn describe_resource(&self, arn: &str) -> Result<RegisteredResource, LakeFormationError> {
        self.resources
            .get(arn)
            .map(|r| r.clone())
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))
    }

    /// Remove a registered location by ARN.
    pub fn deregister_resource(&self, arn: &str) -> Result<(), LakeFormationError> {
        self.resources
            .remove(arn)
            .map(|_| info!(resource = %arn, "resource deregistered"))
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))
    }

    /// All registered locations, ordered by ARN.
    #[must_use]
    pub fn list_resources(&self) -> Vec<RegisteredResource> {
        let mut all: Vec<RegisteredResource> =
            self.resources.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.arn.cmp(&b.arn));
        all
    }
}

// ---------------------------------------------------------------------------
// Data lake settings
// ---------------------------------------------------------------------------

impl LakeFormationBackend {
    /// Settings for a catalog, created with defaults on first access.
    #[must_use]
    pub fn data_lake_settings(&self, catalog_id: &str) -> DataLakeSettings {
        self.settings
            .entry(catalog_id.to_owned())
            .or_default()
            .clone()
    }

    /// Replace a catalog's settings wholesale.
    pub fn put_data_lake_settings(&self, catalog_id: &str, settings: DataLakeSettings) {
        self.settings.insert(catalog_id.to_owned(), settings);
    }
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

impl LakeFormationBackend {
    /// Append a grant to a catalog's grant list. No dedup or merge happens;
    /// identical grants coexist.
    pub fn add_grant(&self, catalog_id: &str, grant: PrincipalResourcePermissions) {
        debug!(catalog = catalog_id, "permission grant recorded");
        self.grants
            .entry(catalog_id.to_owned())
            .or_default()
            .push(grant);
    }

    /// Remove permissions from every grant matching principal and resource
    /// by deep equality, then drop grants left with no permissions. The
    /// relative order of surviving grants is preserved.
    pub fn revoke_grant(
        &self,
        catalog_id: &str,
        principal: &DataLakePrincipal,
        resource: &DataLakeResource,
        permissions: &[Permission],
        grant_option_permissions: &[Permission],
    ) {
        let Some(mut grants) = self.grants.get_mut(catalog_id) else {
            return;
        };
        for grant in grants.iter_mut() {
            if grant.principal == *principal && grant.resource == *resource {
                grant.permissions.retain(|p| !permissions.contains(p));
                if let Some(with_grant) = grant.permissions_with_grant_option.as_mut() {
                    with_grant.retain(|p| !grant_option_permissions.contains(p));
                }
            }
        }
        grants.retain(|g| !g.permissions.is_empty());
        debug!(catalog = catalog_id, remaining = grants.len(), "permissions revoked");
    }

    /// Snapshot of a catalog's grants in insertion order.
    #[must_use]
    pub fn grants(&self, catalog_id: &str) -> Vec<PrincipalResourcePermissions> {
        self.grants
            .get(catalog_id)
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// LF-tag definitions
// ---------------------------------------------------------------------------

impl LakeFormationBackend {
    /// Create or replace an LF-tag key with its allowed values.
    pub fn set_lf_tag(&self, catalog_id: &str, key: String, values: Vec<String>) {
        let store_id = Self::lf_tag_store_id(catalog_id);
        self.lf_tags.tag_resource(&store_id, [(key, values)]);
    }

    /// The allowed values for an LF-tag key, if the key exists.
    #[must_use]
    pub fn lf_tag(&self, catalog_id: &str, key: &str) -> Option<Vec<String>> {
        self.lf_tags.get_tag(&Self::lf_tag_store_id(catalog_id), key)
    }

    /// All LF-tag definitions for a catalog.
    #[must_use]
    pub fn lf_tags(&self, catalog_id: &str) -> HashMap<String, Vec<String>> {
        self.lf_tags.get_tags(&Self::lf_tag_store_id(catalog_id))
    }

    /// Delete an LF-tag key and cascade removal of every database, table,
    /// and column association that referenced it.
    pub fn delete_lf_tag(&self, catalog_id: &str, key: &str) {
        let store_id = Self::lf_tag_store_id(catalog_id);
        self.lf_tags.untag_resource(&store_id, &[key.to_owned()]);

        for mut entry in self.database_tags.iter_mut() {
            entry.value_mut().retain(|tag| tag.tag_key != key);
        }
        for mut entry in self.table_tags.iter_mut() {
            entry.value_mut().retain(|tag| tag.tag_key != key);
        }
        for mut entry in self.column_tags.iter_mut() {
            entry.value_mut().retain(|tag| tag.tag_key != key);
        }
        info!(catalog = catalog_id, tag_key = key, "LF tag deleted");
    }
}

// ---------------------------------------------------------------------------
// LF-tag associations
// ---------------------------------------------------------------------------

/// Remove each listed tag from `stored`, matching by whole-value equality.
/// Tags that are not present are ignored.
fn remove_tag_pairs(stored: &mut Vec<LFTagPair>, tags: &[LFTagPair]) {
    for tag in tags {
        if let Some(pos) = stored.iter().position(|t| t == tag) {
            stored.remove(pos);
        }
    }
}

impl LakeFormationBackend {
    /// Overwrite the tag list stored for a database.
    pub fn set_database_tags(&self, key: DatabaseTagKey, tags: Vec<LFTagPair>) {
        self.database_tags.insert(key, tags);
    }

    /// Overwrite the tag list stored for a table.
    pub fn set_table_tags(&self, key: TableTagKey, tags: Vec<LFTagPair>) {
        self.table_tags.insert(key, tags);
    }

    /// Overwrite the tag list stored for a column.
    pub fn set_column_tags(&self, key: ColumnTagKey, tags: Vec<LFTagPair>) {
        self.column_tags.insert(key, tags);
    }

    /// Tags stored for a database; the key must have been populated by a
    /// prior add.
    pub fn database_tags(&self, key: &DatabaseTagKey) -> Result<Vec<LFTagPair>, LakeFormationError> {
        self.database_tags
            .get(key)
            .map(|t| t.clone())
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))
    }

    /// Tags stored for a table; the key must have been populated by a prior
    /// add.
    pub fn table_tags(&self, key: &TableTagKey) -> Result<Vec<LFTagPair>, LakeFormationError> {
        self.table_tags
            .get(key)
            .map(|t| t.clone())
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))
    }

    /// Tags stored for a column, if any were ever stored.
    #[must_use]
    pub fn column_tags(&self, key: &ColumnTagKey) -> Option<Vec<LFTagPair>> {
        self.column_tags.get(key).map(|t| t.clone())
    }

    /// Remove tags from a database's stored list.
    pub fn remove_database_tags(
        &self,
        key: &DatabaseTagKey,
        tags: &[LFTagPair],
    ) -> Result<(), LakeFormationError> {
        let mut stored = self
            .database_tags
            .get_mut(key)
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))?;
        remove_tag_pairs(&mut stored, tags);
        Ok(())
    }

    /// Remove tags from a table's stored list.
    pub fn remove_table_tags(
        &self,
        key: &TableTagKey,
        tags: &[LFTagPair],
    ) -> Result<(), LakeFormationError> {
        let mut stored = self
            .table_tags
            .get_mut(key)
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))?;
        remove_tag_pairs(&mut stored, tags);
        Ok(())
    }

    /// Remove tags from a column's stored list.
    pub fn remove_column_tags(
        &self,
        key: &ColumnTagKey,
        tags: &[LFTagPair],
    ) -> Result<(), LakeFormationError> {
        let mut stored = self
            .column_tags
            .get_mut(key)
            .ok_or_else(|| LakeFormationError::entity_not_found("Entity not found"))?;
        remove_tag_pairs(&mut stored, tags);
        Ok(())
    }
}
