//! Lake Formation provider implementing all supported operations.

use std::sync::Arc;

use tracing::debug;

use mockstack_core::{AccountId, AwsRegion, BackendStore, MockStackConfig};
use mockstack_lakeformation_model::error::LakeFormationError;
use mockstack_lakeformation_model::input::{
    AddLFTagsToResourceInput, BatchGrantPermissionsInput, BatchRevokePermissionsInput,
    CreateLFTagInput, DeleteLFTagInput, DeregisterResourceInput, DescribeResourceInput,
    GetDataLakeSettingsInput, GetLFTagInput, GetResourceLFTagsInput, GrantPermissionsInput,
    ListDataCellsFilterInput, ListLFTagsInput, ListPermissionsInput, ListResourcesInput,
    PutDataLakeSettingsInput, RegisterResourceInput, RemoveLFTagsFromResourceInput,
    RevokePermissionsInput, UpdateLFTagInput,
};
use mockstack_lakeformation_model::output::{
    AddLFTagsToResourceOutput, BatchGrantPermissionsOutput, BatchRevokePermissionsOutput,
    CreateLFTagOutput, DeleteLFTagOutput, DeregisterResourceOutput, DescribeResourceOutput,
    GetDataLakeSettingsOutput, GetLFTagOutput, GetResourceLFTagsOutput, GrantPermissionsOutput,
    ListDataCellsFilterOutput, ListLFTagsOutput, ListPermissionsOutput, ListResourcesOutput,
    PutDataLakeSettingsOutput, RegisterResourceOutput, RemoveLFTagsFromResourceOutput,
    RevokePermissionsOutput, UpdateLFTagOutput,
};
use mockstack_lakeformation_model::types::{
    BatchPermissionsFailureEntry, BatchPermissionsRequestEntry, ColumnLFTag, DataLakePrincipal,
    DataLakeResource, ErrorDetail, LFTag, LFTagError, Permission, PrincipalResourcePermissions,
};

use crate::permissions::{matches_resource_shape, matches_resource_type};
use crate::state::{LakeFormationBackend, RegisteredResource};
use crate::tags::{TagAssociationTarget, association_target};

/// Main Lake Formation provider.
///
/// Owns the per-(account, region) backend registry. Every operation resolves
/// the backend for its caller, then an omitted `CatalogId` defaults to the
/// backend's account.
#[derive(Debug)]
pub struct MockStackLakeFormation {
    backends: BackendStore<LakeFormationBackend>,
    config: MockStackConfig,
}

impl MockStackLakeFormation {
    /// Create a new Lake Formation provider.
    #[must_use]
    pub fn new(config: MockStackConfig) -> Self {
        Self {
            backends: BackendStore::new(),
            config,
        }
    }

    /// The backend for the given account and region, created on first use.
    #[must_use]
    pub fn backend(&self, account: &AccountId, region: &AwsRegion) -> Arc<LakeFormationBackend> {
        self.backends.get_or_create(account, region)
    }

    /// The backend for the configured default account and region.
    #[must_use]
    pub fn default_backend(&self) -> Arc<LakeFormationBackend> {
        self.backend(&self.config.default_account, &self.config.default_region)
    }

    /// Drop all backends (for testing).
    pub fn reset(&self) {
        self.backends.reset();
    }
}

// ---------------------------------------------------------------------------
// Resource registration
// ---------------------------------------------------------------------------

impl MockStackLakeFormation {
    /// Handle `RegisterResource`. Re-registering an ARN replaces the record.
    pub fn handle_register_resource(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: RegisterResourceInput,
    ) -> Result<RegisterResourceOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let role_arn = match (input.role_arn, input.use_service_linked_role) {
            (Some(role_arn), _) => role_arn,
            (None, Some(true)) => service_linked_role_arn(account),
            (None, _) => {
                return Err(LakeFormationError::invalid_input(
                    "RoleArn must be provided when UseServiceLinkedRole is not enabled.",
                ));
            }
        };
        backend.register_resource(
            input.resource_arn,
            role_arn,
            input.with_federation.unwrap_or(false),
        );
        Ok(RegisterResourceOutput {})
    }

    /// Handle `DeregisterResource`.
    pub fn handle_deregister_resource(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: DeregisterResourceInput,
    ) -> Result<DeregisterResourceOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        backend.deregister_resource(&input.resource_arn)?;
        Ok(DeregisterResourceOutput {})
    }

    /// Handle `DescribeResource`.
    pub fn handle_describe_resource(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: DescribeResourceInput,
    ) -> Result<DescribeResourceOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let resource = backend.describe_resource(&input.resource_arn)?;
        Ok(DescribeResourceOutput {
            resource_info: Some(resource.to_info()),
        })
    }

    /// Handle `ListResources`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_resources(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        _input: ListResourcesInput,
    ) -> Result<ListResourcesOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        Ok(ListResourcesOutput {
            resource_info_list: backend
                .list_resources()
                .iter()
                .map(RegisteredResource::to_info)
                .collect(),
        })
    }
}

/// ARN of the Lake Formation service-linked role for an account.
fn service_linked_role_arn(account: &AccountId) -> String {
    format!(
        "arn:aws:iam::{account}:role/aws-service-role/lakeformation.amazonaws.com/AWSServiceRoleForLakeFormationDataAccess"
    )
}

// ---------------------------------------------------------------------------
// Data lake settings
// ---------------------------------------------------------------------------

impl MockStackLakeFormation {
    /// Handle `GetDataLakeSettings`. A catalog without stored settings gets
    /// a default-initialized record.
    pub fn handle_get_data_lake_settings(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: GetDataLakeSettingsInput,
    ) -> Result<GetDataLakeSettingsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        Ok(GetDataLakeSettingsOutput {
            data_lake_settings: Some(backend.data_lake_settings(&catalog_id)),
        })
    }

    /// Handle `PutDataLakeSettings`. Replaces the record wholesale.
    pub fn handle_put_data_lake_settings(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: PutDataLakeSettingsInput,
    ) -> Result<PutDataLakeSettingsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        backend.put_data_lake_settings(&catalog_id, input.data_lake_settings);
        Ok(PutDataLakeSettingsOutput {})
    }
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Validate and append a single grant.
fn apply_grant(
    backend: &LakeFormationBackend,
    catalog_id: &str,
    principal: DataLakePrincipal,
    resource: DataLakeResource,
    permissions: Vec<Permission>,
    permissions_with_grant_option: Option<Vec<Permission>>,
) -> Result<(), LakeFormationError> {
    resource.validate()?;
    if permissions.is_empty() {
        return Err(LakeFormationError::invalid_input(
            "Permissions list cannot be empty.",
        ));
    }
    backend.add_grant(
        catalog_id,
        PrincipalResourcePermissions {
            principal,
            resource,
            permissions,
            permissions_with_grant_option,
        },
    );
    Ok(())
}

/// Validate and apply a single revocation.
fn apply_revoke(
    backend: &LakeFormationBackend,
    catalog_id: &str,
    principal: &DataLakePrincipal,
    resource: &DataLakeResource,
    permissions: &[Permission],
    permissions_with_grant_option: &[Permission],
) -> Result<(), LakeFormationError> {
    resource.validate()?;
    backend.revoke_grant(
        catalog_id,
        principal,
        resource,
        permissions,
        permissions_with_grant_option,
    );
    Ok(())
}

/// The `ListPermissions` query resource must populate the catalog, database,
/// or table descriptor.
fn validate_list_query_resource(resource: &DataLakeResource) -> Result<(), LakeFormationError> {
    match resource {
        DataLakeResource::Catalog(_) | DataLakeResource::Database(_) => Ok(()),
        DataLakeResource::Table(table) => table.validate(),
        _ => Err(LakeFormationError::invalid_input(
            "Resource must have either the catalog, table or database field populated.",
        )),
    }
}

/// Build a batch failure entry from a rejected request entry.
fn batch_failure(
    entry: BatchPermissionsRequestEntry,
    err: &LakeFormationError,
) -> BatchPermissionsFailureEntry {
    BatchPermissionsFailureEntry {
        request_entry: Some(entry),
        error: Some(ErrorDetail {
            error_code: Some(err.code.as_str().to_owned()),
            error_message: Some(err.message.clone()),
        }),
    }
}

/// Pull the principal and resource out of a batch entry.
fn entry_principal_resource(
    entry: &BatchPermissionsRequestEntry,
) -> Result<(DataLakePrincipal, DataLakeResource), LakeFormationError> {
    match (&entry.principal, &entry.resource) {
        (Some(principal), Some(resource)) => Ok((principal.clone(), resource.clone())),
        _ => Err(LakeFormationError::invalid_input(
            "Batch entries require both a principal and a resource.",
        )),
    }
}

impl MockStackLakeFormation {
    /// Handle `GrantPermissions`.
    pub fn handle_grant_permissions(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: GrantPermissionsInput,
    ) -> Result<GrantPermissionsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        apply_grant(
            &backend,
            &catalog_id,
            input.principal,
            input.resource,
            input.permissions,
            input.permissions_with_grant_option,
        )?;
        Ok(GrantPermissionsOutput {})
    }

    /// Handle `RevokePermissions`.
    pub fn handle_revoke_permissions(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: RevokePermissionsInput,
    ) -> Result<RevokePermissionsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        apply_revoke(
            &backend,
            &catalog_id,
            &input.principal,
            &input.resource,
            &input.permissions,
            input.permissions_with_grant_option.as_deref().unwrap_or(&[]),
        )?;
        Ok(RevokePermissionsOutput {})
    }

    /// Handle `ListPermissions`.
    ///
    /// Principal, resource-type, and resource-shape filters apply in
    /// sequence; each is skipped when the query omits it. All matches are
    /// returned in one response.
    pub fn handle_list_permissions(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: ListPermissionsInput,
    ) -> Result<ListPermissionsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let mut grants = backend.grants(&catalog_id);

        if let Some(principal) = &input.principal {
            grants.retain(|g| g.principal == *principal);
        }
        if let Some(resource_type) = &input.resource_type {
            grants.retain(|g| matches_resource_type(&g.resource, resource_type));
        }
        if let Some(resource) = &input.resource {
            validate_list_query_resource(resource)?;
            grants.retain(|g| matches_resource_shape(resource, &g.resource));
        }

        debug!(catalog = %catalog_id, matches = grants.len(), "permissions listed");
        Ok(ListPermissionsOutput {
            principal_resource_permissions: grants,
        })
    }

    /// Handle `BatchGrantPermissions`. Entries apply independently; a failed
    /// entry is reported without rolling back the ones already applied.
    pub fn handle_batch_grant_permissions(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: BatchGrantPermissionsInput,
    ) -> Result<BatchGrantPermissionsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let mut failures = Vec::new();
        for entry in input.entries {
            let applied = entry_principal_resource(&entry).and_then(|(principal, resource)| {
                apply_grant(
                    &backend,
                    &catalog_id,
                    principal,
                    resource,
                    entry.permissions.clone(),
                    entry.permissions_with_grant_option.clone(),
                )
            });
            if let Err(err) = applied {
                failures.push(batch_failure(entry, &err));
            }
        }
        Ok(BatchGrantPermissionsOutput { failures })
    }

    /// Handle `BatchRevokePermissions`. Same independence guarantees as
    /// batch grants.
    pub fn handle_batch_revoke_permissions(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: BatchRevokePermissionsInput,
    ) -> Result<BatchRevokePermissionsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let mut failures = Vec::new();
        for entry in input.entries {
            let applied = entry_principal_resource(&entry).and_then(|(principal, resource)| {
                apply_revoke(
                    &backend,
                    &catalog_id,
                    &principal,
                    &resource,
                    &entry.permissions,
                    entry
                        .permissions_with_grant_option
                        .as_deref()
                        .unwrap_or(&[]),
                )
            });
            if let Err(err) = applied {
                failures.push(batch_failure(entry, &err));
            }
        }
        Ok(BatchRevokePermissionsOutput { failures })
    }
}

// ---------------------------------------------------------------------------
// LF-tag definitions
// ---------------------------------------------------------------------------

impl MockStackLakeFormation {
    /// Handle `CreateLFTag`. Creating an existing key replaces its values.
    pub fn handle_create_lf_tag(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: CreateLFTagInput,
    ) -> Result<CreateLFTagOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        backend.set_lf_tag(&catalog_id, input.tag_key, input.tag_values);
        Ok(CreateLFTagOutput {})
    }

    /// Handle `GetLFTag`. An unknown key yields an empty value list.
    pub fn handle_get_lf_tag(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: GetLFTagInput,
    ) -> Result<GetLFTagOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let tag_values = backend.lf_tag(&catalog_id, &input.tag_key).unwrap_or_default();
        Ok(GetLFTagOutput {
            catalog_id: Some(catalog_id),
            tag_key: Some(input.tag_key),
            tag_values,
        })
    }

    /// Handle `DeleteLFTag`. Deletion cascades into every database, table,
    /// and column association referencing the key.
    pub fn handle_delete_lf_tag(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: DeleteLFTagInput,
    ) -> Result<DeleteLFTagOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        backend.delete_lf_tag(&catalog_id, &input.tag_key);
        Ok(DeleteLFTagOutput {})
    }

    /// Handle `ListLFTags`.
    pub fn handle_list_lf_tags(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: ListLFTagsInput,
    ) -> Result<ListLFTagsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let mut lf_tags: Vec<LFTag> = backend
            .lf_tags(&catalog_id)
            .into_iter()
            .map(|(tag_key, tag_values)| LFTag {
                catalog_id: Some(catalog_id.clone()),
                tag_key,
                tag_values,
            })
            .collect();
        lf_tags.sort_by(|a, b| a.tag_key.cmp(&b.tag_key));
        Ok(ListLFTagsOutput { lf_tags })
    }

    /// Handle `UpdateLFTag`. Additions apply before deletions, so a value
    /// named in both lists ends up removed.
    pub fn handle_update_lf_tag(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: UpdateLFTagInput,
    ) -> Result<UpdateLFTagOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let Some(mut values) = backend.lf_tag(&catalog_id, &input.tag_key) else {
            return Err(LakeFormationError::entity_not_found(
                "Tag or tag value does not exist.",
            ));
        };
        values.extend(input.tag_values_to_add.unwrap_or_default());
        for value in input.tag_values_to_delete.unwrap_or_default() {
            if let Some(pos) = values.iter().position(|v| *v == value) {
                values.remove(pos);
            }
        }
        backend.set_lf_tag(&catalog_id, input.tag_key, values);
        Ok(UpdateLFTagOutput {})
    }
}

// ---------------------------------------------------------------------------
// LF-tag associations
// ---------------------------------------------------------------------------

impl MockStackLakeFormation {
    /// Handle `AddLFTagsToResource`.
    ///
    /// Existence is checked up front for every tag that had no explicit
    /// catalog ID; if any check fails the full failure list is returned and
    /// nothing is written. On success the stored tag list at the resource's
    /// composite key is overwritten, not merged.
    pub fn handle_add_lf_tags_to_resource(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: AddLFTagsToResourceInput,
    ) -> Result<AddLFTagsToResourceOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);
        let existing = backend.lf_tags(&catalog_id);

        let mut tags = input.lf_tags;
        let mut failures = Vec::new();
        for tag in &mut tags {
            if tag.catalog_id.is_none() {
                tag.catalog_id = Some(catalog_id.clone());
                // Tags arriving with an explicit catalog ID bypass the check.
                if !existing.contains_key(&tag.tag_key) {
                    failures.push(LFTagError {
                        lf_tag: Some(tag.clone()),
                        error: Some(ErrorDetail {
                            error_code: Some("EntityNotFoundException".to_owned()),
                            error_message: Some("Tag or tag value does not exist.".to_owned()),
                        }),
                    });
                }
            }
        }
        if !failures.is_empty() {
            return Ok(AddLFTagsToResourceOutput { failures });
        }

        match association_target(&input.resource, backend.account_id().as_str())? {
            Some(TagAssociationTarget::Database(key)) => backend.set_database_tags(key, tags),
            Some(TagAssociationTarget::Table(key)) => backend.set_table_tags(key, tags),
            Some(TagAssociationTarget::Columns(keys)) => {
                for key in keys {
                    backend.set_column_tags(key, tags.clone());
                }
            }
            None => {}
        }
        Ok(AddLFTagsToResourceOutput::default())
    }

    /// Handle `GetResourceLFTags`.
    ///
    /// Column-level entries carry the column name and only columns with at
    /// least one stored tag appear.
    pub fn handle_get_resource_lf_tags(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: GetResourceLFTagsInput,
    ) -> Result<GetResourceLFTagsOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let mut output = GetResourceLFTagsOutput::default();

        match association_target(&input.resource, backend.account_id().as_str())? {
            Some(TagAssociationTarget::Database(key)) => {
                output.lf_tag_on_database = backend.database_tags(&key)?;
            }
            Some(TagAssociationTarget::Table(key)) => {
                output.lf_tags_on_table = backend.table_tags(&key)?;
            }
            Some(TagAssociationTarget::Columns(keys)) => {
                for key in keys {
                    if let Some(lf_tags) = backend.column_tags(&key) {
                        if !lf_tags.is_empty() {
                            output.lf_tags_on_columns.push(ColumnLFTag {
                                name: Some(key.column),
                                lf_tags,
                            });
                        }
                    }
                }
            }
            None => {}
        }
        Ok(output)
    }

    /// Handle `RemoveLFTagsFromResource`. The composite key must have been
    /// populated by a prior add.
    pub fn handle_remove_lf_tags_from_resource(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        input: RemoveLFTagsFromResourceInput,
    ) -> Result<RemoveLFTagsFromResourceOutput, LakeFormationError> {
        let backend = self.backend(account, region);
        let catalog_id = backend.catalog_or_default(input.catalog_id);

        let mut tags = input.lf_tags;
        for tag in &mut tags {
            if tag.catalog_id.is_none() {
                tag.catalog_id = Some(catalog_id.clone());
            }
        }

        match association_target(&input.resource, backend.account_id().as_str())? {
            Some(TagAssociationTarget::Database(key)) => {
                backend.remove_database_tags(&key, &tags)?;
            }
            Some(TagAssociationTarget::Table(key)) => {
                backend.remove_table_tags(&key, &tags)?;
            }
            Some(TagAssociationTarget::Columns(keys)) => {
                for key in &keys {
                    backend.remove_column_tags(key, &tags)?;
                }
            }
            None => {}
        }
        Ok(RemoveLFTagsFromResourceOutput {})
    }
}

// ---------------------------------------------------------------------------
// Data cells filters
// ---------------------------------------------------------------------------

impl MockStackLakeFormation {
    /// Handle `ListDataCellsFilter`.
    ///
    /// Returns an empty list; the corresponding create operation is not
    /// implemented yet.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_list_data_cells_filter(
        &self,
        account: &AccountId,
        region: &AwsRegion,
        _input: ListDataCellsFilterInput,
    ) -> Result<ListDataCellsFilterOutput, LakeFormationError> {
        let _ = self.backend(account, region);
        Ok(ListDataCellsFilterOutput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockstack_lakeformation_model::error::LakeFormationErrorCode;
    use mockstack_lakeformation_model::types::{
        CatalogResource, DataLakeResourceType, DataLakeSettings, DatabaseResource, LFTagPair,
        TableResource, TableWildcard, TableWithColumnsResource,
    };

    fn provider() -> MockStackLakeFormation {
        MockStackLakeFormation::new(MockStackConfig::default())
    }

    fn account() -> AccountId {
        AccountId::default()
    }

    fn region() -> AwsRegion {
        AwsRegion::default()
    }

    fn principal(id: &str) -> DataLakePrincipal {
        DataLakePrincipal::new(id)
    }

    fn database_resource(name: &str) -> DataLakeResource {
        DataLakeResource::Database(DatabaseResource {
            catalog_id: None,
            name: name.to_owned(),
        })
    }

    fn table_resource(database: &str, name: &str) -> DataLakeResource {
        DataLakeResource::Table(TableResource {
            catalog_id: None,
            database_name: database.to_owned(),
            name: Some(name.to_owned()),
            table_wildcard: None,
        })
    }

    fn pair(key: &str, values: &[&str]) -> LFTagPair {
        LFTagPair {
            catalog_id: None,
            tag_key: key.to_owned(),
            tag_values: values.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    fn stamped_pair(key: &str, values: &[&str]) -> LFTagPair {
        LFTagPair {
            catalog_id: Some(AccountId::DEFAULT.to_owned()),
            ..pair(key, values)
        }
    }

    fn grant(
        provider: &MockStackLakeFormation,
        principal: DataLakePrincipal,
        resource: DataLakeResource,
        permissions: Vec<Permission>,
    ) {
        provider
            .handle_grant_permissions(
                &account(),
                &region(),
                GrantPermissionsInput {
                    catalog_id: None,
                    principal,
                    resource,
                    permissions,
                    permissions_with_grant_option: None,
                },
            )
            .unwrap();
    }

    fn list(
        provider: &MockStackLakeFormation,
        input: ListPermissionsInput,
    ) -> Vec<PrincipalResourcePermissions> {
        provider
            .handle_list_permissions(&account(), &region(), input)
            .unwrap()
            .principal_resource_permissions
    }

    // -- Resource registration --

    #[test]
    fn test_should_roundtrip_resource_registration() {
        let provider = provider();
        provider
            .handle_register_resource(
                &account(),
                &region(),
                RegisterResourceInput {
                    resource_arn: "arn:aws:s3:::data-lake".to_owned(),
                    role_arn: Some("arn:aws:iam::123456789012:role/access".to_owned()),
                    ..RegisterResourceInput::default()
                },
            )
            .unwrap();

        let described = provider
            .handle_describe_resource(
                &account(),
                &region(),
                DescribeResourceInput {
                    resource_arn: "arn:aws:s3:::data-lake".to_owned(),
                },
            )
            .unwrap();
        let info = described.resource_info.unwrap();
        assert_eq!(info.resource_arn.as_deref(), Some("arn:aws:s3:::data-lake"));
        assert_eq!(
            info.role_arn.as_deref(),
            Some("arn:aws:iam::123456789012:role/access")
        );

        let listed = provider
            .handle_list_resources(&account(), &region(), ListResourcesInput {})
            .unwrap();
        assert_eq!(listed.resource_info_list.len(), 1);
    }

    #[test]
    fn test_should_fail_describe_and_deregister_for_unknown_arn() {
        let provider = provider();
        let err = provider
            .handle_describe_resource(
                &account(),
                &region(),
                DescribeResourceInput {
                    resource_arn: "arn:aws:s3:::missing".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);

        let err = provider
            .handle_deregister_resource(
                &account(),
                &region(),
                DeregisterResourceInput {
                    resource_arn: "arn:aws:s3:::missing".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
    }

    #[test]
    fn test_should_deregister_registered_resource() {
        let provider = provider();
        provider
            .handle_register_resource(
                &account(),
                &region(),
                RegisterResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                    role_arn: Some("role".to_owned()),
                    ..RegisterResourceInput::default()
                },
            )
            .unwrap();
        provider
            .handle_deregister_resource(
                &account(),
                &region(),
                DeregisterResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                },
            )
            .unwrap();

        let err = provider
            .handle_describe_resource(
                &account(),
                &region(),
                DescribeResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
    }

    #[test]
    fn test_should_use_service_linked_role_when_requested() {
        let provider = provider();
        provider
            .handle_register_resource(
                &account(),
                &region(),
                RegisterResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                    use_service_linked_role: Some(true),
                    ..RegisterResourceInput::default()
                },
            )
            .unwrap();

        let info = provider
            .handle_describe_resource(
                &account(),
                &region(),
                DescribeResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                },
            )
            .unwrap()
            .resource_info
            .unwrap();
        assert!(info.role_arn.unwrap().contains("aws-service-role"));
    }

    #[test]
    fn test_should_reject_registration_without_any_role() {
        let provider = provider();
        let err = provider
            .handle_register_resource(
                &account(),
                &region(),
                RegisterResourceInput {
                    resource_arn: "arn:aws:s3:::bucket".to_owned(),
                    ..RegisterResourceInput::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::InvalidInputException);
    }

    // -- Data lake settings --

    #[test]
    fn test_should_return_default_settings_then_replace_wholesale() {
        let provider = provider();
        let settings = provider
            .handle_get_data_lake_settings(
                &account(),
                &region(),
                GetDataLakeSettingsInput { catalog_id: None },
            )
            .unwrap()
            .data_lake_settings
            .unwrap();
        assert_eq!(settings, DataLakeSettings::default());

        let replacement = DataLakeSettings {
            data_lake_admins: vec![principal("arn:aws:iam::123456789012:user/admin")],
            ..DataLakeSettings::default()
        };
        provider
            .handle_put_data_lake_settings(
                &account(),
                &region(),
                PutDataLakeSettingsInput {
                    catalog_id: None,
                    data_lake_settings: replacement.clone(),
                },
            )
            .unwrap();

        let settings = provider
            .handle_get_data_lake_settings(
                &account(),
                &region(),
                GetDataLakeSettingsInput { catalog_id: None },
            )
            .unwrap()
            .data_lake_settings
            .unwrap();
        assert_eq!(settings, replacement);
    }

    // -- Grants --

    #[test]
    fn test_should_remove_grant_when_all_permissions_revoked() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select, Permission::Alter],
        );

        provider
            .handle_revoke_permissions(
                &account(),
                &region(),
                RevokePermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: vec![Permission::Select, Permission::Alter],
                    permissions_with_grant_option: None,
                },
            )
            .unwrap();

        assert!(list(&provider, ListPermissionsInput::default()).is_empty());
    }

    #[test]
    fn test_should_keep_remaining_permissions_after_partial_revoke() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select, Permission::Alter, Permission::Drop],
        );

        provider
            .handle_revoke_permissions(
                &account(),
                &region(),
                RevokePermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: vec![Permission::Alter],
                    permissions_with_grant_option: None,
                },
            )
            .unwrap();

        let grants = list(&provider, ListPermissionsInput::default());
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].permissions, vec![Permission::Select, Permission::Drop]);
    }

    #[test]
    fn test_should_revoke_grant_options_independently() {
        let provider = provider();
        provider
            .handle_grant_permissions(
                &account(),
                &region(),
                GrantPermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: vec![Permission::Select, Permission::Alter],
                    permissions_with_grant_option: Some(vec![Permission::Select]),
                },
            )
            .unwrap();

        provider
            .handle_revoke_permissions(
                &account(),
                &region(),
                RevokePermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: vec![Permission::Alter],
                    permissions_with_grant_option: Some(vec![Permission::Select]),
                },
            )
            .unwrap();

        let grants = list(&provider, ListPermissionsInput::default());
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].permissions, vec![Permission::Select]);
        assert_eq!(grants[0].permissions_with_grant_option, Some(Vec::new()));
    }

    #[test]
    fn test_should_store_duplicate_grants_and_revoke_across_them() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select],
        );
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select],
        );
        assert_eq!(list(&provider, ListPermissionsInput::default()).len(), 2);

        provider
            .handle_revoke_permissions(
                &account(),
                &region(),
                RevokePermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: vec![Permission::Select],
                    permissions_with_grant_option: None,
                },
            )
            .unwrap();
        assert!(list(&provider, ListPermissionsInput::default()).is_empty());
    }

    #[test]
    fn test_should_reject_grant_with_empty_permissions() {
        let provider = provider();
        let err = provider
            .handle_grant_permissions(
                &account(),
                &region(),
                GrantPermissionsInput {
                    catalog_id: None,
                    principal: principal("user"),
                    resource: database_resource("db"),
                    permissions: Vec::new(),
                    permissions_with_grant_option: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::InvalidInputException);
    }

    #[test]
    fn test_should_filter_permissions_by_principal() {
        let provider = provider();
        grant(
            &provider,
            principal("alice"),
            database_resource("db"),
            vec![Permission::Select],
        );
        grant(
            &provider,
            principal("bob"),
            database_resource("db"),
            vec![Permission::Drop],
        );

        let grants = list(
            &provider,
            ListPermissionsInput {
                principal: Some(principal("alice")),
                ..ListPermissionsInput::default()
            },
        );
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].principal, principal("alice"));
    }

    #[test]
    fn test_should_filter_permissions_by_resource_type() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::CreateTable],
        );
        grant(
            &provider,
            principal("user"),
            table_resource("db", "t"),
            vec![Permission::Select],
        );
        grant(
            &provider,
            principal("user"),
            DataLakeResource::TableWithColumns(TableWithColumnsResource {
                catalog_id: None,
                database_name: "db".to_owned(),
                name: "t".to_owned(),
                column_names: vec!["c".to_owned()],
                column_wildcard: None,
            }),
            vec![Permission::Select],
        );

        let grants = list(
            &provider,
            ListPermissionsInput {
                resource_type: Some(DataLakeResourceType::Table),
                ..ListPermissionsInput::default()
            },
        );
        assert_eq!(grants.len(), 2);
    }

    #[test]
    fn test_should_filter_permissions_by_resource_shape() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            DataLakeResource::Catalog(CatalogResource {}),
            vec![Permission::CreateDatabase],
        );
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::CreateTable],
        );
        grant(
            &provider,
            principal("user"),
            table_resource("db", "t"),
            vec![Permission::Select],
        );

        let grants = list(
            &provider,
            ListPermissionsInput {
                resource: Some(database_resource("db")),
                ..ListPermissionsInput::default()
            },
        );
        // The database query matches only the database grant; catalog and
        // table grants have no cascade arm for it.
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].resource, database_resource("db"));
    }

    #[test]
    fn test_should_match_wildcard_table_queries_against_wildcard_grants() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            DataLakeResource::Table(TableResource {
                catalog_id: None,
                database_name: "db".to_owned(),
                name: None,
                table_wildcard: Some(TableWildcard {}),
            }),
            vec![Permission::Select],
        );
        grant(
            &provider,
            principal("user"),
            table_resource("db", "t"),
            vec![Permission::Select],
        );

        let grants = list(
            &provider,
            ListPermissionsInput {
                resource: Some(DataLakeResource::Table(TableResource {
                    catalog_id: None,
                    database_name: "db".to_owned(),
                    name: None,
                    table_wildcard: Some(TableWildcard {}),
                })),
                ..ListPermissionsInput::default()
            },
        );
        assert_eq!(grants.len(), 1);
        assert!(matches!(&grants[0].resource, DataLakeResource::Table(t) if t.name.is_none()));
    }

    #[test]
    fn test_should_reject_list_query_without_catalog_database_or_table() {
        let provider = provider();
        let err = provider
            .handle_list_permissions(
                &account(),
                &region(),
                ListPermissionsInput {
                    resource: Some(DataLakeResource::DataLocation(
                        mockstack_lakeformation_model::types::DataLocationResource {
                            catalog_id: None,
                            resource_arn: "arn:aws:s3:::loc".to_owned(),
                        },
                    )),
                    ..ListPermissionsInput::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::InvalidInputException);
    }

    #[test]
    fn test_should_scope_grants_to_their_catalog() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select],
        );

        let other_catalog = list(
            &provider,
            ListPermissionsInput {
                catalog_id: Some("999988887777".to_owned()),
                ..ListPermissionsInput::default()
            },
        );
        assert!(other_catalog.is_empty());
        assert_eq!(list(&provider, ListPermissionsInput::default()).len(), 1);
    }

    // -- Batch permissions --

    #[test]
    fn test_should_apply_valid_batch_entries_and_report_failures() {
        let provider = provider();
        let valid = BatchPermissionsRequestEntry {
            id: "1".to_owned(),
            principal: Some(principal("alice")),
            resource: Some(database_resource("db")),
            permissions: vec![Permission::Select],
            permissions_with_grant_option: None,
        };
        let missing_resource = BatchPermissionsRequestEntry {
            id: "2".to_owned(),
            principal: Some(principal("bob")),
            resource: None,
            permissions: vec![Permission::Select],
            permissions_with_grant_option: None,
        };

        let output = provider
            .handle_batch_grant_permissions(
                &account(),
                &region(),
                BatchGrantPermissionsInput {
                    catalog_id: None,
                    entries: vec![valid, missing_resource],
                },
            )
            .unwrap();

        assert_eq!(output.failures.len(), 1);
        assert_eq!(
            output.failures[0].request_entry.as_ref().unwrap().id,
            "2"
        );
        assert_eq!(list(&provider, ListPermissionsInput::default()).len(), 1);
    }

    #[test]
    fn test_should_batch_revoke_each_entry_independently() {
        let provider = provider();
        grant(
            &provider,
            principal("alice"),
            database_resource("db"),
            vec![Permission::Select],
        );
        grant(
            &provider,
            principal("bob"),
            database_resource("db"),
            vec![Permission::Drop],
        );

        let output = provider
            .handle_batch_revoke_permissions(
                &account(),
                &region(),
                BatchRevokePermissionsInput {
                    catalog_id: None,
                    entries: vec![
                        BatchPermissionsRequestEntry {
                            id: "1".to_owned(),
                            principal: Some(principal("alice")),
                            resource: Some(database_resource("db")),
                            permissions: vec![Permission::Select],
                            permissions_with_grant_option: None,
                        },
                        BatchPermissionsRequestEntry {
                            id: "2".to_owned(),
                            principal: Some(principal("bob")),
                            resource: Some(database_resource("db")),
                            permissions: vec![Permission::Drop],
                            permissions_with_grant_option: None,
                        },
                    ],
                },
            )
            .unwrap();

        assert!(output.failures.is_empty());
        assert!(list(&provider, ListPermissionsInput::default()).is_empty());
    }

    // -- LF-tag definitions --

    #[test]
    fn test_should_roundtrip_lf_tag_and_return_empty_after_delete() {
        let provider = provider();
        provider
            .handle_create_lf_tag(
                &account(),
                &region(),
                CreateLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                    tag_values: vec!["v1".to_owned(), "v2".to_owned()],
                },
            )
            .unwrap();

        let tag = provider
            .handle_get_lf_tag(
                &account(),
                &region(),
                GetLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(tag.tag_values, vec!["v1".to_owned(), "v2".to_owned()]);

        provider
            .handle_delete_lf_tag(
                &account(),
                &region(),
                DeleteLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                },
            )
            .unwrap();
        let tag = provider
            .handle_get_lf_tag(
                &account(),
                &region(),
                GetLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                },
            )
            .unwrap();
        assert!(tag.tag_values.is_empty());
    }

    #[test]
    fn test_should_list_lf_tags_sorted_by_key() {
        let provider = provider();
        for key in ["team", "env"] {
            provider
                .handle_create_lf_tag(
                    &account(),
                    &region(),
                    CreateLFTagInput {
                        catalog_id: None,
                        tag_key: key.to_owned(),
                        tag_values: vec!["x".to_owned()],
                    },
                )
                .unwrap();
        }

        let listed = provider
            .handle_list_lf_tags(&account(), &region(), ListLFTagsInput { catalog_id: None })
            .unwrap();
        let keys: Vec<&str> = listed.lf_tags.iter().map(|t| t.tag_key.as_str()).collect();
        assert_eq!(keys, vec!["env", "team"]);
    }

    #[test]
    fn test_should_update_lf_tag_adding_before_removing() {
        let provider = provider();
        provider
            .handle_create_lf_tag(
                &account(),
                &region(),
                CreateLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                    tag_values: vec!["v1".to_owned(), "v2".to_owned()],
                },
            )
            .unwrap();

        provider
            .handle_update_lf_tag(
                &account(),
                &region(),
                UpdateLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                    tag_values_to_delete: Some(vec!["v1".to_owned()]),
                    tag_values_to_add: Some(vec!["v3".to_owned()]),
                },
            )
            .unwrap();

        let tag = provider
            .handle_get_lf_tag(
                &account(),
                &region(),
                GetLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(tag.tag_values, vec!["v2".to_owned(), "v3".to_owned()]);
    }

    #[test]
    fn test_should_remove_value_named_in_both_update_lists() {
        let provider = provider();
        provider
            .handle_create_lf_tag(
                &account(),
                &region(),
                CreateLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                    tag_values: vec!["v1".to_owned()],
                },
            )
            .unwrap();

        provider
            .handle_update_lf_tag(
                &account(),
                &region(),
                UpdateLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                    tag_values_to_delete: Some(vec!["v2".to_owned()]),
                    tag_values_to_add: Some(vec!["v2".to_owned()]),
                },
            )
            .unwrap();

        let tag = provider
            .handle_get_lf_tag(
                &account(),
                &region(),
                GetLFTagInput {
                    catalog_id: None,
                    tag_key: "env".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(tag.tag_values, vec!["v1".to_owned()]);
    }

    #[test]
    fn test_should_fail_update_for_unknown_tag_key() {
        let provider = provider();
        let err = provider
            .handle_update_lf_tag(
                &account(),
                &region(),
                UpdateLFTagInput {
                    catalog_id: None,
                    tag_key: "missing".to_owned(),
                    tag_values_to_delete: None,
                    tag_values_to_add: Some(vec!["v".to_owned()]),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
    }

    // -- LF-tag associations --

    fn create_tag(provider: &MockStackLakeFormation, key: &str, values: &[&str]) {
        provider
            .handle_create_lf_tag(
                &account(),
                &region(),
                CreateLFTagInput {
                    catalog_id: None,
                    tag_key: key.to_owned(),
                    tag_values: values.iter().map(|v| (*v).to_owned()).collect(),
                },
            )
            .unwrap();
    }

    #[test]
    fn test_should_report_failures_and_write_nothing_for_unknown_tag_keys() {
        let provider = provider();
        let output = provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                    lf_tags: vec![pair("missing", &["v"])],
                },
            )
            .unwrap();
        assert_eq!(output.failures.len(), 1);
        let failure = &output.failures[0];
        assert_eq!(
            failure.error.as_ref().unwrap().error_code.as_deref(),
            Some("EntityNotFoundException")
        );

        // Nothing was recorded for the database.
        let err = provider
            .handle_get_resource_lf_tags(
                &account(),
                &region(),
                GetResourceLFTagsInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
    }

    #[test]
    fn test_should_overwrite_database_tags_on_add() {
        let provider = provider();
        create_tag(&provider, "env", &["prod", "dev"]);
        create_tag(&provider, "team", &["core"]);

        provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                    lf_tags: vec![pair("env", &["prod"])],
                },
            )
            .unwrap();
        provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                    lf_tags: vec![pair("team", &["core"])],
                },
            )
            .unwrap();

        let output = provider
            .handle_get_resource_lf_tags(
                &account(),
                &region(),
                GetResourceLFTagsInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                },
            )
            .unwrap();
        // The second add replaced the stored list rather than merging.
        assert_eq!(output.lf_tag_on_database, vec![stamped_pair("team", &["core"])]);
    }

    #[test]
    fn test_should_skip_existence_check_for_tags_with_explicit_catalog() {
        let provider = provider();
        let foreign = LFTagPair {
            catalog_id: Some("999988887777".to_owned()),
            tag_key: "undeclared".to_owned(),
            tag_values: vec!["v".to_owned()],
        };
        let output = provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                    lf_tags: vec![foreign.clone()],
                },
            )
            .unwrap();
        assert!(output.failures.is_empty());

        let output = provider
            .handle_get_resource_lf_tags(
                &account(),
                &region(),
                GetResourceLFTagsInput {
                    catalog_id: None,
                    resource: database_resource("db"),
                },
            )
            .unwrap();
        assert_eq!(output.lf_tag_on_database, vec![foreign]);
    }

    #[test]
    fn test_should_tag_columns_and_list_only_tagged_ones() {
        let provider = provider();
        create_tag(&provider, "pii", &["true", "false"]);

        let tagged = DataLakeResource::TableWithColumns(TableWithColumnsResource {
            catalog_id: None,
            database_name: "db".to_owned(),
            name: "t".to_owned(),
            column_names: vec!["c1".to_owned(), "c2".to_owned()],
            column_wildcard: None,
        });
        provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: tagged,
                    lf_tags: vec![pair("pii", &["true"])],
                },
            )
            .unwrap();

        let query = DataLakeResource::TableWithColumns(TableWithColumnsResource {
            catalog_id: None,
            database_name: "db".to_owned(),
            name: "t".to_owned(),
            column_names: vec!["c1".to_owned(), "c2".to_owned(), "c3".to_owned()],
            column_wildcard: None,
        });
        let output = provider
            .handle_get_resource_lf_tags(
                &account(),
                &region(),
                GetResourceLFTagsInput {
                    catalog_id: None,
                    resource: query,
                },
            )
            .unwrap();
        let names: Vec<&str> = output
            .lf_tags_on_columns
            .iter()
            .map(|c| c.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["c1", "c2"]);
    }

    #[test]
    fn test_should_remove_tags_from_table_and_hide_emptied_columns() {
        let provider = provider();
        create_tag(&provider, "env", &["prod"]);

        let columns = DataLakeResource::TableWithColumns(TableWithColumnsResource {
            catalog_id: None,
            database_name: "db".to_owned(),
            name: "t".to_owned(),
            column_names: vec!["c1".to_owned()],
            column_wildcard: None,
        });
        provider
            .handle_add_lf_tags_to_resource(
                &account(),
                &region(),
                AddLFTagsToResourceInput {
                    catalog_id: None,
                    resource: columns.clone(),
                    lf_tags: vec![pair("env", &["prod"])],
                },
            )
            .unwrap();

        provider
            .handle_remove_lf_tags_from_resource(
                &account(),
                &region(),
                RemoveLFTagsFromResourceInput {
                    catalog_id: None,
                    resource: columns.clone(),
                    lf_tags: vec![pair("env", &["prod"])],
                },
            )
            .unwrap();

        let output = provider
            .handle_get_resource_lf_tags(
                &account(),
                &region(),
                GetResourceLFTagsInput {
                    catalog_id: None,
                    resource: columns,
                },
            )
            .unwrap();
        assert!(output.lf_tags_on_columns.is_empty());
    }

    #[test]
    fn test_should_fail_remove_for_never_tagged_resource() {
        let provider = provider();
        let err = provider
            .handle_remove_lf_tags_from_resource(
                &account(),
                &region(),
                RemoveLFTagsFromResourceInput {
                    catalog_id: None,
                    resource: table_resource("db", "t"),
                    lf_tags: vec![pair("env", &["prod"])],
                },
            )
            .unwrap_err();
        assert_eq!(err.code, LakeFormationErrorCode::EntityNotFoundException);
    }

    // -- Provider lifecycle --

    #[test]
    fn test_should_share_state_between_handlers_and_default_backend() {
        let provider = provider();
        grant(
            &provider,
            principal("user"),
            database_resource("db"),
            vec![Permission::Select],
        );
        assert_eq!(provider.default_backend().grants(AccountId::DEFAULT).len(), 1);

        provider.reset();
        assert!(provider.default_backend().grants(AccountId::DEFAULT).is_empty());
    }

    // -- Data cells filters --

    #[test]
    fn test_should_return_empty_data_cells_filter_list() {
        let provider = provider();
        let output = provider
            .handle_list_data_cells_filter(&account(), &region(), ListDataCellsFilterInput {})
            .unwrap();
        assert!(output.data_cells_filters.is_empty());
    }
}
