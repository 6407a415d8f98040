//! LF-tag association targets.
//!
//! Tag assignments are stored at database, table, or column granularity.
//! This module derives the composite storage key(s) for a resource
//! descriptor; descriptors that cannot carry tag associations (catalog,
//! data location, grant-only targets) have no target and the tag operations
//! treat them as a no-op, as the service does.

use mockstack_lakeformation_model::error::LakeFormationError;
use mockstack_lakeformation_model::types::DataLakeResource;

use crate::state::{ColumnTagKey, DatabaseTagKey, TableTagKey};

/// Where a resource's LF-tag assignments live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAssociationTarget {
    /// One database-level tag list.
    Database(DatabaseTagKey),
    /// One table-level tag list.
    Table(TableTagKey),
    /// One column-level tag list per named column.
    Columns(Vec<ColumnTagKey>),
}

/// Derive the association target for a resource descriptor.
///
/// A missing catalog ID on the descriptor defaults to `default_catalog_id`
/// (the owning account). Returns `Ok(None)` for descriptors that have no
/// tag-association storage.
pub fn association_target(
    resource: &DataLakeResource,
    default_catalog_id: &str,
) -> Result<Option<TagAssociationTarget>, LakeFormationError> {
    match resource {
        DataLakeResource::Database(db) => Ok(Some(TagAssociationTarget::Database(DatabaseTagKey {
            catalog_id: catalog_or(db.catalog_id.as_deref(), default_catalog_id),
            database: db.name.clone(),
        }))),
        DataLakeResource::Table(table) => {
            let Some(name) = &table.name else {
                return Err(LakeFormationError::invalid_input(
                    "Table resources must be specified by name for tag operations.",
                ));
            };
            Ok(Some(TagAssociationTarget::Table(TableTagKey {
                catalog_id: catalog_or(table.catalog_id.as_deref(), default_catalog_id),
                database: table.database_name.clone(),
                table: name.clone(),
            })))
        }
        DataLakeResource::TableWithColumns(twc) => {
            let catalog_id = catalog_or(twc.catalog_id.as_deref(), default_catalog_id);
            let keys = twc
                .column_names
                .iter()
                .map(|column| ColumnTagKey {
                    catalog_id: catalog_id.clone(),
                    database: twc.database_name.clone(),
                    table: twc.name.clone(),
                    column: column.clone(),
                })
                .collect();
            Ok(Some(TagAssociationTarget::Columns(keys)))
        }
        _ => Ok(None),
    }
}

fn catalog_or(catalog_id: Option<&str>, default_catalog_id: &str) -> String {
    catalog_id.unwrap_or(default_catalog_id).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockstack_lakeformation_model::types::{
        CatalogResource, DatabaseResource, TableResource, TableWildcard,
        TableWithColumnsResource,
    };

    #[test]
    fn test_should_default_catalog_id_to_account() {
        let resource = DataLakeResource::Database(DatabaseResource {
            catalog_id: None,
            name: "db".to_owned(),
        });
        let target = association_target(&resource, "123456789012").unwrap();
        assert_eq!(
            target,
            Some(TagAssociationTarget::Database(DatabaseTagKey {
                catalog_id: "123456789012".to_owned(),
                database: "db".to_owned(),
            }))
        );
    }

    #[test]
    fn test_should_expand_columns_into_one_key_each() {
        let resource = DataLakeResource::TableWithColumns(TableWithColumnsResource {
            catalog_id: Some("cat".to_owned()),
            database_name: "db".to_owned(),
            name: "t".to_owned(),
            column_names: vec!["c1".to_owned(), "c2".to_owned()],
            column_wildcard: None,
        });
        let Some(TagAssociationTarget::Columns(keys)) =
            association_target(&resource, "123456789012").unwrap()
        else {
            panic!("expected column target");
        };
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].column, "c1");
        assert_eq!(keys[1].catalog_id, "cat");
    }

    #[test]
    fn test_should_reject_wildcard_tables() {
        let resource = DataLakeResource::Table(TableResource {
            catalog_id: None,
            database_name: "db".to_owned(),
            name: None,
            table_wildcard: Some(TableWildcard {}),
        });
        assert!(association_target(&resource, "123456789012").is_err());
    }

    #[test]
    fn test_should_have_no_target_for_catalog_resources() {
        let resource = DataLakeResource::Catalog(CatalogResource {});
        assert_eq!(association_target(&resource, "123456789012").unwrap(), None);
    }
}
