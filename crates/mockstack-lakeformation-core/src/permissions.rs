//! Grant filtering predicates for `ListPermissions`.
//!
//! Three independent filters apply in sequence: principal equality (plain
//! `==` on the descriptor, applied at the call site), resource-type
//! membership, and resource-shape matching. Shape matching is a priority
//! cascade: a catalog comparison outranks a database comparison, which
//! outranks a table comparison. Descriptor combinations with no cascade arm
//! are an explicit no-match.

use mockstack_lakeformation_model::types::{DataLakeResource, DataLakeResourceType};

/// Whether a stored grant's resource belongs to the given resource type.
///
/// `Table` covers both plain tables and tables-with-columns; grant targets
/// outside the four filterable types never match.
#[must_use]
pub fn matches_resource_type(grant: &DataLakeResource, resource_type: &DataLakeResourceType) -> bool {
    match resource_type {
        DataLakeResourceType::Catalog => matches!(grant, DataLakeResource::Catalog(_)),
        DataLakeResourceType::Database => matches!(grant, DataLakeResource::Database(_)),
        DataLakeResourceType::DataLocation => matches!(grant, DataLakeResource::DataLocation(_)),
        DataLakeResourceType::Table => matches!(
            grant,
            DataLakeResource::Table(_) | DataLakeResource::TableWithColumns(_)
        ),
        DataLakeResourceType::Unknown(_) => false,
    }
}

/// Whether a stored grant's resource matches the query's resource shape.
///
/// The comparison is evaluated as a priority cascade:
///
/// - catalog query against a catalog grant: the (empty) catalog descriptors
///   compare equal;
/// - database query against a database grant: names must match, and the
///   catalog ID is compared only when the query supplies one;
/// - table query against a table grant: database names must match, catalog
///   ID only when supplied, and the query's name or wildcard must match the
///   grant's.
///
/// Any other combination of query and grant descriptors is no match.
#[must_use]
pub fn matches_resource_shape(query: &DataLakeResource, grant: &DataLakeResource) -> bool {
    match (query, grant) {
        (DataLakeResource::Catalog(q), DataLakeResource::Catalog(g)) => q == g,
        (DataLakeResource::Database(q), DataLakeResource::Database(g)) => {
            if q.name != g.name {
                return false;
            }
            match &q.catalog_id {
                Some(catalog_id) => g.catalog_id.as_ref() == Some(catalog_id),
                None => true,
            }
        }
        (DataLakeResource::Table(q), DataLakeResource::Table(g)) => {
            if q.database_name != g.database_name {
                return false;
            }
            if let Some(catalog_id) = &q.catalog_id {
                if g.catalog_id.as_ref() != Some(catalog_id) {
                    return false;
                }
            }
            if q.name.is_some() && q.table_wildcard.is_none() {
                return q.name == g.name;
            }
            if q.name.is_none() && q.table_wildcard.is_some() {
                return q.table_wildcard == g.table_wildcard;
            }
            // Query tables are validated to carry exactly one of name or
            // wildcard before filtering.
            false
        }
        _ => false,
    }
}
