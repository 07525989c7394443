//! Registry validation: unique resources and consistent shape tables.

use crate::config::{RequestShape, ResourceSpec, ResponseShape};
use crate::error::ConfigError;
use crate::mapping::{Field, Rename};
use std::collections::HashSet;

/// A request table must map admin and backend names one to one, at every
/// nesting level.
pub fn check_renames(resource: &str, table: &[Rename]) -> Result<(), ConfigError> {
    let mut admin = HashSet::new();
    let mut backend = HashSet::new();
    for rename in table {
        for (seen, field) in [(&mut admin, rename.admin), (&mut backend, rename.backend)] {
            if !seen.insert(field) {
                return Err(ConfigError::NonBijectiveRename {
                    resource: resource.to_string(),
                    field: field.to_string(),
                });
            }
        }
        if let Some(nested) = rename.nested {
            check_renames(&format!("{}.{}", resource, rename.admin), nested)?;
        }
    }
    Ok(())
}

/// A response table may read one backend field twice but must not emit an
/// admin field twice.
pub fn check_fields(resource: &str, table: &[Field]) -> Result<(), ConfigError> {
    let mut ui = HashSet::new();
    for field in table {
        if !ui.insert(field.ui) {
            return Err(ConfigError::NonBijectiveRename {
                resource: resource.to_string(),
                field: field.ui.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate(resources: &[ResourceSpec]) -> Result<(), ConfigError> {
    let mut names = HashSet::new();
    for spec in resources {
        if !names.insert(spec.name) {
            return Err(ConfigError::DuplicateResource(spec.name.to_string()));
        }
        for (field, value) in [
            ("backend_path", spec.backend_path),
            ("singular", spec.singular),
            ("plural", spec.plural),
            ("object", spec.object),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Incomplete {
                    resource: spec.name.to_string(),
                    field,
                });
            }
        }
        if spec.default_limit == 0 {
            return Err(ConfigError::Incomplete {
                resource: spec.name.to_string(),
                field: "default_limit",
            });
        }
        for shape in [spec.create_body, spec.update_body] {
            if let RequestShape::Renamed(table) = shape {
                check_renames(spec.name, table)?;
            }
        }
        for shape in [spec.list_item, spec.entity, spec.updated] {
            if let ResponseShape::Fields(table) = shape {
                check_fields(spec.name, table)?;
            }
        }
    }
    Ok(())
}
