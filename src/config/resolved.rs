//! Resolved registry: validated resources indexed for runtime lookup.

use crate::config::ResourceSpec;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    resources: Vec<Arc<ResourceSpec>>,
    by_name: HashMap<&'static str, Arc<ResourceSpec>>,
}

impl ResourceRegistry {
    pub(crate) fn from_specs(specs: Vec<ResourceSpec>) -> Self {
        let resources: Vec<Arc<ResourceSpec>> = specs.into_iter().map(Arc::new).collect();
        let by_name = resources.iter().map(|r| (r.name, Arc::clone(r))).collect();
        ResourceRegistry { resources, by_name }
    }

    pub fn get(&self, name: &str) -> Option<Arc<ResourceSpec>> {
        self.by_name.get(name).cloned()
    }

    /// Resources in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ResourceSpec>> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
