//! Side-by-side comparison set, bounded to a handful of listings.

use crate::core::catalog::{Catalog, Property};
use anyhow::{Result, bail};

/// Upper bound on simultaneously compared listings.
pub const MAX_COMPARED: usize = 4;

/// An ordered selection of listings for side-by-side comparison.
/// Duplicates and overflow are rejected; the set never evicts.
#[derive(Debug, Default)]
pub struct ComparisonSet {
    entries: Vec<Property>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, property: &Property) -> Result<()> {
        if self.contains(property.id) {
            bail!("Property {} is already being compared", property.id);
        }
        if self.is_full() {
            bail!("Comparison is limited to {MAX_COMPARED} properties");
        }
        self.entries.push(property.clone());
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() < before
    }

    /// Tops the set up to the cap with the first catalog listings not
    /// already present, in catalog order.
    pub fn fill_from(&mut self, catalog: &Catalog) {
        for property in catalog.properties() {
            if self.is_full() {
                break;
            }
            if !self.contains(property.id) {
                self.entries.push(property.clone());
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COMPARED
    }
}
