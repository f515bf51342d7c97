use std::collections::HashMap;

use super::{ContentItem, Section};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog for {0} has no entries")]
    Empty(Section),
    #[error("Duplicate content id '{id}' in {section}")]
    DuplicateId { section: Section, id: String },
}

/// Immutable, ordered collection of content items with keyed lookup.
///
/// Iteration follows declaration order; lookups go through an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    section: Section,
    items: Vec<ContentItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(section: Section, items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty(section));
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    section,
                    id: item.id.clone(),
                });
            }
        }

        Ok(Self {
            section,
            items,
            index,
        })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Id selected when navigation supplies none: the first entry.
    pub fn default_id(&self) -> &str {
        &self.items[0].id
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `id` in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Entry at `position` in declaration order.
    pub fn at(&self, position: usize) -> Option<&ContentItem> {
        self.items.get(position)
    }
}
