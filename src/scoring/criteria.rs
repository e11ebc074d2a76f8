//! Criterion catalog

use serde::{Deserialize, Serialize};

use crate::models::Event;

/// Ordered list of scoring criterion labels for one event.
///
/// Loaded once per event; the position of a label is the criterion index
/// used on score sheets. Labels carry no weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionCatalog {
    labels: Vec<String>,
}

impl CriterionCatalog {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a criterion index, if the index is in range
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Whether `index` addresses a criterion of this catalog
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.labels.len()
    }
}

impl From<&Event> for CriterionCatalog {
    fn from(event: &Event) -> Self {
        Self::new(event.criteria.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CriterionCatalog {
        CriterionCatalog::new(vec![
            "Creativity".to_string(),
            "Execution".to_string(),
            "Presentation".to_string(),
        ])
    }

    #[test]
    fn test_index_bounds() {
        let catalog = catalog();
        assert!(catalog.contains_index(0));
        assert!(catalog.contains_index(2));
        assert!(!catalog.contains_index(3));
    }

    #[test]
    fn test_label_lookup_preserves_order() {
        let catalog = catalog();
        assert_eq!(catalog.label(1), Some("Execution"));
        assert_eq!(catalog.label(9), None);
    }
}
