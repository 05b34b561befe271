//! The document root type.

use serde::{Deserialize, Serialize};

use crate::layer::Layer;

/// A complete design document: an ordered tree of layers.
///
/// The document is produced once (by an external loader or by hand in
/// tests) and never mutated while rules run against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Root layers in document order. Artboards are typically roots, but
    /// loose layers outside any artboard are allowed.
    pub layers: Vec<Layer>,
}

impl Document {
    /// Creates a document from its root layers.
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Creates an empty document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the total number of layers in the tree.
    pub fn layer_count(&self) -> usize {
        fn count(layers: &[Layer]) -> usize {
            layers.iter().map(|l| 1 + count(&l.children)).sum()
        }
        count(&self.layers)
    }
}
