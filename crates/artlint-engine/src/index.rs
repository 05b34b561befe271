//! The object index: kind-keyed access to every layer in a document.
//!
//! Rules never walk the document tree themselves. The runner builds one
//! [`ObjectIndex`] per run (a single depth-first traversal) and every rule
//! reads from it, so a run costs O(nodes + rules) rather than
//! O(nodes × rules).

use std::collections::HashSet;

use artlint_document::{Document, Layer, LayerKind};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The closed set of kind tags a rule can query.
///
/// A layer is a member of its specific class and of [`ObjectClass::AnyLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectClass {
    Artboard,
    Text,
    SymbolInstance,
    Group,
    AnyLayer,
}

/// Read-only, document-ordered sequences of layers grouped by kind.
///
/// Built once per run; there is no mutation API.
#[derive(Debug)]
pub struct ObjectIndex<'doc> {
    artboards: Vec<&'doc Layer>,
    text_layers: Vec<&'doc Layer>,
    symbol_instances: Vec<&'doc Layer>,
    groups: Vec<&'doc Layer>,
    any_layer: Vec<&'doc Layer>,
}

impl<'doc> ObjectIndex<'doc> {
    /// Builds the index from a document in a single traversal.
    ///
    /// Structural invariants are checked while walking: every layer must
    /// have a non-empty, document-unique id and a finite, non-negative
    /// frame. The first failure aborts the build with
    /// [`EngineError::DocumentMalformed`].
    pub fn build(document: &'doc Document) -> Result<Self, EngineError> {
        let mut index = Self {
            artboards: Vec::new(),
            text_layers: Vec::new(),
            symbol_instances: Vec::new(),
            groups: Vec::new(),
            any_layer: Vec::new(),
        };
        let mut seen_ids: HashSet<&'doc str> = HashSet::new();
        for (i, layer) in document.layers.iter().enumerate() {
            index.visit(layer, &format!("layers[{}]", i), &mut seen_ids)?;
        }
        Ok(index)
    }

    fn visit(
        &mut self,
        layer: &'doc Layer,
        path: &str,
        seen_ids: &mut HashSet<&'doc str>,
    ) -> Result<(), EngineError> {
        if layer.id.is_empty() {
            return Err(EngineError::DocumentMalformed {
                path: path.to_string(),
                reason: "layer id is empty".to_string(),
            });
        }
        if !seen_ids.insert(&layer.id) {
            return Err(EngineError::DocumentMalformed {
                path: path.to_string(),
                reason: format!("duplicate layer id '{}'", layer.id),
            });
        }
        if !layer.frame.is_valid() {
            return Err(EngineError::DocumentMalformed {
                path: path.to_string(),
                reason: format!(
                    "frame components must be finite and non-negative, got {}x{} at ({}, {})",
                    layer.frame.width, layer.frame.height, layer.frame.x, layer.frame.y
                ),
            });
        }

        self.any_layer.push(layer);
        match layer.kind {
            LayerKind::Artboard => self.artboards.push(layer),
            LayerKind::Text(_) => self.text_layers.push(layer),
            LayerKind::SymbolInstance { .. } => self.symbol_instances.push(layer),
            LayerKind::Group => self.groups.push(layer),
            LayerKind::Shape | LayerKind::Bitmap => {}
        }

        for (i, child) in layer.children.iter().enumerate() {
            self.visit(child, &format!("{}.children[{}]", path, i), seen_ids)?;
        }
        Ok(())
    }

    /// Returns the document-ordered sequence for a kind tag.
    ///
    /// Absent kinds yield an empty slice, never an error.
    pub fn objects(&self, class: ObjectClass) -> &[&'doc Layer] {
        match class {
            ObjectClass::Artboard => &self.artboards,
            ObjectClass::Text => &self.text_layers,
            ObjectClass::SymbolInstance => &self.symbol_instances,
            ObjectClass::Group => &self.groups,
            ObjectClass::AnyLayer => &self.any_layer,
        }
    }

    /// All artboards, in document order.
    pub fn artboards(&self) -> &[&'doc Layer] {
        &self.artboards
    }

    /// All text layers, in document order.
    pub fn text_layers(&self) -> &[&'doc Layer] {
        &self.text_layers
    }

    /// All symbol instances, in document order.
    pub fn symbol_instances(&self) -> &[&'doc Layer] {
        &self.symbol_instances
    }

    /// Every layer in the document, in document order.
    pub fn any_layer(&self) -> &[&'doc Layer] {
        &self.any_layer
    }
}
