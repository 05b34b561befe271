//! Layer types: geometry, kind tags, and kind-specific attributes.

use serde::{Deserialize, Serialize};

/// Position and size of a layer, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Creates a frame with an explicit origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a frame of the given size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Returns true if every component is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Text-specific attributes of a text layer.
///
/// Font fields are optional: a text layer may inherit its style from a
/// shared text style the loader did not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttributes {
    /// The rendered string content.
    pub content: String,
    /// PostScript-style font name, e.g. "SFProText-Regular".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// The kind tag of a layer, with kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayerKind {
    /// A top-level screen/canvas container.
    Artboard,
    /// A text layer.
    Text(TextAttributes),
    /// An instance of a shared symbol.
    SymbolInstance {
        /// Name of the symbol master this instance points at.
        master: String,
    },
    /// A grouping container with no visual content of its own.
    Group,
    /// A vector shape.
    Shape,
    /// A raster image layer.
    Bitmap,
}

impl LayerKind {
    /// Returns the kind tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Artboard => "artboard",
            LayerKind::Text(_) => "text",
            LayerKind::SymbolInstance { .. } => "symbol-instance",
            LayerKind::Group => "group",
            LayerKind::Shape => "shape",
            LayerKind::Bitmap => "bitmap",
        }
    }
}

/// A single node in the document tree.
///
/// Layers are immutable for the duration of a lint run; the id must be
/// unique across the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Document-unique identifier.
    pub id: String,
    /// Human-visible layer name.
    pub name: String,
    /// Geometry relative to the parent.
    pub frame: Frame,
    /// Kind tag and kind-specific attributes.
    pub kind: LayerKind,
    /// True if the layer carries a prototype interaction (a "flow").
    #[serde(default)]
    pub flow: bool,
    /// Child layers, in document order.
    #[serde(default)]
    pub children: Vec<Layer>,
}

impl Layer {
    /// Creates a layer of the given kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, frame: Frame, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frame,
            kind,
            flow: false,
            children: Vec::new(),
        }
    }

    /// Creates an artboard layer.
    pub fn artboard(id: impl Into<String>, name: impl Into<String>, frame: Frame) -> Self {
        Self::new(id, name, frame, LayerKind::Artboard)
    }

    /// Creates a text layer with the given content.
    pub fn text(
        id: impl Into<String>,
        name: impl Into<String>,
        frame: Frame,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            frame,
            LayerKind::Text(TextAttributes {
                content: content.into(),
                font_name: None,
                font_size: None,
            }),
        )
    }

    /// Creates a symbol-instance layer.
    pub fn symbol_instance(
        id: impl Into<String>,
        name: impl Into<String>,
        frame: Frame,
        master: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            frame,
            LayerKind::SymbolInstance {
                master: master.into(),
            },
        )
    }

    /// Creates a group layer.
    pub fn group(id: impl Into<String>, name: impl Into<String>, frame: Frame) -> Self {
        Self::new(id, name, frame, LayerKind::Group)
    }

    /// Creates a shape layer.
    pub fn shape(id: impl Into<String>, name: impl Into<String>, frame: Frame) -> Self {
        Self::new(id, name, frame, LayerKind::Shape)
    }

    /// Builder method to mark the layer as interactive.
    pub fn with_flow(mut self) -> Self {
        self.flow = true;
        self
    }

    /// Builder method to append a child layer.
    pub fn with_child(mut self, child: Layer) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method to set the font of a text layer.
    ///
    /// Has no effect on non-text layers.
    pub fn with_font(mut self, font_name: impl Into<String>, font_size: f64) -> Self {
        if let LayerKind::Text(ref mut attrs) = self.kind {
            attrs.font_name = Some(font_name.into());
            attrs.font_size = Some(font_size);
        }
        self
    }

    /// Returns the text attributes if this is a text layer.
    pub fn text_attributes(&self) -> Option<&TextAttributes> {
        match self.kind {
            LayerKind::Text(ref attrs) => Some(attrs),
            _ => None,
        }
    }
}
