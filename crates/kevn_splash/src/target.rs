// SPDX-License-Identifier: MIT OR Apache-2.0
//! Visual targets animated by the splash timeline.
//!
//! The host owns the elements on a [`Stage`]; timelines refer to them only
//! through [`TargetId`]s and look them up every tick, so an element that
//! has been unmounted simply stops receiving mutations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a visual element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub Uuid);

impl TargetId {
    /// Create a new random target ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation state of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Opacity (0 = hidden)
    pub opacity: f32,
    /// Horizontal offset in pixels
    pub translate_x: f32,
    /// Vertical offset in pixels
    pub translate_y: f32,
    /// Uniform scale
    pub scale: f32,
    /// Fill fraction for bar-like elements (0..=1)
    pub fill: f32,
    /// Text content, if the element shows text
    pub text: Option<String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            fill: 0.0,
            text: None,
        }
    }
}

impl Presentation {
    /// Hidden and pushed down, the state splash elements start in
    pub fn hidden(offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset_y,
            ..Self::default()
        }
    }

    /// Set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A mounted element
#[derive(Debug, Clone)]
pub struct Element {
    /// Element name (for lookup and logging)
    pub name: String,
    /// Current presentation
    pub presentation: Presentation,
}

/// Host-owned collection of mounted elements
#[derive(Debug, Default)]
pub struct Stage {
    elements: IndexMap<TargetId, Element>,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element and return its target ID
    pub fn mount(&mut self, name: impl Into<String>, presentation: Presentation) -> TargetId {
        let id = TargetId::new();
        self.elements.insert(
            id,
            Element {
                name: name.into(),
                presentation,
            },
        );
        id
    }

    /// Unmount an element
    pub fn unmount(&mut self, id: TargetId) -> Option<Element> {
        self.elements.shift_remove(&id)
    }

    /// Get an element
    pub fn get(&self, id: TargetId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable element
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Find an element by name
    pub fn by_name(&self, name: &str) -> Option<(TargetId, &Element)> {
        self.elements
            .iter()
            .find(|(_, e)| e.name == name)
            .map(|(id, e)| (*id, e))
    }

    /// Check whether a target is mounted
    pub fn contains(&self, id: TargetId) -> bool {
        self.elements.contains_key(&id)
    }

    /// All elements in mount order
    pub fn elements(&self) -> impl Iterator<Item = (&TargetId, &Element)> {
        self.elements.iter()
    }

    /// Number of mounted elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing is mounted
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
