//! Equipment entries on a character sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::equipment_to_string;

/// One line of equipment: either free text or a structured item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EquipmentItem {
    Plain(String),
    Structured(StructuredItem),
}

impl From<&str> for EquipmentItem {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&equipment_to_string(self))
    }
}

/// An item with quantity, category, notes and contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Names of items packed inside (a backpack, a pouch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

impl StructuredItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_contents(mut self, contents: Vec<String>) -> Self {
        self.contents = Some(contents);
        self
    }
}
