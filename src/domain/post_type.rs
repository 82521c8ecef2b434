// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Longest post type key the host accepts.
pub const MAX_POST_TYPE_LEN: usize = 20;

/// A custom post type as declared by the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct PostType {
    /// Lower-cased registration key
    pub name: String,
    /// User overrides merged over the default registration args
    pub args: Map<String, Value>,
}

impl PostType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            args: Map::new(),
        }
    }

    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = args;
        self
    }
}

/// Admin UI labels derived from the post type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeLabels {
    pub name: String,
    pub singular_name: String,
    pub menu_name: String,
    pub parent_item_colon: String,
    pub all_items: String,
    pub view_item: String,
    pub add_new_item: String,
    pub add_new: String,
    pub edit_item: String,
    pub update_item: String,
    pub search_items: String,
    pub not_found: String,
    pub not_found_in_trash: String,
}

impl PostTypeLabels {
    pub fn from_forms(plural: &str, singular: &str) -> Self {
        Self {
            name: plural.to_string(),
            singular_name: singular.to_string(),
            menu_name: plural.to_string(),
            parent_item_colon: format!("Parent {singular}:"),
            all_items: format!("All {plural}"),
            view_item: format!("View {singular}"),
            add_new_item: format!("Add New {singular}"),
            add_new: format!("Add New {singular}"),
            edit_item: format!("Edit {singular}"),
            update_item: format!("Update {singular}"),
            search_items: format!("Search {plural}"),
            not_found: format!("{singular} Not found"),
            not_found_in_trash: format!("{singular} Not found in Trash"),
        }
    }
}

/// Everything the host needs to register a post type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostTypeRegistration {
    pub name: String,
    pub args: Map<String, Value>,
}
