// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    pub name: String,
    /// Explicit plural; inflected from `name` when absent
    pub plural: Option<String>,
    pub args: Map<String, Value>,
}

impl Taxonomy {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            plural: None,
            args: Map::new(),
        }
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        let plural = plural.into();
        self.plural = (!plural.trim().is_empty()).then_some(plural);
        self
    }

    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = args;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonomyRegistration {
    pub name: String,
    pub object_type: String,
    pub args: Map<String, Value>,
}
