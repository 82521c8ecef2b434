// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashMap;

use tracing::debug;

use crate::domain::InputKind;

pub type PostId = u64;

/// Post-meta storage owned by the host.
pub trait MetaStore {
    fn get(&self, post_id: PostId, key: &str) -> Option<String>;
    fn update(&mut self, post_id: PostId, key: &str, value: &str);
}

/// In-memory store, used for previews and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryMetaStore {
    values: HashMap<(PostId, String), String>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl MetaStore for MemoryMetaStore {
    fn get(&self, post_id: PostId, key: &str) -> Option<String> {
        self.values.get(&(post_id, key.to_string())).cloned()
    }

    fn update(&mut self, post_id: PostId, key: &str, value: &str) {
        self.values
            .insert((post_id, key.to_string()), value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: String,
    pub is_file: bool,
}

/// Field names rendered for one edit request, handed to the save step.
#[derive(Debug, Default, Clone)]
pub struct FormContext {
    fields: Vec<RenderedField>,
}

/// Values posted back from the edit screen.
#[derive(Debug, Default, Clone)]
pub struct Submission {
    pub values: HashMap<String, String>,
    pub autosave: bool,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn autosave(mut self) -> Self {
        self.autosave = true;
        self
    }
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a rendered field. Repeat names are recorded once.
    pub fn record(&mut self, name: &str, input: &InputKind) {
        if self.fields.iter().any(|f| f.name == name) {
            return;
        }
        self.fields.push(RenderedField {
            name: name.to_string(),
            is_file: input.is_file(),
        });
    }

    pub fn fields(&self) -> &[RenderedField] {
        &self.fields
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Persist the submitted values of every recorded field.
    ///
    /// Fields missing from the submission are stored as `""` so that an
    /// unchecked checkbox clears its value. File inputs are left to the host.
    /// Returns the number of values written.
    pub fn save(self, submission: &Submission, post_id: PostId, store: &mut dyn MetaStore) -> usize {
        if submission.autosave {
            debug!(post_id, "autosave, skipping meta update");
            return 0;
        }

        let mut written = 0;
        for field in &self.fields {
            if field.is_file {
                debug!(field = %field.name, "file input left to host upload handling");
                continue;
            }

            let value = submission
                .values
                .get(&field.name)
                .map(String::as_str)
                .unwrap_or("");
            store.update(post_id, &field.name, value);
            written += 1;
        }

        debug!(post_id, written, "meta saved");
        written
    }
}
