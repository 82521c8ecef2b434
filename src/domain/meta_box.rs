// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Extensions previewed inline as images under a file input.
const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "bmp", "gif", "png"];

/// Input control for a meta box field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Textarea,
    Checkbox,
    Select { options: Vec<String> },
    File,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Select { .. } => "select",
            Self::File => "file",
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    #[serde(flatten)]
    pub input: InputKind,
}

impl Field {
    pub fn new(label: impl Into<String>, input: InputKind) -> Self {
        Self {
            label: label.into(),
            input,
        }
    }

    /// Form and post-meta key: `"Movie Info"` / `"Release Date"` becomes
    /// `movie_info_release_date`.
    pub fn form_name(&self, box_id: &str) -> String {
        format!("{}_{}", box_id, to_key(&self.label))
    }
}

/// A panel of custom fields on a post type's edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaBox {
    pub id: String,
    pub title: String,
    pub post_type: String,
    pub context: String,
    pub priority: String,
    pub fields: Vec<Field>,
}

impl MetaBox {
    pub fn new(title: &str, post_type: &str, fields: Vec<Field>) -> Self {
        Self {
            id: to_key(title),
            title: title.to_string(),
            post_type: post_type.to_string(),
            context: "normal".into(),
            priority: "default".into(),
            fields,
        }
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.form_name(&self.id)).collect()
    }
}

fn to_key(s: &str) -> String {
    s.to_lowercase().replace(' ', "_")
}

/// Whether a stored file URL should be previewed as an image.
pub fn is_image_url(url: &str) -> bool {
    Path::new(url)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
