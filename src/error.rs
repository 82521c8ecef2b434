// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("No pluralization rule matched '{word}'")]
    #[diagnostic(
        code(themekit::inflector::no_rule),
        help("Add an explicit plural to the post type or taxonomy config")
    )]
    NoRuleMatched { word: String },

    #[error("Invalid post type '{name}': {reason}")]
    #[diagnostic(
        code(themekit::post_type::invalid),
        help("Post type names must be 1-20 characters")
    )]
    InvalidPostType { name: String, reason: String },

    #[error("Post type '{0}' is not configured")]
    #[diagnostic(
        code(themekit::post_type::unknown),
        help("List configured post types with: themekit config")
    )]
    UnknownPostType(String),

    #[error("Post type '{post_type}' has no meta box titled '{title}'")]
    #[diagnostic(code(themekit::meta_box::unknown))]
    UnknownMetaBox { post_type: String, title: String },

    #[error("Template error: {0}")]
    #[diagnostic(code(themekit::render::template))]
    Template(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(themekit::config::error))]
    Config(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        // tera nests the useful message in the source chain
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(inner) = source {
            msg.push_str(": ");
            msg.push_str(&inner.to_string());
            source = std::error::Error::source(inner);
        }
        Error::Template(msg)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
