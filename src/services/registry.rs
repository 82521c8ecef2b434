// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::domain::{
    MAX_POST_TYPE_LEN, PostType, PostTypeLabels, PostTypeRegistration, Taxonomy,
    TaxonomyRegistration,
};
use crate::error::{Error, Result};
use crate::services::inflector::Inflector;

/// Builds host registration descriptors for post types and taxonomies.
pub struct Registry<'a> {
    inflector: &'a Inflector,
}

impl Default for Registry<'static> {
    fn default() -> Self {
        Self::new(Inflector::english())
    }
}

impl<'a> Registry<'a> {
    pub fn new(inflector: &'a Inflector) -> Self {
        Self { inflector }
    }

    pub fn validate_post_type(post_type: &PostType) -> Result<()> {
        if post_type.name.is_empty() {
            return Err(Error::InvalidPostType {
                name: post_type.name.clone(),
                reason: "name is empty".into(),
            });
        }

        let len = post_type.name.chars().count();
        if len > MAX_POST_TYPE_LEN {
            return Err(Error::InvalidPostType {
                name: post_type.name.clone(),
                reason: format!("{len} characters exceeds the limit of {MAX_POST_TYPE_LEN}"),
            });
        }

        Ok(())
    }

    pub fn labels(&self, post_type: &PostType) -> PostTypeLabels {
        let display = title_case(&post_type.name);

        let plural = match self.inflector.pluralize(&display) {
            Ok(plural) => plural,
            Err(e) => {
                warn!(post_type = %post_type.name, error = %e, "using name as plural label");
                display.clone()
            }
        };
        let singular = self.inflector.singularize(&display);

        PostTypeLabels::from_forms(&plural, &singular)
    }

    pub fn register_post_type(&self, post_type: &PostType) -> Result<PostTypeRegistration> {
        Self::validate_post_type(post_type)?;

        let labels = self.labels(post_type);
        let defaults = json!({
            "labels": labels,
            "singular_name": labels.singular_name,
            "public": true,
            "publicly_queryable": true,
            "query_var": true,
            "rewrite": true,
            "capability_type": "post",
            "hierarchical": false,
            "menu_position": null,
            "supports": ["title", "editor", "thumbnail"],
            "has_archive": true,
        });

        let args = merge_args(into_map(defaults), &post_type.args);
        debug!(
            post_type = %post_type.name,
            overrides = post_type.args.len(),
            "post type registration built"
        );

        Ok(PostTypeRegistration {
            name: post_type.name.clone(),
            args,
        })
    }

    pub fn register_taxonomy(&self, taxonomy: &Taxonomy, post_type: &PostType) -> TaxonomyRegistration {
        let label = title_case(&taxonomy.name);
        let plural = taxonomy
            .plural
            .clone()
            .unwrap_or_else(|| self.inflector.pluralize_or_original(&taxonomy.name));
        let key = label.to_lowercase();

        let defaults = json!({
            "hierarchical": false,
            "label": label,
            "singular_label": plural,
            "show_ui": true,
            "query_var": true,
            "rewrite": { "slug": key },
        });

        TaxonomyRegistration {
            name: key,
            object_type: post_type.name.clone(),
            args: merge_args(into_map(defaults), &taxonomy.args),
        }
    }
}

/// Shallow merge: top-level keys in `overrides` replace the defaults.
pub fn merge_args(mut defaults: Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overrides {
        defaults.insert(key.clone(), value.clone());
    }
    defaults
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Upper-case the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Upper-case only the first letter.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("book review"), "Book Review");
        assert_eq!(title_case("movie"), "Movie");
        assert_eq!(title_case("  spaced  out"), "  Spaced  Out");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn capitalize_first_only() {
        assert_eq!(capitalize_first("home sidebar"), "Home sidebar");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn merge_replaces_top_level_only() {
        let defaults = into_map(json!({ "a": 1, "b": { "x": 1, "y": 2 } }));
        let overrides = into_map(json!({ "b": { "x": 9 }, "c": true }));
        let merged = merge_args(defaults, &overrides);
        assert_eq!(
            Value::Object(merged),
            json!({ "a": 1, "b": { "x": 9 }, "c": true })
        );
    }
}
