// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::config::{Config, PostTypeConfig};
use crate::domain::{
    MetaBox, NavMenu, PostType, Sidebar, Taxonomy, ThemeManifest, ThemeSupport,
};
use crate::error::{Error, Result};
use crate::services::inflector::Inflector;
use crate::services::registry::{Registry, capitalize_first};

const NAV_MENUS: &[(&str, &str)] = &[
    ("main-menu", "Main Menu"),
    ("sub-menu", "Sub Menu"),
    ("sidebar-menu", "Sidebar Menu"),
    ("footer-menu", "Footer Menu"),
];

const HTML5_FEATURES: &[&str] = &[
    "search-form",
    "comment-form",
    "comment-list",
    "gallery",
    "caption",
];

pub fn theme_supports() -> Vec<ThemeSupport> {
    let feature = |name: &str, args: &[&str]| ThemeSupport {
        feature: name.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    };

    vec![
        feature("post-thumbnails", &[]),
        feature("html5", HTML5_FEATURES),
        feature("title-tag", &[]),
        feature("automatic-feed-links", &[]),
    ]
}

pub fn nav_menus() -> Vec<NavMenu> {
    NAV_MENUS
        .iter()
        .map(|(location, description)| NavMenu {
            location: location.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn sidebar(slug: &str) -> Sidebar {
    Sidebar {
        name: capitalize_first(&format!("{slug} sidebar")),
        id: format!("{slug}-sidebar"),
        description: String::new(),
        class: String::new(),
        before_widget: r#"<li id="%1$s" class="widget %2$s">"#.into(),
        after_widget: "</li>".into(),
        before_title: r#"<h2 class="widgettitle">"#.into(),
        after_title: "</h2>".into(),
    }
}

impl PostTypeConfig {
    pub fn post_type(&self) -> PostType {
        PostType::new(&self.name).with_args(self.args.clone())
    }

    pub fn taxonomies(&self) -> Vec<Taxonomy> {
        self.taxonomies
            .iter()
            .map(|t| {
                let taxonomy = Taxonomy::new(&t.name).with_args(t.args.clone());
                match &t.plural {
                    Some(plural) => taxonomy.with_plural(plural.clone()),
                    None => taxonomy,
                }
            })
            .collect()
    }

    pub fn meta_boxes(&self) -> Vec<MetaBox> {
        let post_type = self.post_type();
        self.meta_boxes
            .iter()
            .map(|m| MetaBox::new(&m.title, &post_type.name, m.fields.clone()))
            .collect()
    }
}

impl Config {
    pub fn find_post_type(&self, name: &str) -> Result<&PostTypeConfig> {
        let wanted = name.trim().to_lowercase();
        self.post_types
            .iter()
            .find(|p| p.name.trim().to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownPostType(name.to_string()))
    }

    pub fn find_meta_box(&self, post_type: &str, title: &str) -> Result<MetaBox> {
        self.find_post_type(post_type)?
            .meta_boxes()
            .into_iter()
            .find(|m| m.title.eq_ignore_ascii_case(title.trim()))
            .ok_or_else(|| Error::UnknownMetaBox {
                post_type: post_type.to_string(),
                title: title.to_string(),
            })
    }
}

impl ThemeManifest {
    /// Collect every registration the configured theme performs.
    pub fn build(config: &Config, inflector: &Inflector) -> Result<Self> {
        let registry = Registry::new(inflector);

        let mut post_types = Vec::with_capacity(config.post_types.len());
        let mut taxonomies = Vec::new();
        let mut meta_boxes = Vec::new();

        for entry in &config.post_types {
            let post_type = entry.post_type();
            post_types.push(registry.register_post_type(&post_type)?);

            for taxonomy in entry.taxonomies() {
                taxonomies.push(registry.register_taxonomy(&taxonomy, &post_type));
            }
            meta_boxes.extend(entry.meta_boxes());
        }

        debug!(
            post_types = post_types.len(),
            taxonomies = taxonomies.len(),
            meta_boxes = meta_boxes.len(),
            "theme manifest built"
        );

        Ok(Self {
            text_domain: config.text_domain.clone(),
            supports: theme_supports(),
            menus: nav_menus(),
            sidebars: config.sidebars.iter().map(|s| sidebar(s)).collect(),
            post_types,
            taxonomies,
            meta_boxes,
        })
    }
}
