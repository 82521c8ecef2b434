// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

use super::{MetaBox, PostTypeRegistration, TaxonomyRegistration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSupport {
    pub feature: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub name: String,
    pub id: String,
    pub description: String,
    pub class: String,
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

/// Everything the theme asks the host to register, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeManifest {
    pub text_domain: String,
    pub supports: Vec<ThemeSupport>,
    pub menus: Vec<NavMenu>,
    pub sidebars: Vec<Sidebar>,
    pub post_types: Vec<PostTypeRegistration>,
    pub taxonomies: Vec<TaxonomyRegistration>,
    pub meta_boxes: Vec<MetaBox>,
}
