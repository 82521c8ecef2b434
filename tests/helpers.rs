// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use themekit::config::{Config, MetaBoxConfig, PostTypeConfig, TaxonomyConfig};
use themekit::domain::{Field, InputKind, MetaBox};

/// The "Movie Info" box from the default config, one field of every kind
#[allow(dead_code)]
pub fn movie_info_fields() -> Vec<Field> {
    vec![
        Field::new("name", InputKind::Text),
        Field::new(
            "rating",
            InputKind::Select {
                options: vec!["G".into(), "PG".into(), "R".into()],
            },
        ),
        Field::new("review", InputKind::Textarea),
        Field::new("featured", InputKind::Checkbox),
        Field::new("Profile Image", InputKind::File),
    ]
}

#[allow(dead_code)]
pub fn movie_info_box() -> MetaBox {
    MetaBox::new("Movie Info", "movie", movie_info_fields())
}

/// Config with a single "movie" post type
#[allow(dead_code)]
pub fn movie_config() -> Config {
    Config {
        post_types: vec![PostTypeConfig {
            name: "movie".into(),
            args: Default::default(),
            taxonomies: vec![
                TaxonomyConfig {
                    name: "Actor".into(),
                    plural: None,
                    args: Default::default(),
                },
                TaxonomyConfig {
                    name: "Director".into(),
                    plural: Some("Directors".into()),
                    args: Default::default(),
                },
            ],
            meta_boxes: vec![MetaBoxConfig {
                title: "Movie Info".into(),
                fields: movie_info_fields(),
            }],
        }],
        ..Config::default()
    }
}
