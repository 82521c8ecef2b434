// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::Cli;
use crate::domain::{Field, InputKind, MAX_POST_TYPE_LEN};
use crate::error::{Error, Result};

pub const PROJECT_CONFIG_FILE: &str = "themekit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    pub name: String,

    /// Plural label; inflected from `name` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,

    /// Overrides merged over the default taxonomy args
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub args: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaBoxConfig {
    pub title: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTypeConfig {
    pub name: String,

    /// Overrides merged over the default registration args
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub args: Map<String, Value>,

    #[serde(default)]
    pub taxonomies: Vec<TaxonomyConfig>,

    #[serde(default)]
    pub meta_boxes: Vec<MetaBoxConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Translation domain handed to the host with every label
    #[serde(default = "default_text_domain")]
    pub text_domain: String,

    /// Sidebar slugs; each registers `<slug>-sidebar`
    #[serde(default = "default_sidebars")]
    pub sidebars: Vec<String>,

    #[serde(default)]
    pub post_types: Vec<PostTypeConfig>,
}

fn default_text_domain() -> String {
    "text_domain".into()
}

fn default_sidebars() -> Vec<String> {
    vec!["home".into(), "page".into(), "blog".into()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_domain: default_text_domain(),
            sidebars: default_sidebars(),
            post_types: Vec::new(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > --config file > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (themekit.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        if let Some(ref path) = cli.config {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables (THEMEKIT_TEXT_DOMAIN, THEMEKIT_SIDEBARS, ...)
        figment = figment.merge(Env::prefixed("THEMEKIT_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a single TOML file without the other layers.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "themekit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.text_domain.trim().is_empty() {
            return Err(Error::Config("text_domain cannot be empty".into()));
        }

        if let Some(slug) = self.sidebars.iter().find(|s| s.trim().is_empty()) {
            return Err(Error::Config(format!("invalid sidebar slug '{slug}'")));
        }

        let mut seen = HashSet::new();
        for post_type in &self.post_types {
            let name = post_type.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(Error::Config("post type name cannot be empty".into()));
            }
            if name.chars().count() > MAX_POST_TYPE_LEN {
                return Err(Error::Config(format!(
                    "post type '{name}' exceeds {MAX_POST_TYPE_LEN} characters"
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(Error::Config(format!("post type '{name}' declared twice")));
            }

            if post_type.taxonomies.iter().any(|t| t.name.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "post type '{name}' has a taxonomy without a name"
                )));
            }

            for meta_box in &post_type.meta_boxes {
                if meta_box.title.trim().is_empty() {
                    return Err(Error::Config(format!(
                        "post type '{name}' has a meta box without a title"
                    )));
                }
                for field in &meta_box.fields {
                    if field.label.trim().is_empty() {
                        return Err(Error::Config(format!(
                            "meta box '{}' has a field without a label",
                            meta_box.title
                        )));
                    }
                    if let InputKind::Select { options } = &field.input {
                        if options.is_empty() {
                            return Err(Error::Config(format!(
                                "select field '{}' needs at least one option",
                                field.label
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the effective config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Write the default config file. Existing files are only replaced when
    /// `overwrite` is set.
    pub fn create_default(path: &Path, overwrite: bool) -> Result<PathBuf> {
        if path.exists() && !overwrite {
            return Err(Error::Config(format!(
                "{} already exists (use --force to replace it)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = r#"# themekit configuration

# Translation domain passed along with generated labels
text_domain = "text_domain"

# Sidebar slugs, each registered as <slug>-sidebar
sidebars = ["home", "page", "blog"]

# Custom post types. Labels ("All Movies", "Add New Movie", ...) are
# generated from the name.
[[post_types]]
name = "movie"

# Registration overrides, merged over the defaults
# [post_types.args]
# menu_position = 5

[[post_types.taxonomies]]
name = "Actor"

[[post_types.taxonomies]]
name = "Director"

[[post_types.meta_boxes]]
title = "Movie Info"
fields = [
  { label = "name", type = "text" },
  { label = "rating", type = "select", options = ["G", "PG", "PG-13", "R"] },
  { label = "review", type = "textarea" },
  { label = "Profile Image", type = "file" },
]
"#;

        fs::write(path, content)?;
        Ok(path.to_path_buf())
    }
}
