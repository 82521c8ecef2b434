// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use console::style;
use dialoguer::Confirm;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{PostType, ThemeManifest};
use crate::error::{Error, Result};
use crate::services::{
    form::{FormContext, MemoryMetaStore},
    inflector::Inflector,
    meta_box::MetaBoxRenderer,
    registry::Registry,
};

pub struct App {
    cli: Cli,
    config: Config,
    inflector: &'static Inflector,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            text_domain = %config.text_domain,
            post_types = config.post_types.len(),
            sidebars = config.sidebars.len(),
            "config loaded"
        );
        Ok(Self {
            cli,
            config,
            inflector: Inflector::english(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        match &self.cli.command {
            Commands::Pluralize { word } => {
                println!("{}", self.inflector.pluralize(word)?);
                Ok(())
            }
            Commands::Singularize { word } => {
                println!("{}", self.inflector.singularize(word));
                Ok(())
            }
            Commands::Labels { post_type } => self.print_labels(post_type),
            Commands::Manifest => self.print_manifest(),
            Commands::Render { post_type, title } => self.render_meta_box(post_type, title),
            Commands::Init { force } => self.init_config(*force),
            Commands::Config => self.show_config(),
        }
    }

    fn print_labels(&self, name: &str) -> Result<()> {
        let post_type = PostType::new(name);
        Registry::validate_post_type(&post_type)?;

        let labels = Registry::new(self.inflector).labels(&post_type);
        println!("{}", serde_json::to_string_pretty(&labels)?);
        Ok(())
    }

    fn print_manifest(&self) -> Result<()> {
        let manifest = ThemeManifest::build(&self.config, self.inflector)?;
        if manifest.post_types.is_empty() {
            self.print_info("No post types configured");
        }
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        Ok(())
    }

    fn render_meta_box(&self, post_type: &str, title: &str) -> Result<()> {
        let meta_box = self.config.find_meta_box(post_type, title)?;
        let renderer = MetaBoxRenderer::new()?;
        let store = MemoryMetaStore::new();
        let mut form = FormContext::new();

        let html = renderer.render(&meta_box, 0, &store, &mut form)?;
        debug!(fields = ?form.names(), "form fields recorded");

        println!("{html}");
        Ok(())
    }

    fn init_config(&self, force: bool) -> Result<()> {
        let Some(path) = Config::config_path() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        let mut overwrite = force;
        if path.exists() && !force {
            if !std::io::stdin().is_terminal() {
                return Err(Error::Config(format!(
                    "{} already exists (use --force to replace it)",
                    path.display()
                )));
            }
            overwrite = Confirm::new()
                .with_prompt(format!("Replace {}?", path.display()))
                .default(false)
                .interact()?;
            if !overwrite {
                return Err(Error::Cancelled);
            }
        }

        let path = Config::create_default(&path, overwrite)?;
        self.print_success(&format!("Created config: {}", path.display()));
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        if let Some(path) = Config::config_path() {
            self.print_info(&format!("User config: {}", path.display()));
        }
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan().bold(), msg);
    }

    fn print_success(&self, msg: &str) {
        eprintln!("{} {}", style("✓").green().bold(), msg);
    }
}
