// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "themekit")]
#[command(version)]
#[command(about = "Theme registration descriptors and English noun inflection", long_about = None)]
pub struct Cli {
    /// Config file layered over the project and user config
    #[arg(short, long, env = "THEMEKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the plural form of a noun
    Pluralize {
        word: String,
    },
    /// Print the singular form of a noun
    Singularize {
        word: String,
    },
    /// Print the admin labels generated for a post type name
    Labels {
        post_type: String,
    },
    /// Print every registration the configured theme performs, as JSON
    Manifest,
    /// Print the edit-screen markup of a configured meta box
    Render {
        post_type: String,
        title: String,
    },
    /// Initialize config file
    Init {
        /// Replace an existing config file without asking
        #[arg(long)]
        force: bool,
    },
    /// Show current configuration
    Config,
}
