//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// txt-site - page helpers for the txt.jarred.eu site
#[derive(Parser, Debug)]
#[command(name = "txt-site", version, about = "Resolve page titles and links for the site")]
pub struct Cli {
    /// Site config file (YAML)
    #[arg(short, long, global = true, default_value = "site.yaml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the page title of each content file
    Titles {
        /// Content root the identifiers are derived from
        #[arg(short, long, default_value = "content")]
        root: PathBuf,

        /// Files to resolve; every file under the root when omitted
        files: Vec<PathBuf>,
    },

    /// Print a link from one page path to another
    Link {
        /// Output path of the page the link appears on
        #[arg(long)]
        from: String,

        /// Output path being linked to
        #[arg(long)]
        to: String,

        /// Link text
        #[arg(long, default_value = "link")]
        text: String,

        /// Emit the relative path instead of an anchor
        #[arg(long)]
        relative: bool,
    },

    /// Print the effective site configuration
    Config,
}
