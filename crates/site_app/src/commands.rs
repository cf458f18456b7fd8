use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use site_core::{Helpers, Item, SiteConfig};
use site_engine::{load_config, load_item, load_items, LayoutRegistry, LinkTo, LoadedItem};
use site_logging::site_info;

use crate::cli::{Cli, Command};

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)
        .with_context(|| format!("loading config {:?}", cli.config))?;
    let helpers = Helpers::new(config, LayoutRegistry::new(), LinkTo::new());
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Titles { root, files } => titles(&helpers, &root, &files, &mut out),
        Command::Link {
            from,
            to,
            text,
            relative,
        } => link(&helpers, &from, &to, &text, relative, &mut out),
        Command::Config => show_config(helpers.config(), &mut out),
    }
}

fn titles(helpers: &Helpers, root: &Path, files: &[PathBuf], out: &mut impl Write) -> Result<()> {
    let items: Vec<LoadedItem> = if files.is_empty() {
        load_items(root).with_context(|| format!("loading content from {root:?}"))?
    } else {
        files
            .iter()
            .map(|file| load_item(root, file))
            .collect::<Result<_, _>>()?
    };

    for loaded in &items {
        writeln!(
            out,
            "{}\t{}",
            loaded.item.identifier(),
            helpers.title_for(&loaded.item)
        )?;
    }
    site_info!("Resolved {} titles", items.len());
    Ok(())
}

fn link(
    helpers: &Helpers,
    from: &str,
    to: &str,
    text: &str,
    relative: bool,
    out: &mut impl Write,
) -> Result<()> {
    let current = Item::new(from).with_path(from);
    let rendered = if relative {
        helpers.relative_path_to(to, &current)?
    } else {
        helpers.link_to_unless_current(text, to, &[], Some(&current))?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn show_config(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "site_name: {:?}", config.site_name())?;
    writeln!(out, "title_separator: {:?}", config.title_separator())?;
    Ok(())
}
