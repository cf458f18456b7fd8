use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use site_core::Item;
use site_logging::{site_debug, site_info};
use thiserror::Error;
use walkdir::WalkDir;

use crate::frontmatter::{parse_frontmatter, FrontmatterError};

const INDEX_STEM: &str = "index";
const OUTPUT_FILE: &str = "index.html";
// Everything else under the content root (images, fonts, ...) is an asset.
const PAGE_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm", "txt"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bad frontmatter in {path:?}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
    #[error("{path:?} is not inside content root {root:?}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("{first:?} and {second:?} both map to {identifier}")]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("failed to walk content root: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedItem {
    pub item: Item,
    pub body: String,
    pub source: PathBuf,
}

/// Identifier for a content file given its path relative to the content root.
///
/// `about.md` becomes `/about/`, `posts/index.md` becomes `/posts/`.
pub fn identifier_for(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(stem) = relative.file_stem().map(|s| s.to_string_lossy()) {
        if stem != INDEX_STEM {
            segments.push(stem.into_owned());
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

pub fn output_path_for(identifier: &str) -> String {
    format!("{identifier}{OUTPUT_FILE}")
}

/// Read one content file below `root` into an item.
pub fn load_item(root: &Path, file: &Path) -> Result<LoadedItem, LoadError> {
    let relative = relative_to_root(root, file).ok_or_else(|| LoadError::OutsideRoot {
        path: file.to_path_buf(),
        root: root.to_path_buf(),
    })?;

    let content = fs::read_to_string(file).map_err(|source| LoadError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let parsed = parse_frontmatter(&content).map_err(|source| LoadError::Frontmatter {
        path: file.to_path_buf(),
        source,
    })?;

    let identifier = identifier_for(&relative);
    site_debug!("Loaded {:?} as {}", file, identifier);
    let item = Item::new(identifier.clone())
        .with_attributes(parsed.attributes)
        .with_path(output_path_for(&identifier));

    Ok(LoadedItem {
        item,
        body: parsed.body,
        source: file.to_path_buf(),
    })
}

/// Load every non-hidden page below `root`, ordered by path.
///
/// Files without a page extension are skipped. Two pages mapping to the
/// same identifier (`about.md` and `about/index.md`) are an error.
pub fn load_items(root: &Path) -> Result<Vec<LoadedItem>, LoadError> {
    let mut items: Vec<LoadedItem> = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_page(entry.path()) {
            site_debug!("Skipping asset {:?}", entry.path());
            continue;
        }
        let loaded = load_item(root, entry.path())?;
        let identifier = loaded.item.identifier().to_string();
        if let Some(first) = seen.insert(identifier.clone(), loaded.source.clone()) {
            return Err(LoadError::DuplicateIdentifier {
                identifier,
                first,
                second: loaded.source,
            });
        }
        items.push(loaded);
    }
    site_info!("Loaded {} items from {:?}", items.len(), root);
    Ok(items)
}

pub fn is_page(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// `file` relative to `root`, treating `./content/a.md`, `content/a.md` and
/// absolute spellings of the same file alike.
fn relative_to_root(root: &Path, file: &Path) -> Option<PathBuf> {
    if let Ok(relative) = without_cur_dir(file).strip_prefix(without_cur_dir(root)) {
        if relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Some(relative.to_path_buf());
        }
    }
    let root = fs::canonicalize(root).ok()?;
    let file = fs::canonicalize(file).ok()?;
    file.strip_prefix(&root).ok().map(Path::to_path_buf)
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
