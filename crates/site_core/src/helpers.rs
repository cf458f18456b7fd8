use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::item::Item;
use crate::title::TitleResolver;

/// Named values handed to a layout.
pub type Assigns = BTreeMap<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("cannot link to item {identifier}: it has no output path")]
    NoPath { identifier: String },
    #[error("relative paths need a current item with an output path")]
    NoCurrentPath,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown layout {0}")]
    UnknownLayout(String),
}

/// Something a link can point at.
#[derive(Debug, Clone, Copy)]
pub enum LinkTarget<'a> {
    Path(&'a str),
    Item(&'a Item),
}

impl<'a> LinkTarget<'a> {
    pub fn path(&self) -> Result<&'a str, LinkError> {
        match *self {
            LinkTarget::Path(path) => Ok(path),
            LinkTarget::Item(item) => item.path().ok_or_else(|| LinkError::NoPath {
                identifier: item.identifier().to_string(),
            }),
        }
    }
}

impl<'a> From<&'a str> for LinkTarget<'a> {
    fn from(path: &'a str) -> Self {
        LinkTarget::Path(path)
    }
}

impl<'a> From<&'a Item> for LinkTarget<'a> {
    fn from(item: &'a Item) -> Self {
        LinkTarget::Item(item)
    }
}

/// Host capability that renders a layout by identifier.
pub trait Renderer: Send + Sync {
    fn render(&self, layout: &str, assigns: &Assigns) -> Result<String, RenderError>;
}

/// Host capability that builds links between pages.
///
/// `current` is the item whose page is being rendered.
pub trait LinkResolver: Send + Sync {
    fn link_to(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        attributes: &[(&str, &str)],
    ) -> Result<String, LinkError>;

    fn link_to_unless_current(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        attributes: &[(&str, &str)],
        current: Option<&Item>,
    ) -> Result<String, LinkError>;

    fn relative_path_to(&self, target: LinkTarget<'_>, current: &Item)
        -> Result<String, LinkError>;
}

/// Everything a page template may call, wired with the host's capabilities.
pub struct Helpers {
    titles: TitleResolver,
    renderer: Box<dyn Renderer>,
    links: Box<dyn LinkResolver>,
}

impl Helpers {
    pub fn new(
        config: SiteConfig,
        renderer: impl Renderer + 'static,
        links: impl LinkResolver + 'static,
    ) -> Self {
        Self {
            titles: TitleResolver::new(config),
            renderer: Box::new(renderer),
            links: Box::new(links),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        self.titles.config()
    }

    pub fn title_for(&self, item: &Item) -> String {
        self.titles.resolve(item)
    }

    pub fn render(&self, layout: &str, assigns: &Assigns) -> Result<String, RenderError> {
        self.renderer.render(layout, assigns)
    }

    pub fn link_to<'a>(
        &self,
        text: &str,
        target: impl Into<LinkTarget<'a>>,
        attributes: &[(&str, &str)],
    ) -> Result<String, LinkError> {
        self.links.link_to(text, target.into(), attributes)
    }

    pub fn link_to_unless_current<'a>(
        &self,
        text: &str,
        target: impl Into<LinkTarget<'a>>,
        attributes: &[(&str, &str)],
        current: Option<&Item>,
    ) -> Result<String, LinkError> {
        self.links
            .link_to_unless_current(text, target.into(), attributes, current)
    }

    pub fn relative_path_to<'a>(
        &self,
        target: impl Into<LinkTarget<'a>>,
        current: &Item,
    ) -> Result<String, LinkError> {
        self.links.relative_path_to(target.into(), current)
    }
}
