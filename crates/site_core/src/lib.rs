//! Site core: pure item model, configuration and title resolution.
mod config;
mod helpers;
mod item;
mod title;

pub use config::{ConfigError, SiteConfig, DEFAULT_SITE_NAME, DEFAULT_TITLE_SEPARATOR};
pub use helpers::{Assigns, Helpers, LinkError, LinkResolver, LinkTarget, RenderError, Renderer};
pub use item::{Attributes, Item};
pub use title::{title_for, TitleResolver};
